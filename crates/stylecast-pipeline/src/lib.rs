//! Design token compilation pipeline.
//!
//! `stylecast-pipeline` turns structured design-token configuration
//! (colors, typography, spacing, layout) into deterministic CSS text.
//! It is a pure, synchronous library: callers hand it already-parsed
//! JSON configuration and get back a list of [`Artifact`]s (`path` +
//! `content`) to write wherever they like. No I/O happens inside the
//! pipeline itself.
//!
//! # Pipeline stages
//!
//! 1. **Validation** - each module's raw JSON is checked structurally,
//!    accumulating every problem into an [`ErrorReport`] before giving up.
//! 2. **Resolution** - the sanitized config is resolved into a sequence
//!    of [`CssNode`]s: responsive sizes via [`clamp`], color schemes via
//!    [`colors::resolve`], box geometry via [`layout::resolve`].
//! 3. **Serialization** - [`css::render`] walks the node sequence and
//!    emits indentation-stable CSS text, byte-identical across runs.
//!
//! # Example
//!
//! ```rust
//! use stylecast_pipeline::{Compiler, ModuleConfig, ModuleKind};
//!
//! let config: ModuleConfig = serde_json::from_str(r#"{
//!     "outDir": "./styles/spacing",
//!     "data": { "sizes": { "gutter": [16, 24] } }
//! }"#).unwrap();
//!
//! let mut compiler = Compiler::new();
//! let artifacts = compiler.compile(ModuleKind::Spacing, &config).unwrap();
//! assert!(artifacts[0].content.contains("--spacing-gutter: clamp("));
//! ```
//!
//! Each module compiles independently: a validation failure in one
//! module produces an error for that module only and never corrupts
//! another module's output.

pub mod clamp;
pub mod colors;
pub mod css;
pub mod error;
pub mod flatten;
pub mod layout;
pub mod module;
pub mod report;
pub mod sizes;

pub use clamp::{clamp, px_to_rem, ClampSize, SizeValue};
pub use css::{render, CssNode, Decl, Declarations};
pub use error::CompileError;
pub use flatten::{to_kebab_case, FlattenOptions, Flattener, TokenTree};
pub use module::{Artifact, Compiler, ModuleConfig, ModuleKind, GENERATED_HEADER};
pub use report::ErrorReport;
