//! Module dispatch: one entry point per token family.
//!
//! A [`Compiler`] takes a module's JSON config (an `outDir` plus a
//! `data` payload) and produces the CSS artifacts for that module.
//! Modules fail independently: an invalid colors config does not stop
//! spacing from compiling.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::colors;
use crate::css::render;
use crate::error::CompileError;
use crate::flatten::Flattener;
use crate::layout::{self, sheets};
use crate::sizes;

/// Banner prepended to every emitted file.
pub const GENERATED_HEADER: &str = "/*\n * Generated file. Do not edit by hand:\n * changes are overwritten on the next css run.\n */\n\n";

/// The four token families the pipeline knows how to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    Colors,
    Typography,
    Spacing,
    Layout,
}

impl ModuleKind {
    /// Every module, in the order they are compiled and listed.
    pub const ALL: [ModuleKind; 4] = [
        ModuleKind::Colors,
        ModuleKind::Typography,
        ModuleKind::Spacing,
        ModuleKind::Layout,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModuleKind::Colors => "colors",
            ModuleKind::Typography => "typography",
            ModuleKind::Spacing => "spacing",
            ModuleKind::Layout => "layout",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ModuleKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A module's on-disk configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleConfig {
    /// Directory the module's CSS lands in, relative to the caller.
    #[serde(rename = "outDir")]
    pub out_dir: PathBuf,
    /// Module-specific payload, validated by the module itself.
    pub data: Value,
}

/// One output file: where it goes and what it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    fn new(config: &ModuleConfig, name: &str, body: String) -> Self {
        Artifact {
            path: config.out_dir.join(name),
            content: format!("{}{}", GENERATED_HEADER, body),
        }
    }
}

/// Compiles module configs into CSS artifacts.
///
/// Owns the flatten state so depth warnings surface once per path
/// across a whole run; create a fresh compiler per run.
#[derive(Debug, Default)]
pub struct Compiler {
    flattener: Flattener,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles one module. Validation problems come back as a single
    /// [`CompileError::Validation`] carrying every message at once.
    pub fn compile(
        &mut self,
        kind: ModuleKind,
        config: &ModuleConfig,
    ) -> Result<Vec<Artifact>, CompileError> {
        match kind {
            ModuleKind::Colors => {
                let sanitized = colors::validate(&config.data)?;
                let body = render(&colors::resolve(&sanitized)?);
                Ok(vec![Artifact::new(config, "colors.css", body)])
            }
            ModuleKind::Typography => {
                let nodes =
                    sizes::resolve(&config.data, "typography", "text", &mut self.flattener)?;
                Ok(vec![Artifact::new(config, "typography.css", render(&nodes))])
            }
            ModuleKind::Spacing => {
                let nodes =
                    sizes::resolve(&config.data, "spacing", "spacing", &mut self.flattener)?;
                Ok(vec![Artifact::new(config, "spacing.css", render(&nodes))])
            }
            ModuleKind::Layout => {
                let sanitized = layout::validate(&config.data)?;
                let base = render(&layout::resolve(&sanitized)?);
                Ok(vec![
                    Artifact::new(config, "_base-layout.css", base),
                    Artifact::new(config, "_layout-utilities.css", sheets::UTILITIES.to_string()),
                    Artifact::new(config, "_layout-structure.css", sheets::STRUCTURE.to_string()),
                    Artifact::new(config, "_layout-landmarks.css", sheets::LANDMARKS.to_string()),
                    Artifact::new(config, "_layout-areas.css", sheets::AREAS.to_string()),
                    Artifact::new(config, "layout.css", sheets::INDEX.to_string()),
                ])
            }
        }
    }

    /// Drains the depth warnings collected so far.
    pub fn take_warnings(&mut self) -> Vec<String> {
        self.flattener.take_warnings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(out_dir: &str, data: &str) -> ModuleConfig {
        ModuleConfig {
            out_dir: PathBuf::from(out_dir),
            data: serde_json::from_str(data).unwrap(),
        }
    }

    #[test]
    fn test_module_names_round_trip() {
        for kind in ModuleKind::ALL {
            assert_eq!(ModuleKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ModuleKind::from_name("grid"), None);
    }

    #[test]
    fn test_spacing_artifact_lands_in_out_dir() {
        let mut compiler = Compiler::new();
        let artifacts = compiler
            .compile(
                ModuleKind::Spacing,
                &config("styles/spacing", r#"{ "sizes": { "gutter": [16, 24] } }"#),
            )
            .unwrap();
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].path, PathBuf::from("styles/spacing/spacing.css"));
        assert!(artifacts[0].content.starts_with(GENERATED_HEADER));
        assert!(artifacts[0].content.contains("--spacing-gutter: clamp("));
    }

    #[test]
    fn test_layout_emits_six_files() {
        let mut compiler = Compiler::new();
        let artifacts = compiler
            .compile(
                ModuleKind::Layout,
                &config("styles/layout", r#"{ "container": 1280, "gap": [16, 24] }"#),
            )
            .unwrap();
        let names: Vec<_> = artifacts
            .iter()
            .map(|a| a.path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "_base-layout.css",
                "_layout-utilities.css",
                "_layout-structure.css",
                "_layout-landmarks.css",
                "_layout-areas.css",
                "layout.css",
            ]
        );
        assert!(artifacts[5].content.contains("@import \"./_base-layout.css\";"));
    }

    #[test]
    fn test_colors_compile_end_to_end() {
        let mut compiler = Compiler::new();
        let artifacts = compiler
            .compile(
                ModuleKind::Colors,
                &config(
                    "styles/colors",
                    r##"{
                        "schemes": { "modes": ["light", "dark"], "toggle": "class" },
                        "colors": {
                            "base": "surface",
                            "map": {
                                "neutral": {
                                    "surface": ["#fafafa", "#111111"],
                                    "text": ["#222222", "#eeeeee"]
                                }
                            }
                        },
                        "default": "neutral"
                    }"##,
                ),
            )
            .unwrap();
        assert_eq!(artifacts[0].path, PathBuf::from("styles/colors/colors.css"));
        assert!(artifacts[0].content.contains("--color-surface:"));
    }

    #[test]
    fn test_modules_fail_independently() {
        let mut compiler = Compiler::new();

        let err = compiler
            .compile(ModuleKind::Typography, &config("out", r#"{ "wrong": true }"#))
            .unwrap_err();
        assert!(matches!(err, CompileError::Validation(_)));

        // The failure above must not poison later modules.
        let ok = compiler.compile(
            ModuleKind::Spacing,
            &config("out", r#"{ "sizes": { "s": [8] } }"#),
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_depth_warnings_surface_through_compiler() {
        let mut compiler = Compiler::new();
        assert!(compiler.take_warnings().is_empty());
    }
}
