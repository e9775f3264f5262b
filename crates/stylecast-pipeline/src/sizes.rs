//! Shared resolver for the typography and spacing modules.
//!
//! Both modules are a nested `sizes` tree of clamp arrays; the only
//! difference is the token prefix (`--text-*` vs `--spacing-*`). The
//! tree is flattened, every leaf runs through the clamp calculator and
//! the result lands in a single `@theme` block.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::clamp::{clamp, ClampSize, SizeValue};
use crate::css::{CssNode, Decl};
use crate::error::CompileError;
use crate::flatten::{FlattenOptions, Flattener, TokenTree};
use crate::report::ErrorReport;

#[derive(Debug, Clone, Deserialize)]
struct SizesData {
    sizes: IndexMap<String, TokenTree<Value>>,
}

/// Validates the raw config shape shared by typography and spacing.
pub fn validate(data: &Value, module: &str) -> Result<(), CompileError> {
    let mut report = ErrorReport::new();

    let Some(object) = data.as_object() else {
        report.push(format!("{}: config 'data' must be an object", module));
        return Err(CompileError::Validation(report));
    };

    for key in object.keys() {
        if key != "sizes" {
            report.push(format!("{}: unknown field \"{}\"", module, key));
        }
    }

    match object.get("sizes") {
        None => report.push(format!("{}: missing 'sizes' field", module)),
        Some(sizes) if !sizes.is_object() => {
            report.push(format!("{}: 'sizes' must be an object", module));
        }
        Some(_) => {}
    }

    report.into_result(())
}

/// Resolves a sizes tree into a `@theme` token block.
///
/// Leaf errors (non-array values, bad clamp shapes) are accumulated
/// per flattened path; any error empties the result for this module.
pub fn resolve(
    data: &Value,
    module: &str,
    prefix: &str,
    flattener: &mut Flattener,
) -> Result<Vec<CssNode>, CompileError> {
    validate(data, module)?;
    let sanitized: SizesData = serde_json::from_value(data.clone())?;

    let mut report = ErrorReport::new();
    let flat = flattener.flatten(
        &sanitized.sizes,
        &FlattenOptions::default(),
        |key, value: &Value| {
            if !value.is_array() {
                report.push(format!(
                    "{}: invalid value at \"sizes.{}\" - expected a size array or nested group",
                    module, key
                ));
                return None;
            }
            let size = match ClampSize::from_value(value) {
                Ok(size) => size,
                Err(_) => {
                    report.push(format!(
                        "{}: invalid clamp value at \"sizes.{}\"",
                        module, key
                    ));
                    return None;
                }
            };
            match clamp(&size) {
                Ok(value) => Some(value),
                Err(err) => {
                    report.push(format!(
                        "{}: invalid clamp value at \"sizes.{}\": {}",
                        module, key, err
                    ));
                    None
                }
            }
        },
    );
    report.into_result(())?;

    let theme = flat
        .into_iter()
        .map(|(key, value)| {
            let token = match value {
                SizeValue::Zero => "0rem".to_string(),
                css => css.to_string(),
            };
            (format!("--{}-{}", prefix, key), Decl::Value(token))
        })
        .collect();

    Ok(vec![CssNode::rule("@theme", theme)])
}
