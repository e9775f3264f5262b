//! Error types for module compilation.
//!
//! Two failure kinds exist. [`CompileError::Validation`] carries the
//! full set of structural problems found in a config; nothing is
//! emitted for a module that fails validation. [`CompileError::Processing`]
//! covers invariants discovered mid-resolution (for example a clamp
//! computation over an empty viewport range). Either way the failure
//! is confined to the module being compiled.

use thiserror::Error;

use crate::clamp::ClampError;
use crate::report::ErrorReport;

/// Error returned when a module fails to compile.
#[derive(Debug, Error, PartialEq)]
pub enum CompileError {
    /// Structural problems found while validating a module config.
    #[error("invalid configuration:\n{0}")]
    Validation(ErrorReport),

    /// A resolver hit an invariant it could not recover from.
    #[error("processing failed: {0}")]
    Processing(String),
}

impl CompileError {
    /// The individual messages behind this error, for display.
    pub fn messages(&self) -> Vec<String> {
        match self {
            CompileError::Validation(report) => report.messages().to_vec(),
            CompileError::Processing(message) => vec![message.clone()],
        }
    }
}

impl From<ClampError> for CompileError {
    fn from(err: ClampError) -> Self {
        CompileError::Processing(err.to_string())
    }
}

impl From<serde_json::Error> for CompileError {
    fn from(err: serde_json::Error) -> Self {
        CompileError::Processing(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_lists_messages() {
        let mut report = ErrorReport::new();
        report.push("colors: missing 'colors' section");
        report.push("colors: 'default' must be a string");
        let err = CompileError::Validation(report);
        let text = err.to_string();
        assert!(text.contains("missing 'colors' section"));
        assert!(text.contains("'default' must be a string"));
    }

    #[test]
    fn test_messages_for_processing() {
        let err = CompileError::Processing("boom".into());
        assert_eq!(err.messages(), vec!["boom".to_string()]);
    }
}
