//! Ordered, deduplicating error accumulation.
//!
//! Validation is exhaustive rather than fail-fast: every structural
//! problem in a module config is recorded before compilation is
//! aborted. [`ErrorReport`] keeps messages in the order they were
//! discovered while suppressing exact duplicates.

use std::collections::HashSet;
use std::fmt;

use crate::error::CompileError;

/// An insertion-ordered set of human-readable error messages.
#[derive(Debug, Default, Clone)]
pub struct ErrorReport {
    messages: Vec<String>,
    seen: HashSet<String>,
}

impl ErrorReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message unless an identical one was already recorded.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        if self.seen.insert(message.clone()) {
            self.messages.push(message);
        }
    }

    /// Returns true if no messages have been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of distinct messages recorded.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// The recorded messages, in discovery order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Finishes a validation pass: returns `value` if the report is
    /// clean, otherwise the accumulated messages as a
    /// [`CompileError::Validation`].
    pub fn into_result<T>(self, value: T) -> Result<T, CompileError> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(CompileError::Validation(self))
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "- {}", message)?;
        }
        Ok(())
    }
}

impl PartialEq for ErrorReport {
    fn eq(&self, other: &Self) -> bool {
        self.messages == other.messages
    }
}
