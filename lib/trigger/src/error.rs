//! Error types for the trigger crate.
//!
//! Resolution itself never fails; only turning raw text into a schedule can.

use std::fmt;

/// Errors from reading a schedule document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The document is not valid JSON.
    InvalidJson { reason: String },
    /// The document root is not an object.
    NotAnObject { found: &'static str },
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson { reason } => write!(f, "invalid schedule JSON: {reason}"),
            Self::NotAnObject { found } => {
                write!(f, "expected a JSON object, found {found}")
            }
        }
    }
}

impl std::error::Error for SpecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_error_display() {
        let err = SpecError::InvalidJson {
            reason: "EOF while parsing".to_string(),
        };
        assert!(err.to_string().contains("EOF while parsing"));

        let err = SpecError::NotAnObject { found: "array" };
        assert_eq!(err.to_string(), "expected a JSON object, found array");
    }
}
