//! Error types for description lookup and form validation
//!
//! Lookup failures are returned to the caller as-is. The only place an error
//! is swallowed is `try_enum_from_description`, which substitutes a default.

use std::fmt;

use thiserror::Error;

/// Main error type for the enum-select crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumSelectError {
    /// An absent value was passed where a value is required (caller bug).
    #[error("missing {enum_name} value")]
    MissingValue { enum_name: &'static str },

    #[error("empty description for {enum_name} lookup")]
    EmptyLabel { enum_name: &'static str },

    #[error("no {enum_name} value matches description '{label}'")]
    NotFound {
        enum_name: &'static str,
        label: String,
    },

    #[error("validation failed: {} field error(s)", .0.len())]
    Validation(Vec<FieldError>),
}

impl EnumSelectError {
    pub fn http_status(&self) -> u16 {
        match self {
            Self::MissingValue { .. } => 400,
            Self::EmptyLabel { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 422,
        }
    }
}

/// A single form field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub type Result<T> = std::result::Result<T, EnumSelectError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ── http_status ──────────────────────────────────────────────

    #[test]
    fn http_status_missing_value() {
        let e = EnumSelectError::MissingValue {
            enum_name: "UserColour",
        };
        assert_eq!(e.http_status(), 400);
    }

    #[test]
    fn http_status_empty_label() {
        let e = EnumSelectError::EmptyLabel {
            enum_name: "UserColour",
        };
        assert_eq!(e.http_status(), 400);
    }

    #[test]
    fn http_status_not_found() {
        let e = EnumSelectError::NotFound {
            enum_name: "UserColour",
            label: "x".into(),
        };
        assert_eq!(e.http_status(), 404);
    }

    #[test]
    fn http_status_validation() {
        assert_eq!(EnumSelectError::Validation(vec![]).http_status(), 422);
    }

    // ── Display ──────────────────────────────────────────────────

    #[test]
    fn display_not_found() {
        let e = EnumSelectError::NotFound {
            enum_name: "UserColour",
            label: "검정".into(),
        };
        assert_eq!(e.to_string(), "no UserColour value matches description '검정'");
    }

    #[test]
    fn display_missing_value() {
        let e = EnumSelectError::MissingValue {
            enum_name: "UserColour",
        };
        assert_eq!(e.to_string(), "missing UserColour value");
    }

    #[test]
    fn display_validation_count() {
        let err = FieldError::new("basic_selected_colour", "required");
        let e = EnumSelectError::Validation(vec![err.clone(), err]);
        assert_eq!(e.to_string(), "validation failed: 2 field error(s)");
    }

    #[test]
    fn field_error_display() {
        let err = FieldError::new("multiple_colours", "unknown colour 'teal'");
        assert_eq!(err.to_string(), "multiple_colours: unknown colour 'teal'");
    }
}
