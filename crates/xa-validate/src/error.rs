use thiserror::Error;
use xa_types::Kind;

/// Errors produced by validators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    /// The value's kind is not among the allowed kinds.
    #[error("{}", mismatch_message(.var_name, .expected, .found))]
    TypeMismatch {
        var_name: Option<String>,
        expected: Vec<Kind>,
        found: Kind,
    },

    /// A type assertion was called with no allowed kinds.
    #[error("list of allowed types cannot be empty")]
    EmptyAllowedKinds,

    /// The text does not have the RFC3339 shape.
    #[error("'{0}' is not a valid RFC3339 time stamp string")]
    NotRfc3339(String),

    /// The text has the RFC3339 shape but names no real instant.
    #[error("'{stamp}' is not a valid date-time: {reason}")]
    InvalidTimestamp { stamp: String, reason: String },
}

impl ValidateError {
    /// The kinds the value was expected to have, for mismatches.
    pub fn expected(&self) -> Option<&[Kind]> {
        match self {
            ValidateError::TypeMismatch { expected, .. } => Some(expected),
            _ => None,
        }
    }

    /// The kind the value actually had, for mismatches.
    pub fn found(&self) -> Option<Kind> {
        match self {
            ValidateError::TypeMismatch { found, .. } => Some(*found),
            _ => None,
        }
    }
}

fn mismatch_message(var_name: &Option<String>, expected: &[Kind], found: &Kind) -> String {
    let name = var_name.as_deref().unwrap_or("value");
    let kinds = expected
        .iter()
        .map(Kind::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if expected.len() == 1 {
        format!("\"{name}\" must be type(s) of {kinds} but {found} found.")
    } else {
        format!("\"{name}\" must be one of allowed types: {kinds} but {found} found.")
    }
}

pub type ValidateResult<T> = Result<T, ValidateError>;
