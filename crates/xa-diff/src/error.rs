//! Error types for the diff crate.

use std::fmt;

use xa_types::Kind;

/// Which operand of a comparison an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Errors that can occur during diff operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// An untyped operand was a scalar where a mapping was required.
    #[error("{side} operand must be an object or array, got {found}")]
    NotAContainer { side: Side, found: Kind },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
