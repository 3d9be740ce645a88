use thiserror::Error;

/// Errors produced by generators when called with unusable arguments.
#[derive(Debug, Error, PartialEq)]
pub enum GenError {
    #[error("length must be greater than 0")]
    InvalidLength,

    #[error("string length {length} cannot be smaller than prefix length {prefix_len} + {margin} chars")]
    PrefixTooLong {
        length: usize,
        prefix_len: usize,
        margin: usize,
    },

    #[error("probability must be within 0-1, got {0}")]
    InvalidProbability(f64),

    #[error("{what} bound {value} is outside [{min}, {max}]")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("range bounds must be finite, got [{min}, {max}]")]
    NonFinite { min: f64, max: f64 },

    #[error("range [{min}, {max}] is too wide to sample")]
    RangeOverflow { min: f64, max: f64 },
}

pub type GenResult<T> = Result<T, GenError>;
