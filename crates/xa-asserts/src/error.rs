use thiserror::Error;
use tracing::warn;
use xa_diff::DiffReport;

/// A failed expectation, with a human-readable message.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    pub message: String,
    /// The structural diff behind a failed comparison, when there was one.
    pub report: Option<DiffReport>,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            report: None,
        }
    }

    pub fn with_report(message: impl Into<String>, report: DiffReport) -> Self {
        Self {
            message: message.into(),
            report: Some(report),
        }
    }
}

/// Any error the assertion helpers and the crates they re-export produce.
#[derive(Debug, Error)]
pub enum AssertError {
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    #[error("validation error: {0}")]
    Validate(#[from] xa_validate::ValidateError),

    #[error("diff error: {0}")]
    Diff(#[from] xa_diff::DiffError),

    #[error("generator error: {0}")]
    Gen(#[from] xa_gen::GenError),

    #[error("bridge error: {0}")]
    Bridge(#[from] xa_bridge::BridgeError),
}

pub type AssertResult<T> = Result<T, AssertError>;

/// Panic with the failure's message, attributed to the caller.
#[track_caller]
pub fn fail(failure: AssertionFailure) -> ! {
    warn!(message = %failure.message, "assertion failed");
    panic!("{}", failure.message)
}

/// Unwrap a check result or fail.
#[track_caller]
pub(crate) fn enforce(result: Result<(), AssertionFailure>) {
    if let Err(failure) = result {
        fail(failure);
    }
}
