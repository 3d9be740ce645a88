use std::fmt;

use thiserror::Error;

/// The sort of member a bridge lookup was for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Method,
    Constant,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Field => f.write_str("field"),
            MemberKind::Method => f.write_str("method"),
            MemberKind::Constant => f.write_str("constant"),
        }
    }
}

/// Errors produced by bridge lookups and calls.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BridgeError {
    /// The type registered no member of that name and sort.
    #[error("{type_name} has no {kind} named '{member}'")]
    UnknownMember {
        type_name: &'static str,
        member: String,
        kind: MemberKind,
    },

    /// An instance method was called without an instance.
    #[error("method '{member}' of {type_name} needs an instance")]
    InstanceRequired {
        type_name: &'static str,
        member: String,
    },

    /// A positional argument was missing or could not be decoded.
    #[error("argument {index} of '{member}': {reason}")]
    Argument {
        member: String,
        index: usize,
        reason: String,
    },

    /// A member's value could not be converted to JSON.
    #[error("serialization error in '{member}': {reason}")]
    Serialization { member: String, reason: String },
}

pub type BridgeResult<T> = Result<T, BridgeError>;
