//! Errors raised when option text cannot be accepted

use thiserror::Error;

/// A value that could not be converted or violated its option's constraints
///
/// Always recoverable: the option keeps its previous value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidValue {
    #[error("invalid boolean")]
    InvalidBoolean,
    #[error("expected integer")]
    NotAnInteger,
    #[error("out of int range")]
    OutOfIntRange,
    #[error("out of range (allowed {min} to {max})")]
    OutOfRange { min: String, max: String },
    #[error("unknown mode")]
    UnknownWindowMode,
    #[error("expected <width>x<height> where <width> and <height> are integers")]
    InvalidResolution,
}
