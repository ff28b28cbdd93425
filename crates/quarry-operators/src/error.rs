use thiserror::Error;

/// Result type local to quarry-operators.
pub type Result<T> = std::result::Result<T, OpError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpError {
    /// An aggregate with no identity element was asked to reduce nothing.
    #[error("cannot compute {op} over an empty sequence")]
    EmptyAggregation { op: &'static str },

    #[error("join key shape mismatch: outer key has {outer} component(s), inner key has {inner}")]
    KeyMismatch { outer: usize, inner: usize },

    #[error("join key must name at least one field")]
    EmptyKey,

    #[error("unknown field '{field}' on {record}")]
    UnknownField { record: &'static str, field: String },
}
