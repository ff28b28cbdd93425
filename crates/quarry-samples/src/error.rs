use quarry_operators::OpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SampleError>;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("query failed: {0}")]
    Op(#[from] OpError),

    #[error("cannot encode result row: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("sink error: {0}")]
    Sink(String),

    #[error("unknown sample '{0}'")]
    UnknownSample(String),
}
