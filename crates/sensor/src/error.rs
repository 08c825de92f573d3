use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SensorError {
    #[error("sensor already exists: {0}")]
    DuplicateId(String),

    #[error("sensor not found: {0}")]
    SensorNotFound(String),

    #[error("unrecognized sensor kind: {0}")]
    UnrecognizedKind(String),

    #[error("sensor id must not be empty")]
    EmptyId,
}

pub type Result<T> = std::result::Result<T, SensorError>;
