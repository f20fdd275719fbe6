use thiserror::Error;

/// Errors produced while generating statements or loading a spec.
#[derive(Debug, Error)]
pub enum Error {
    /// A column carried a datatype outside of `text`, `bool` and `int`.
    #[error("unknown Datatype: {0:?}")]
    UnknownDatatype(String),

    #[error("failed to read spec: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse spec: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
