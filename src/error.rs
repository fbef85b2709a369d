use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
    #[error("Config error: {0}")]
    Config(String),
    #[error("{0}")]
    Other(String),
}

/// Failure of a single catalog fetch. Callers treat every variant the same way;
/// the variants only exist so the log line says what went wrong.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
