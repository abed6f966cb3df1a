use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("student not found: {0}")]
    SubjectNotFound(String),
    #[error("store error: {0}")]
    Store(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("fixture decode failed: {0}")]
    Fixture(#[from] serde_json::Error),
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T, E = ProgressError> = std::result::Result<T, E>;
