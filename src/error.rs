#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    Options(#[from] crate::options::OptionsError),

    #[error("invalid query parameter {0:?}: expected key=value")]
    InvalidParam(String),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
