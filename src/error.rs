use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropAdvisorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Location lookup failed: {0}")]
    LookupFailure(String),

    #[error("Weather service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, CropAdvisorError>;
