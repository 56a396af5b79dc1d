use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Backend failure: {0}")]
    BackendFailure(String),

    #[error("Malformed {kind} block: {reason}")]
    MalformedBlock { kind: &'static str, reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    pub(crate) fn malformed(kind: &'static str, reason: impl Into<String>) -> Self {
        RenderError::MalformedBlock {
            kind,
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
