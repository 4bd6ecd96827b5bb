use thiserror::Error;

#[derive(Debug, Error)]
pub enum MrzError {
    #[error("Invalid MRZ: {0}")]
    InvalidMrz(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Fill error: {0}")]
    Fill(String),
}

impl MrzError {
    /// A structural failure only means the scan is not complete yet.
    /// Callers should wait for more input instead of giving up.
    pub fn is_transient(&self) -> bool {
        matches!(self, MrzError::InvalidMrz(_))
    }
}
