use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("remote service returned status {status}")]
    RemoteService { status: u16 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid account identifier: {0}")]
    InvalidAccount(String),
}

impl ShowcaseError {
    /// Status code for remote failures, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ShowcaseError::RemoteService { status } => Some(*status),
            ShowcaseError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
