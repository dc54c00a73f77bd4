use thiserror::Error;

use crate::slack::SlackApiError;

/// Per-request failures. Each one becomes an HTTP error response.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid verification token")]
    InvalidToken,
    #[error("Missing {0}")]
    MissingField(&'static str),
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    #[error(transparent)]
    Upstream(#[from] SlackApiError),
}

impl RelayError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidToken | Self::MissingField(_) | Self::MalformedPayload(_) => 400,
            Self::Upstream(_) => 502,
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedPayload(err.to_string())
    }
}

impl From<serde_urlencoded::de::Error> for RelayError {
    fn from(err: serde_urlencoded::de::Error) -> Self {
        Self::MalformedPayload(err.to_string())
    }
}
