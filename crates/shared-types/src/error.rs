use serde::{Deserialize, Serialize};

/// Why a dashboard request failed.
///
/// The `Display` output is the reason text shown to the user verbatim.
/// None of these are retried; each is terminal for the identifier that
/// was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    /// The body was not valid JSON for the expected payload.
    #[error("Invalid response body: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn network(detail: impl ToString) -> Self {
        FetchError::Network(detail.to_string())
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}
