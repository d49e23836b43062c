use thiserror::Error;

/// Status text for failures where the backend could not be heard from.
pub const SERVER_ERROR_MESSAGE: &str = "❌ Server error. Please try again later.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Backend unreachable or the connection dropped.
    #[error("request failed: {0}")]
    Network(String),

    /// Response body was not the JSON shape expected.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Non-2xx status, with the backend's message when it sent one.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl ApiError {
    /// Page status text: the backend's own message when present, `fallback`
    /// for other rejections, and a generic server error otherwise.
    pub fn describe(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message: Some(message), .. } => message.clone(),
            ApiError::Rejected { message: None, .. } => fallback.to_string(),
            _ => SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}
