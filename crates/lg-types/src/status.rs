use std::fmt;

/// The single human-readable status line each page shows after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Failure(String),
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self::Failure(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
