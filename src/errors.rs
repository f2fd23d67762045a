use std::fmt;

/// Sentinel status the backend answers with when it refuses a user deletion.
pub const DELETE_REFUSED_STATUS: u16 = 228;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    EmptyOperand,
    InvalidOperand(String),
    UnknownOperator(String),
    ServerRejected(u16),
    DeleteRefused,
    MalformedResponse(String),
    Transport(String),
    Storage(String),
}

impl ClientError {
    pub fn malformed(err: impl std::error::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }

    pub fn storage(err: impl std::error::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOperand => write!(f, "both operands are required"),
            Self::InvalidOperand(raw) => write!(f, "'{raw}' is not a number"),
            Self::UnknownOperator(raw) => write!(f, "unknown operator '{raw}'"),
            Self::ServerRejected(status) => write!(f, "server rejected the request with status {status}"),
            Self::DeleteRefused => write!(f, "server refused to delete the user"),
            Self::MalformedResponse(message) => write!(f, "malformed response: {message}"),
            Self::Transport(message) => write!(f, "request failed: {message}"),
            Self::Storage(message) => write!(f, "failed to persist state: {message}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::MalformedResponse(err.to_string());
        }
        match err.status() {
            Some(status) => Self::ServerRejected(status.as_u16()),
            None => Self::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err)
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(err)
    }
}
