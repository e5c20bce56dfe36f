//! Error handling

use reqwest::StatusCode;

/// Everything that can go wrong during one generation cycle.
#[derive(Debug)]
pub enum MemeError {
    /// The topic was empty after trimming
    Validation,
    /// The request never got a complete answer from the service
    Transport(String),
    /// The service answered with a non-success status
    Service {
        /// Status code returned by the service
        status: StatusCode,
        /// Most specific message available for the failure
        message: String,
    },
    /// A success response whose body wasn't a generation result
    Parse(String),
}

impl MemeError {
    /// The text shown to the user, without the `Error: ` prefix.
    pub fn user_message(&self) -> String {
        match self {
            MemeError::Validation => crate::constants::EMPTY_TOPIC_NOTICE.to_string(),
            MemeError::Transport(message) | MemeError::Parse(message) => message.clone(),
            MemeError::Service { message, .. } => message.clone(),
        }
    }
}

impl std::fmt::Display for MemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemeError::Validation => write!(f, "Validation failed: topic is empty"),
            MemeError::Transport(message) => write!(f, "Transport error: {message}"),
            MemeError::Service { status, message } => {
                write!(f, "Service error {status}: {message}")
            }
            MemeError::Parse(message) => write!(f, "Failed to parse response: {message}"),
        }
    }
}

impl std::error::Error for MemeError {}

impl From<reqwest::Error> for MemeError {
    fn from(err: reqwest::Error) -> Self {
        MemeError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for MemeError {
    fn from(err: serde_json::Error) -> Self {
        MemeError::Parse(err.to_string())
    }
}

impl From<url::ParseError> for MemeError {
    fn from(err: url::ParseError) -> Self {
        MemeError::Transport(format!("invalid service url: {err}"))
    }
}
