//! Error types for Card Forge

use thiserror::Error;

/// Main error type for card generation operations
#[derive(Error, Debug)]
pub enum CardError {
    /// The request never completed (connection refused, DNS, I/O)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status, optionally carrying a
    /// structured `{"error": ...}` message in the body
    #[error("server error ({status})")]
    Server { status: u16, message: Option<String> },

    /// A 2xx body that could not be parsed as a card
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl CardError {
    /// Detail shown to the user in the error toast.
    ///
    /// Server errors prefer the message the server attached; without one the
    /// numeric status is embedded in a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            CardError::Server {
                message: Some(msg), ..
            } => msg.clone(),
            CardError::Server {
                status,
                message: None,
            } => format!("Server error ({status})"),
            CardError::Network(detail) => detail.clone(),
            CardError::Malformed(detail) => detail.clone(),
        }
    }
}
