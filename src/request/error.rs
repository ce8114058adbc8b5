//! Request failure taxonomy.
//!
//! Every failure collapses to one user-facing message (`Display`), which is
//! what the toast shows and what callers match on. Status and server detail
//! stay available for callers that want them.

/// A failed network exchange: nothing usable came back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors produced by [`super::RequestClient::request`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The server answered outside the 2xx range.
    ///
    /// `message` is the server `detail` when one was sent, otherwise a
    /// generic status message.
    #[error("{message}")]
    Status { status: u16, message: String, detail: Option<String> },

    /// No response arrived (connection refused, DNS, CORS, aborted...).
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// The request body could not be serialized.
    #[error("request body encode failed: {0}")]
    Encode(String),

    /// A 2xx response whose body is not JSON.
    #[error("response parse failed: {0}")]
    Decode(String),
}

impl RequestError {
    /// The single message shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-supplied `detail`, when present.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
