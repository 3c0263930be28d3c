use thiserror::Error;

/// Errors surfaced by ruleset API calls
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection-level failure reported by the HTTP stack (DNS, refused
    /// connection, timeout). Opaque passthrough, never retried here.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Non-success HTTP status returned by the service. The message carries
    /// the raw error body text as received.
    #[error("API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be parsed as JSON or decoded into the
    /// expected shape.
    #[error("Decode error: {message}")]
    Decode { message: String },
}

impl ClientError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}
