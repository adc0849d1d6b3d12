use reqwest::StatusCode;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no prompt provided: pass as args or pipe via stdin")]
    MissingPrompt,

    #[error("missing API key: set OPENROUTER_API_KEY or --api-key")]
    MissingApiKey,

    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API key is not a valid header value")]
    InvalidApiKey,

    #[error("HTTP {}: {body}", .status.as_u16())]
    HttpStatus { status: StatusCode, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no choices returned")]
    EmptyResult,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    BodyRead(#[source] std::io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("cancelled")]
    Cancelled,
}

impl Error {
    /// Failures detected before any network activity.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::MissingPrompt | Error::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_carries_code_and_body() {
        let err = Error::HttpStatus {
            status: StatusCode::NOT_FOUND,
            body: "boom".to_owned(),
        };
        assert_eq!(err.to_string(), "HTTP 404: boom");
    }

    #[test]
    fn body_reads_and_local_io_are_told_apart() {
        use std::io;
        let read = Error::BodyRead(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
        assert_eq!(read.to_string(), "transport error: reset");

        let write: Error = io::Error::new(io::ErrorKind::BrokenPipe, "Broken pipe").into();
        assert_eq!(write.to_string(), "I/O error: Broken pipe");
    }

    #[test]
    fn precondition_kinds() {
        assert!(Error::MissingPrompt.is_precondition());
        assert!(Error::MissingApiKey.is_precondition());
        assert!(!Error::EmptyResult.is_precondition());
    }
}
