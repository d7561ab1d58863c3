use thiserror::Error;

/// Every outcome of a client operation that is not a success.
///
/// All variants are terminal for the operation that raised them; the client
/// never retries. Presentation is the caller's job.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    Validation { message: String },
    #[error("{message}")]
    Precondition { message: String },
    #[error("unauthorized, check the access token")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("unexpected status {status}")]
    Http { status: u16 },
    #[error("connection failure: {message}")]
    Transport { message: String },
    #[error("failed to encode request body")]
    EncodeRequest {
        #[source]
        cause: serde_json::Error,
    },
    #[error("failed to parse response")]
    ParseResponse {
        #[source]
        cause: serde_json::Error,
    },
}

impl Error {
    /// Classify an HTTP status code. 2xx is not an error.
    pub fn from_status(status: u16) -> Option<Error> {
        match status {
            200..=299 => None,
            401 => Some(Error::Unauthorized),
            403 => Some(Error::Forbidden),
            404 => Some(Error::NotFound),
            status => Some(Error::Http { status }),
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Error {
        Error::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn precondition(message: impl Into<String>) -> Error {
        Error::Precondition {
            message: message.into(),
        }
    }

    pub(crate) fn transport(cause: reqwest::Error) -> Error {
        Error::Transport {
            message: cause.to_string(),
        }
    }
}
