//! Error types for plivo-rest.

use std::fmt;

/// Boxed error produced by a [`crate::Transport`] implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type returned from every [`crate::RestClient`] request.
#[derive(Debug)]
pub enum RestError {
    /// The request path was empty.
    InvalidPath,
    /// An HTTP verb other than GET, POST, PUT or DELETE was requested.
    UnsupportedMethod(String),
    /// The API answered with a status of 300 or above.
    Http {
        /// Response status code.
        status: u16,
        /// Raw response body, uninterpreted.
        body:   Vec<u8>,
    },
    /// The transport failed before a response was received.
    Transport(TransportError),
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPath           => write!(f, "invalid path parameter"),
            Self::UnsupportedMethod(m)  => write!(f, "HTTP {m} method not implemented"),
            Self::Http { status, body } => {
                write!(f, "HTTP {status}: {}", String::from_utf8_lossy(body))
            }
            Self::Transport(e)          => write!(f, "transport error: {e}"),
        }
    }
}

impl std::error::Error for RestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e.as_ref()),
            _                  => None,
        }
    }
}

impl RestError {
    /// Status code of an [`RestError::Http`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _                         => None,
        }
    }
}
