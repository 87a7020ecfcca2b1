//! Error types for the management client
//!
//! Every fallible operation in the workspace returns [`Result`]. Errors are
//! grouped into coarse [`ErrorKind`]s so callers can react to a class of
//! failure (e.g. refresh credentials on `Authorization`) without matching on
//! message text.

use std::error::Error as StdError;

use crate::model::ApiError;

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used for sources owned by other crates (HTTP stack, parsers)
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed request; never retried
    Validation,
    /// 401 or login failure
    Authorization,
    /// Structured error returned by the management API
    Api,
    /// Response body could not be decoded (or request body encoded)
    Decode,
    /// Network, DNS or TLS failure
    Transport,
    /// Call aborted through its cancellation token
    Cancelled,
    /// Invalid or missing configuration
    Config,
}

/// Errors returned by the management client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid request: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid content-type: {0}")]
    ContentType(String),

    /// A single 401 response
    #[error("unauthorized")]
    Unauthorized,

    #[error("authorization: {0}")]
    Authorization(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("server error: {0}")]
    Server(String),

    /// Error response whose body is not an error document; carries the raw body
    #[error("{0}")]
    UnexpectedResponse(String),

    #[error("response: {format}: {source}")]
    Decode {
        format: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("request: {format}: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    #[error(transparent)]
    Transport(BoxError),

    #[error("operation cancelled")]
    Cancelled,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap a decoding failure for the given wire format
    pub fn decode(format: &'static str, source: impl Into<BoxError>) -> Self {
        Error::Decode {
            format,
            source: source.into(),
        }
    }

    /// Wrap an encoding failure for the given wire format
    pub fn encode(format: &'static str, message: impl std::fmt::Display) -> Self {
        Error::Encode {
            format,
            message: message.to_string(),
        }
    }

    /// Wrap an error from the HTTP stack without altering its message
    pub fn transport(source: impl Into<BoxError>) -> Self {
        Error::Transport(source.into())
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidUrl(_) | Error::InvalidRequest(_) | Error::ContentType(_) => {
                ErrorKind::Validation
            }
            Error::Unauthorized | Error::Authorization(_) => ErrorKind::Authorization,
            Error::Api(_) | Error::Server(_) | Error::UnexpectedResponse(_) => ErrorKind::Api,
            Error::Decode { .. } | Error::Encode { .. } => ErrorKind::Decode,
            Error::Transport(_) | Error::Io(_) => ErrorKind::Transport,
            Error::Cancelled => ErrorKind::Cancelled,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    /// True for a single 401 response
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized)
    }

    /// True when the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Api(e) => e.is_not_found(),
            Error::Server(msg) => msg == "not found",
            _ => false,
        }
    }

    /// The structured API error, if this is one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::Authorization("exhausted authentication tries".into()).to_string(),
            "authorization: exhausted authentication tries"
        );
        assert_eq!(
            Error::ContentType("NotAContentType".into()).to_string(),
            "invalid content-type: NotAContentType"
        );
        assert_eq!(
            Error::Server("not found".into()).to_string(),
            "server error: not found"
        );
    }

    #[test]
    fn test_error_kinds() {
        let parse = url::Url::parse(":not:a:valid:url").unwrap_err();
        assert_eq!(Error::from(parse).kind(), ErrorKind::Validation);
        assert_eq!(Error::Unauthorized.kind(), ErrorKind::Authorization);
        assert_eq!(
            Error::Api(ApiError::default()).kind(),
            ErrorKind::Api
        );
        assert_eq!(Error::Cancelled.kind(), ErrorKind::Cancelled);
        assert_eq!(
            Error::decode("json", "eof while parsing").kind(),
            ErrorKind::Decode
        );
    }

    #[test]
    fn test_decode_keeps_source() {
        let err = Error::decode("json", "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "response: json: expected value at line 1 column 1"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_not_found() {
        let api = ApiError {
            code: crate::model::NOT_FOUND_CODE,
            ..Default::default()
        };
        assert!(Error::Api(api).is_not_found());
        assert!(Error::Server("not found".into()).is_not_found());
        assert!(!Error::Server("forbidden".into()).is_not_found());
        assert!(!Error::Unauthorized.is_not_found());
    }
}
