//! Client errors and the remote error registry.
//!
//! Mathesar reports failures inside the JSON-RPC envelope as
//! `{"code": <int>, "message": <str>}`. Known codes map onto a closed set of
//! [`RemoteErrorKind`]s; anything else is [`RemoteErrorKind::Unknown`].

use std::fmt;

use reqwest::StatusCode;

/// Remote error categories the server is known to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteErrorKind {
    DoesNotExist,
    IntegrityError,
    DuplicateObject,
    SyntaxError,
    UndefinedObject,
    Unauthorized,
    Unknown,
}

/// `(code, kind)` pairs of the registry.
const REGISTRY: &[(i64, RemoteErrorKind)] = &[
    (-28009, RemoteErrorKind::DoesNotExist),
    (-29042, RemoteErrorKind::IntegrityError),
    (-30047, RemoteErrorKind::DuplicateObject),
    (-30237, RemoteErrorKind::SyntaxError),
    (-30257, RemoteErrorKind::UndefinedObject),
    (-32603, RemoteErrorKind::Unauthorized),
];

impl RemoteErrorKind {
    pub fn from_code(code: i64) -> Self {
        REGISTRY
            .iter()
            .find(|(known, _)| *known == code)
            .map_or(Self::Unknown, |(_, kind)| *kind)
    }

    /// Registry code, `None` for [`RemoteErrorKind::Unknown`].
    pub fn code(self) -> Option<i64> {
        REGISTRY
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(code, _)| *code)
    }
}

impl fmt::Display for RemoteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An error reported by the server in the response envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} ({code}): {message}")]
pub struct RemoteError {
    pub kind: RemoteErrorKind,
    pub code: i64,
    /// Server message, verbatim
    pub message: String,
}

impl RemoteError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            kind: RemoteErrorKind::from_code(code),
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),

    /// Non-success status without a JSON-RPC envelope.
    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("login page has no csrfmiddlewaretoken input")]
    MissingCsrfToken,

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A lookup found the name but with a different id.
    #[error("{what} of `{name}` is {actual}, not {expected}")]
    Mismatch {
        what: &'static str,
        name: String,
        expected: i64,
        actual: i64,
    },

    #[error("missing selector: pass {0}")]
    MissingSelector(&'static str),

    #[error("unknown method `{0}`")]
    UnknownMethod(String),

    #[error("invalid argument `{name}`: {message}")]
    InvalidArgument { name: String, message: String },
}

impl ClientError {
    /// Remote kind, if the server reported this error.
    pub fn remote_kind(&self) -> Option<RemoteErrorKind> {
        match self {
            Self::Remote(err) => Some(err.kind),
            _ => None,
        }
    }

    pub fn is_remote(&self, kind: RemoteErrorKind) -> bool {
        self.remote_kind() == Some(kind)
    }

    /// Locally raised counterpart of a remote error, for lookups that come up empty.
    pub(crate) fn not_found(kind: RemoteErrorKind, message: impl Into<String>) -> Self {
        Self::Remote(RemoteError {
            kind,
            code: kind.code().unwrap_or_default(),
            message: message.into(),
        })
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_codes() {
        assert_eq!(RemoteErrorKind::from_code(-28009), RemoteErrorKind::DoesNotExist);
        assert_eq!(RemoteErrorKind::from_code(-29042), RemoteErrorKind::IntegrityError);
        assert_eq!(RemoteErrorKind::from_code(-30047), RemoteErrorKind::DuplicateObject);
        assert_eq!(RemoteErrorKind::from_code(-30237), RemoteErrorKind::SyntaxError);
        assert_eq!(RemoteErrorKind::from_code(-30257), RemoteErrorKind::UndefinedObject);
        assert_eq!(RemoteErrorKind::from_code(-32603), RemoteErrorKind::Unauthorized);
        assert_eq!(RemoteErrorKind::from_code(-1), RemoteErrorKind::Unknown);
        assert_eq!(RemoteErrorKind::Unknown.code(), None);
        assert_eq!(RemoteErrorKind::DuplicateObject.code(), Some(-30047));
    }

    #[test]
    fn test_message_is_kept_verbatim() {
        let err = RemoteError::new(-28009, "  not found\n");
        assert_eq!(err.message, "  not found\n");
        assert_eq!(err.kind, RemoteErrorKind::DoesNotExist);
        assert!(ClientError::from(err).is_remote(RemoteErrorKind::DoesNotExist));
    }
}
