//! Crate error type.
//!
//! A single opaque [`Error`] with a broad [`Kind`], mirroring the error
//! taxonomy of the relay surface: validation before any network call,
//! signing failures from the injected signer, transport failures, and
//! non-2xx responses (which retain the status code and raw body).

use std::borrow::Cow;
use std::fmt;

/// Broad error category.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Invalid input detected before any request was issued.
    Validation,
    /// The injected signer failed or rejected the payload.
    Signing,
    /// Connection, TLS, timeout, or decode failure in the transport.
    Transport,
    /// The server answered with a non-2xx status.
    Status,
    /// Endpoint or path could not be parsed into a URL.
    Url,
}

/// SDK error.
#[derive(Debug)]
pub struct Error {
    kind: Kind,
    message: Option<Cow<'static, str>>,
    status: Option<u16>,
    body: Option<String>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    pub(crate) fn new<M: Into<Cow<'static, str>>>(kind: Kind, message: M) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            status: None,
            body: None,
            source: None,
        }
    }

    /// Input rejected locally, before any network call.
    pub(crate) fn validation<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self::new(Kind::Validation, message)
    }

    /// Signer failure or rejection. Public so that custom
    /// [`crate::signing`] implementations can report their own failures.
    #[must_use]
    pub fn signing<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self::new(Kind::Signing, message)
    }

    /// Non-2xx response; keeps whatever body the server sent.
    pub(crate) fn status(status: u16, body: String) -> Self {
        Self {
            kind: Kind::Status,
            message: None,
            status: Some(status),
            body: Some(body),
            source: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// HTTP status code, for [`Kind::Status`] errors.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        self.status
    }

    /// Raw response body, for [`Kind::Status`] errors.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Status => {
                write!(
                    f,
                    "server returned status {}",
                    self.status.unwrap_or_default()
                )?;
                if let Some(body) = self.body.as_deref().filter(|b| !b.is_empty()) {
                    write!(f, ": {body}")?;
                }
                Ok(())
            }
            _ => match (&self.message, &self.source) {
                (Some(message), _) => write!(f, "{message}"),
                (None, Some(source)) => write!(f, "{source}"),
                (None, None) => write!(f, "{:?} error", self.kind),
            },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self {
            kind: Kind::Transport,
            message: None,
            status: err.status().map(|s| s.as_u16()),
            body: None,
            source: Some(Box::new(err)),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self {
            kind: Kind::Url,
            message: None,
            status: None,
            body: None,
            source: Some(Box::new(err)),
        }
    }
}

impl From<alloy::signers::Error> for Error {
    fn from(err: alloy::signers::Error) -> Self {
        Self {
            kind: Kind::Signing,
            message: None,
            status: None,
            body: None,
            source: Some(Box::new(err)),
        }
    }
}
