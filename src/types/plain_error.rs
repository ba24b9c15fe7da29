//! Plain (non-enriched) error values.
//!
//! [`MessageError`] is what [`new`](crate::new) returns when no option is supplied, and
//! [`PrefixedError`] is the generic "prefix a message onto a cause" wrapper used by
//! [`wrap_error`](crate::wrap_error) when the cause carries no metadata.

use crate::types::alloc_type::{String, ToString};
use crate::types::BoxError;
use core::error::Error;
use core::fmt::Display;

/// Message-only error without cause or metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageError {
    message: String,
}

impl MessageError {
    /// Creates an error displaying `message`.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }

    /// Returns the message text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for MessageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for MessageError {}

/// Error that prefixes `message` onto the display text of its cause.
///
/// Renders as `"<message>: <cause>"` and reports the cause through
/// [`Error::source`], so chain walking continues past it.
///
/// # Examples
///
/// ```
/// use error_meta::{MessageError, PrefixedError};
///
/// let err = PrefixedError::new("loading config", MessageError::new("file missing"));
/// assert_eq!(err.to_string(), "loading config: file missing");
/// ```
#[derive(Debug)]
pub struct PrefixedError {
    message: String,
    cause: BoxError,
}

impl PrefixedError {
    /// Creates a new `PrefixedError` putting `message` in front of `cause`.
    #[inline]
    pub fn new<S, E>(message: S, cause: E) -> Self
    where
        S: Into<String>,
        E: Into<BoxError>,
    {
        Self { message: message.into(), cause: cause.into() }
    }

    /// Returns the prefix message, without the cause text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the wrapped cause.
    #[inline]
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.cause
    }

    /// Consumes the wrapper and returns its cause.
    #[inline]
    pub fn into_cause(self) -> BoxError {
        self.cause
    }
}

impl Display for PrefixedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.message, self.cause)
    }
}

impl Error for PrefixedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let cause: &(dyn Error + 'static) = &*self.cause;
        Some(cause)
    }
}

/// Two prefixed errors are equal when their messages and rendered causes match.
impl PartialEq for PrefixedError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.cause.to_string() == other.cause.to_string()
    }
}
