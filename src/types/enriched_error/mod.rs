//! Error value enriched with an HTTP status code, an application code and a request
//! context.
//!
//! [`EnrichedError`] keeps its cause instead of flattening it into text, so the full chain
//! stays reachable through [`Error::source`](core::error::Error::source) and the helpers in
//! [`crate::inspect`].
//!
//! # Examples
//!
//! ```
//! use error_meta::{EnrichedError, RequestContext};
//!
//! let err = EnrichedError::new("resource not found")
//!     .with_http_code(404)
//!     .with_custom_code(1001)
//!     .with_context(RequestContext::background().with_value("request_id", "42"));
//!
//! assert_eq!(err.http_code(), 404);
//! assert_eq!(err.custom_code(), 1001);
//! assert!(err.cause().is_none());
//! assert_eq!(err.to_string(), "resource not found");
//! ```

use crate::construct::ErrorOption;
use crate::inspect::{self, Chain};
use crate::types::alloc_type::{String, ToString};
use crate::types::{BoxError, RequestContext};
use core::error::Error;

mod traits;

/// How an [`EnrichedError`] relates to the error it was built from.
#[derive(Debug)]
pub(crate) enum Origin {
    /// Start of a chain.
    Root,
    /// Rendered as `"<cause>: <message>"`.
    Wrapped(BoxError),
    /// `message` already is the cause's text; rendered as `message` alone.
    Adopted(BoxError),
}

/// Error carrying a local message, optional cause and classification metadata.
///
/// Both codes use `0` as the "unset" value. The context defaults to
/// [`RequestContext::BACKGROUND`].
#[must_use]
#[derive(Debug)]
pub struct EnrichedError {
    pub(crate) origin: Origin,
    pub(crate) message: String,
    pub(crate) http_code: u16,
    pub(crate) custom_code: u32,
    pub(crate) context: RequestContext,
}

impl EnrichedError {
    /// Creates a root error with no cause and no metadata.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self::with_origin(Origin::Root, message.into())
    }

    /// Creates an error that records `cause` as its predecessor.
    ///
    /// The result displays as `"<cause>: <message>"`.
    #[inline]
    pub fn wrap<E, S>(cause: E, message: S) -> Self
    where
        E: Into<BoxError>,
        S: Into<String>,
    {
        Self::with_origin(Origin::Wrapped(cause.into()), message.into())
    }

    /// Coerces an arbitrary error into an enriched one.
    ///
    /// The message becomes the error's display text and the error itself stays reachable
    /// as the cause. Metadata found on the nearest enriched error further down the chain
    /// is carried forward.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_meta::{EnrichedError, PrefixedError};
    ///
    /// let inner = EnrichedError::new("db down").with_http_code(503);
    /// let adopted = EnrichedError::adopt(PrefixedError::new("loading user", inner));
    ///
    /// assert_eq!(adopted.to_string(), "loading user: db down");
    /// assert_eq!(adopted.http_code(), 503);
    /// ```
    pub fn adopt<E: Into<BoxError>>(error: E) -> Self {
        let error = error.into();
        let (http_code, custom_code, context) = inspect::find_enriched(&*error)
            .map(|found| (found.http_code, found.custom_code, found.context.clone()))
            .unwrap_or_default();
        let message = error.to_string();

        Self { origin: Origin::Adopted(error), message, http_code, custom_code, context }
    }

    #[inline]
    fn with_origin(origin: Origin, message: String) -> Self {
        Self {
            origin,
            message,
            http_code: 0,
            custom_code: 0,
            context: RequestContext::BACKGROUND,
        }
    }

    /// Sets (or overrides) the HTTP status code.
    #[inline]
    pub fn with_http_code(mut self, code: u16) -> Self {
        self.http_code = code;
        self
    }

    /// Sets (or overrides) the application error code.
    #[inline]
    pub fn with_custom_code(mut self, code: u32) -> Self {
        self.custom_code = code;
        self
    }

    /// Replaces the request context.
    #[inline]
    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = context;
        self
    }

    /// Applies a single [`ErrorOption`], leaving every other field untouched.
    #[inline]
    pub fn apply(mut self, option: ErrorOption) -> Self {
        self.set(option);
        self
    }

    pub(crate) fn set(&mut self, option: ErrorOption) {
        match option {
            ErrorOption::HttpCode(code) => self.http_code = code,
            ErrorOption::CustomCode(code) => self.custom_code = code,
            ErrorOption::Context(context) => self.context = context,
        }
    }

    /// Returns the message local to this link of the chain.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the immediate predecessor, or `None` at the root of a chain.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match &self.origin {
            Origin::Root => None,
            Origin::Wrapped(cause) | Origin::Adopted(cause) => Some(&**cause),
        }
    }

    /// Consumes the error, returning its predecessor.
    #[inline]
    pub fn into_cause(self) -> Option<BoxError> {
        match self.origin {
            Origin::Root => None,
            Origin::Wrapped(cause) | Origin::Adopted(cause) => Some(cause),
        }
    }

    /// Returns the HTTP status code, `0` when unset.
    #[inline]
    pub fn http_code(&self) -> u16 {
        self.http_code
    }

    /// Returns the application error code, `0` when unset.
    #[inline]
    pub fn custom_code(&self) -> u32 {
        self.custom_code
    }

    /// Returns the HTTP status code, or `None` when unset.
    #[inline]
    pub fn http_status(&self) -> Option<u16> {
        (self.http_code != 0).then_some(self.http_code)
    }

    /// Returns the application error code, or `None` when unset.
    #[inline]
    pub fn custom_status(&self) -> Option<u32> {
        (self.custom_code != 0).then_some(self.custom_code)
    }

    /// Returns the associated request context.
    #[inline]
    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Iterates over this error followed by every transitive cause.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        inspect::chain(self)
    }
}
