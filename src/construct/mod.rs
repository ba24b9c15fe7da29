//! Constructors that create or wrap errors and attach metadata.
//!
//! - [`new`] builds an error from a message. Without options it returns a lightweight
//!   [`MessageError`]; with options it returns an [`EnrichedError`].
//! - [`wrap`] and [`wrap_error`] record a cause. An already-enriched cause stays enriched;
//!   a plain cause gets a [`PrefixedError`] that options then coerce.
//! - [`with_http_code`], [`with_custom_code`] and [`with_context`] produce the
//!   [`ErrorOption`] values both accept.
//!
//! # Examples
//!
//! ```
//! use error_meta::inspect::find_enriched;
//! use error_meta::{new, with_custom_code, with_http_code};
//!
//! let err = new("resource not found", [with_http_code(404), with_custom_code(1001)]);
//!
//! let enriched = find_enriched(&*err).unwrap();
//! assert_eq!(enriched.http_code(), 404);
//! assert_eq!(enriched.custom_code(), 1001);
//! assert!(enriched.cause().is_none());
//! ```

mod options;

pub use options::{apply_options, with_context, with_custom_code, with_http_code, ErrorOption};

use options::unbox_enriched;

use crate::inspect;
use crate::types::alloc_type::{Box, String};
use crate::types::{BoxError, EnrichedError, MessageError, PrefixedError};

/// Creates an error from `message`, attaching `options` in order.
///
/// With an empty option list the result is a [`MessageError`], which does not extract as
/// an [`EnrichedError`].
///
/// # Examples
///
/// ```
/// use error_meta::inspect::find_enriched;
/// use error_meta::new;
///
/// let err = new("boom", []);
/// assert_eq!(err.to_string(), "boom");
/// assert!(find_enriched(&*err).is_none());
/// ```
pub fn new<S, I>(message: S, options: I) -> BoxError
where
    S: Into<String>,
    I: IntoIterator<Item = ErrorOption>,
{
    let mut options = options.into_iter().peekable();
    if options.peek().is_none() {
        return Box::new(MessageError::new(message));
    }

    let mut error = EnrichedError::new(message);
    for option in options {
        error.set(option);
    }
    Box::new(error)
}

/// Wraps an optional cause; wrapping `None` yields `None` whatever the options.
///
/// # Examples
///
/// ```
/// use error_meta::{wrap, with_http_code, MessageError};
///
/// assert!(wrap(None::<MessageError>, "ignored", [with_http_code(500)]).is_none());
///
/// let err = wrap(Some(MessageError::new("x")), "y", []).unwrap();
/// assert_eq!(err.to_string(), "y: x");
/// ```
#[inline]
pub fn wrap<E, S, I>(cause: Option<E>, message: S, options: I) -> Option<BoxError>
where
    E: Into<BoxError>,
    S: Into<String>,
    I: IntoIterator<Item = ErrorOption>,
{
    cause.map(|cause| wrap_error(cause, message, options))
}

/// Records `cause` behind `message`, attaching `options` in order.
///
/// If the cause's chain contains an [`EnrichedError`], the result is an
/// [`EnrichedError`] whose cause is the whole original error, rendered as
/// `"<cause>: <message>"`. Otherwise the result is a [`PrefixedError`] rendered as
/// `"<message>: <cause>"`, and each option coerces it as described on
/// [`ErrorOption::apply`].
///
/// # Examples
///
/// ```
/// use error_meta::inspect::find_enriched;
/// use error_meta::{with_http_code, wrap_error, BoxError};
///
/// let original: BoxError = "original error".into();
/// let err = wrap_error(original, "file not found", [with_http_code(404)]);
///
/// assert_eq!(err.to_string(), "file not found: original error");
/// assert_eq!(find_enriched(&*err).unwrap().http_code(), 404);
/// ```
pub fn wrap_error<E, S, I>(cause: E, message: S, options: I) -> BoxError
where
    E: Into<BoxError>,
    S: Into<String>,
    I: IntoIterator<Item = ErrorOption>,
{
    let cause = unbox_enriched(cause.into());
    let wrapped: BoxError = if inspect::find_enriched(&*cause).is_some() {
        Box::new(EnrichedError::wrap(cause, message))
    } else {
        Box::new(PrefixedError::new(message, cause))
    };
    apply_options(wrapped, options)
}
