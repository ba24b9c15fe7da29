//! Typed metadata options applied by the constructors.

use crate::types::alloc_type::Box;
use crate::types::{BoxError, EnrichedError, RequestContext};

/// One piece of metadata to attach to an error.
///
/// Options are applied left to right by [`new`](crate::new), [`wrap`](crate::wrap) and
/// [`apply_options`], so the last option setting a given field wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorOption {
    /// HTTP status code; `0` means unset.
    HttpCode(u16),
    /// Application-defined error code; `0` means unset.
    CustomCode(u32),
    /// Request context handle.
    Context(RequestContext),
}

impl ErrorOption {
    /// Attaches this option to `error`.
    ///
    /// An [`EnrichedError`] is updated in place with only the target field changed. Any
    /// other error is first coerced with [`EnrichedError::adopt`], which keeps it as the
    /// cause and carries forward metadata from enriched errors further down its chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_meta::inspect::find_enriched;
    /// use error_meta::{with_http_code, BoxError};
    ///
    /// let plain: BoxError = "connection reset".into();
    /// let enriched = with_http_code(502).apply(plain);
    ///
    /// let found = find_enriched(&*enriched).unwrap();
    /// assert_eq!(found.http_code(), 502);
    /// assert_eq!(found.message(), "connection reset");
    /// ```
    pub fn apply(self, error: BoxError) -> BoxError {
        match unbox_enriched(error).downcast::<EnrichedError>() {
            Ok(mut enriched) => {
                enriched.set(self);
                enriched
            },
            Err(plain) => Box::new(EnrichedError::adopt(plain).apply(self)),
        }
    }
}

/// Strips the extra box from an erased `Box<EnrichedError>` so it downcasts directly.
pub(crate) fn unbox_enriched(error: BoxError) -> BoxError {
    match error.downcast::<Box<EnrichedError>>() {
        Ok(boxed) => *boxed,
        Err(error) => error,
    }
}

/// Sets the HTTP status code.
#[inline]
pub fn with_http_code(code: u16) -> ErrorOption {
    ErrorOption::HttpCode(code)
}

/// Sets the application-defined error code.
#[inline]
pub fn with_custom_code(code: u32) -> ErrorOption {
    ErrorOption::CustomCode(code)
}

/// Sets the request context handle.
#[inline]
pub fn with_context(context: RequestContext) -> ErrorOption {
    ErrorOption::Context(context)
}

/// Applies every option to `error` in order.
#[inline]
pub fn apply_options<I>(error: BoxError, options: I) -> BoxError
where
    I: IntoIterator<Item = ErrorOption>,
{
    options.into_iter().fold(error, |error, option| option.apply(error))
}
