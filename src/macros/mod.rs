//! Shorthand macros for the constructors.
//!
//! - [`macro@crate::new_err`] - [`new`](crate::new) with a `format!`-style message and
//!   options listed after a `;`.
//! - [`macro@crate::wrap_err`] - [`wrap_error`](crate::wrap_error) with the same syntax.
//! - [`macro@crate::request_context`] - builds a [`RequestContext`](crate::RequestContext)
//!   from `key => value` pairs.
//!
//! # Examples
//!
//! ```
//! use error_meta::{http_code_of, new_err, request_context, with_context, with_http_code};
//!
//! let user_id = 42;
//! let err = new_err!(
//!     "user {} not found", user_id;
//!     with_http_code(404),
//!     with_context(request_context!("user_id" => user_id.to_string()))
//! );
//!
//! assert_eq!(err.to_string(), "user 42 not found");
//! assert_eq!(http_code_of(&*err), 404);
//! ```

/// Creates an error with a formatted message and optional metadata.
///
/// # Syntax
///
/// - `new_err!("text")` - plain [`MessageError`](crate::MessageError)
/// - `new_err!("fmt {}", arg)` - formatted message
/// - `new_err!("fmt {}", arg; option, option)` - enriched with the given options
///
/// # Examples
///
/// ```
/// use error_meta::{custom_code_of, new_err, with_custom_code};
///
/// let plain = new_err!("disk {} missing", "sdb");
/// assert_eq!(plain.to_string(), "disk sdb missing");
///
/// let coded = new_err!("rate limited"; with_custom_code(4290));
/// assert_eq!(custom_code_of(&*coded), 4290);
/// ```
#[macro_export]
macro_rules! new_err {
    ($fmt:literal $(, $arg:expr)* $(,)? $(; $($option:expr),+ $(,)?)?) => {
        $crate::new(format!($fmt $(, $arg)*), [$($($option),+)?])
    };
}

/// Wraps a cause with a formatted message and optional metadata.
///
/// # Examples
///
/// ```
/// use error_meta::{http_code_of, with_http_code, wrap_err};
///
/// let io = std::io::Error::other("connection refused");
/// let err = wrap_err!(io, "calling {}", "billing"; with_http_code(502));
///
/// assert_eq!(err.to_string(), "calling billing: connection refused");
/// assert_eq!(http_code_of(&*err), 502);
/// ```
#[macro_export]
macro_rules! wrap_err {
    ($cause:expr, $fmt:literal $(, $arg:expr)* $(,)? $(; $($option:expr),+ $(,)?)?) => {
        $crate::wrap_error($cause, format!($fmt $(, $arg)*), [$($($option),+)?])
    };
}

/// Builds a [`RequestContext`](crate::RequestContext) from `key => value` pairs.
///
/// With no pairs this is [`RequestContext::BACKGROUND`](crate::RequestContext::BACKGROUND).
///
/// # Examples
///
/// ```
/// use error_meta::request_context;
///
/// let ctx = request_context!("request_id" => "r-1", "tenant" => "acme");
/// assert_eq!(ctx.value("tenant"), Some("acme"));
/// assert!(request_context!().is_background());
/// ```
#[macro_export]
macro_rules! request_context {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::RequestContext::BACKGROUND$(.with_value($key, $value))*
    };
}
