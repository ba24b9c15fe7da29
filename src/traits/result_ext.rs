//! Extension trait for wrapping the error side of a `Result`.
//!
//! An `Ok` value passes through untouched, which makes these methods the natural
//! counterpart of "wrapping nothing yields nothing".
//!
//! # Examples
//!
//! ```
//! use error_meta::traits::ResultExt;
//! use error_meta::BoxResult;
//!
//! fn load_config() -> BoxResult<String> {
//!     std::fs::read_to_string("config.toml").wrap_err("loading configuration", [])
//! }
//!
//! assert!(load_config().is_err());
//! ```

use crate::construct::{apply_options, wrap_error, ErrorOption};
use crate::types::alloc_type::String;
use crate::types::{BoxError, BoxResult};

/// Adds wrapping and metadata methods to `Result`.
pub trait ResultExt<T, E> {
    /// Wraps the error as [`wrap_error`] does.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_meta::traits::ResultExt;
    /// use error_meta::{http_code_of, with_http_code};
    ///
    /// let result: Result<(), &str> = Err("no such user");
    /// let err = result.wrap_err("fetching profile", [with_http_code(404)]).unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "fetching profile: no such user");
    /// assert_eq!(http_code_of(&*err), 404);
    /// ```
    fn wrap_err<S, I>(self, message: S, options: I) -> BoxResult<T>
    where
        S: Into<String>,
        I: IntoIterator<Item = ErrorOption>;

    /// Like [`wrap_err`](ResultExt::wrap_err), but the message is only built on `Err`.
    fn wrap_err_with<F, S, I>(self, f: F, options: I) -> BoxResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
        I: IntoIterator<Item = ErrorOption>;

    /// Attaches `options` to the error without adding a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_meta::traits::ResultExt;
    /// use error_meta::{custom_code_of, with_custom_code};
    ///
    /// let result: Result<(), &str> = Err("quota exceeded");
    /// let err = result.with_options([with_custom_code(4029)]).unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "quota exceeded");
    /// assert_eq!(custom_code_of(&*err), 4029);
    /// ```
    fn with_options<I>(self, options: I) -> BoxResult<T>
    where
        I: IntoIterator<Item = ErrorOption>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn wrap_err<S, I>(self, message: S, options: I) -> BoxResult<T>
    where
        S: Into<String>,
        I: IntoIterator<Item = ErrorOption>,
    {
        self.map_err(|error| wrap_error(error, message, options))
    }

    #[inline]
    fn wrap_err_with<F, S, I>(self, f: F, options: I) -> BoxResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
        I: IntoIterator<Item = ErrorOption>,
    {
        self.map_err(|error| wrap_error(error, f(), options))
    }

    #[inline]
    fn with_options<I>(self, options: I) -> BoxResult<T>
    where
        I: IntoIterator<Item = ErrorOption>,
    {
        self.map_err(|error| apply_options(error.into(), options))
    }
}
