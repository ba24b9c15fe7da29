//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Mirrors [`ResultExt`](crate::traits::ResultExt) for async code.

use core::future::Future;

use crate::construct::{apply_options, wrap_error, ErrorOption};
use crate::types::alloc_type::String;
use crate::types::BoxError;

use super::wrap_future::WrapFuture;

/// Extension trait for wrapping the error of async Result-returning futures.
///
/// # Examples
///
/// ```rust
/// use error_meta::prelude_async::*;
///
/// async fn example() {
///     let err = async { Err::<(), _>("upstream timeout") }
///         .wrap_err("calling search", [with_http_code(504)])
///         .await
///         .unwrap_err();
///
///     assert_eq!(http_code_of(&*err), 504);
/// }
/// ```
pub trait FutureResultExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Wraps the future's error with `message` and `options`.
    fn wrap_err<S, I>(self, message: S, options: I) -> WrapFuture<Self, impl FnOnce(BoxError) -> BoxError>
    where
        S: Into<String>,
        I: IntoIterator<Item = ErrorOption>,
    {
        self.map_boxed_err(move |error| wrap_error(error, message, options))
    }

    /// Wraps the future's error, building the message only on failure.
    fn wrap_err_with<F, S, I>(
        self,
        f: F,
        options: I,
    ) -> WrapFuture<Self, impl FnOnce(BoxError) -> BoxError>
    where
        F: FnOnce() -> S,
        S: Into<String>,
        I: IntoIterator<Item = ErrorOption>,
    {
        self.map_boxed_err(move |error| wrap_error(error, f(), options))
    }

    /// Attaches `options` to the future's error without adding a message.
    fn with_options<I>(self, options: I) -> WrapFuture<Self, impl FnOnce(BoxError) -> BoxError>
    where
        I: IntoIterator<Item = ErrorOption>,
    {
        self.map_boxed_err(move |error| apply_options(error, options))
    }

    /// Passes the boxed error through `f` when the future fails.
    fn map_boxed_err<F>(self, f: F) -> WrapFuture<Self, F>
    where
        F: FnOnce(BoxError) -> BoxError;
}

impl<Fut, T, E> FutureResultExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn map_boxed_err<F>(self, f: F) -> WrapFuture<Self, F>
    where
        F: FnOnce(BoxError) -> BoxError,
    {
        WrapFuture::new(self, f)
    }
}
