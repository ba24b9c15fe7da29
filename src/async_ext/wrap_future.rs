//! Future wrapper that transforms the error of a `Result`-returning future.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::{BoxError, BoxResult};

pin_project! {
    /// A Future that boxes its error and passes it through a wrapping closure.
    ///
    /// The closure only runs when the inner future resolves to an error.
    ///
    /// # Cancel Safety
    ///
    /// `WrapFuture` is cancel-safe if the inner future is cancel-safe.
    #[must_use = "futures do nothing unless polled"]
    pub struct WrapFuture<Fut, F> {
        #[pin]
        future: Fut,
        wrap_fn: Option<F>,
    }
}

impl<Fut, F> WrapFuture<Fut, F> {
    /// Creates a new `WrapFuture` that passes the error of `future` through `wrap_fn`.
    #[inline]
    pub fn new(future: Fut, wrap_fn: F) -> Self {
        Self { future, wrap_fn: Some(wrap_fn) }
    }
}

impl<Fut, F, T, E> Future for WrapFuture<Fut, F>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
    F: FnOnce(BoxError) -> BoxError,
{
    type Output = BoxResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            res.map_err(|err| {
                let err = err.into();
                match this.wrap_fn.take() {
                    Some(wrap_fn) => wrap_fn(err),
                    None => err,
                }
            })
        })
    }
}

impl<Fut, F, T, E> FusedFuture for WrapFuture<Fut, F>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    E: Into<BoxError>,
    F: FnOnce(BoxError) -> BoxError,
{
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}
