//! Tracing integration for error-meta.
//!
//! Captures the identity of a `tracing` span into a [`RequestContext`] so an error can
//! later be correlated with the span it was raised in. Nothing here emits events.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-meta = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::construct::with_context;
use crate::inspect;
use crate::types::alloc_type::ToString;
use crate::types::{BoxError, BoxResult, RequestContext};

/// Context key holding the span name.
pub const SPAN_NAME_KEY: &str = "span";
/// Context key holding the span id.
pub const SPAN_ID_KEY: &str = "span_id";

impl RequestContext {
    /// Builds a context describing `span`.
    ///
    /// A disabled span yields [`RequestContext::BACKGROUND`], even when the `log`
    /// compatibility layer gave it metadata.
    pub fn from_span(span: &Span) -> Self {
        Self::BACKGROUND.with_span(span)
    }

    /// Builds a context describing [`Span::current`].
    pub fn current_span() -> Self {
        Self::from_span(&Span::current())
    }

    /// Derives a child context that additionally records `span`.
    ///
    /// Returns `self` unchanged for a disabled span.
    #[must_use]
    pub fn with_span(&self, span: &Span) -> Self {
        if span.is_disabled() {
            return self.clone();
        }
        let Some(metadata) = span.metadata() else {
            return self.clone();
        };
        let context = self.with_value(SPAN_NAME_KEY, metadata.name());
        match span.id() {
            Some(id) => context.with_value(SPAN_ID_KEY, id.into_u64().to_string()),
            None => context,
        }
    }
}

/// Extension trait for `Result` types to record span context on errors.
pub trait ResultSpanExt<T> {
    /// Records the current span on the error.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_meta::tracing_ext::ResultSpanExt;
    ///
    /// fn process() -> BoxResult<Data> {
    ///     do_work().with_current_span()
    /// }
    /// ```
    fn with_current_span(self) -> BoxResult<T>;

    /// Records a specific span on the error.
    fn with_span(self, span: &Span) -> BoxResult<T>;
}

impl<T, E> ResultSpanExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn with_current_span(self) -> BoxResult<T> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> BoxResult<T> {
        self.map_err(|error| attach_span(error.into(), span))
    }
}

/// Extends the context of the outermost enriched error with `span`, coercing the error
/// if it is not enriched yet.
pub fn attach_span(error: BoxError, span: &Span) -> BoxError {
    let context = inspect::find_enriched(&*error)
        .map(|enriched| enriched.context().with_span(span))
        .unwrap_or_else(|| RequestContext::from_span(span));
    with_context(context).apply(error)
}
