//! Tests for tracing integration.

use error_meta::inspect::find_enriched;
use error_meta::tracing_ext::{attach_span, ResultSpanExt};
use error_meta::{new, with_context, with_http_code, MessageError, RequestContext};
use tracing::Span;

#[test]
fn from_span_none_is_background() {
    assert!(RequestContext::from_span(&Span::none()).is_background());
}

#[test]
fn current_span_without_subscriber_is_background() {
    assert!(RequestContext::current_span().is_background());
}

#[test]
fn with_span_none_keeps_existing_entries() {
    let ctx = RequestContext::background().with_value("request_id", "r-1");

    assert_eq!(ctx.with_span(&Span::none()), ctx);
}

#[test]
fn result_span_ext_ok_passes_through() {
    let result: Result<i32, &str> = Ok(42);

    assert_eq!(result.with_current_span().unwrap(), 42);
}

#[test]
fn result_span_ext_enriches_plain_error() {
    let result: Result<(), MessageError> = Err(MessageError::new("failed"));
    let err = result.with_current_span().unwrap_err();

    let enriched = find_enriched(&*err).unwrap();
    assert_eq!(enriched.message(), "failed");
    assert!(enriched.context().is_background());
}

#[test]
fn attach_span_preserves_existing_metadata() {
    let ctx = RequestContext::background().with_value("request_id", "r-2");
    let err = new("denied", [with_http_code(403), with_context(ctx.clone())]);

    let err = attach_span(err, &Span::none());

    let enriched = find_enriched(&*err).unwrap();
    assert_eq!(enriched.http_code(), 403);
    assert_eq!(enriched.context(), &ctx);
}

#[test]
fn disabled_macro_span_is_background() {
    let span = tracing::info_span!("handler");

    assert!(span.is_disabled());
    assert!(RequestContext::from_span(&span).is_background());
}
