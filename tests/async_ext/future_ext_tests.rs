//! Tests for FutureResultExt trait.

use error_meta::prelude_async::*;
use error_meta::MessageError;
use std::sync::atomic::{AtomicU32, Ordering};

#[test]
fn wrap_future_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<WrapFuture<std::future::Ready<Result<(), MessageError>>, fn(BoxError) -> BoxError>>();
    assert_sync::<WrapFuture<std::future::Ready<Result<(), MessageError>>, fn(BoxError) -> BoxError>>();
}

#[tokio::test]
async fn wrap_err_passes_ok_through() {
    let result = async { Ok::<_, &str>(42) }
        .wrap_err("unused", [with_http_code(500)])
        .await;

    assert_eq!(result.unwrap(), 42);
}

#[tokio::test]
async fn wrap_err_wraps_error() {
    let err = async { Err::<i32, _>("upstream timeout") }
        .wrap_err("calling search", [with_http_code(504)])
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "calling search: upstream timeout");
    assert_eq!(http_code_of(&*err), 504);
}

#[tokio::test]
async fn wrap_err_with_does_not_evaluate_on_success() {
    let call_count = AtomicU32::new(0);

    let result = async { Ok::<_, &str>(1) }
        .wrap_err_with(
            || {
                call_count.fetch_add(1, Ordering::SeqCst);
                "should not be called"
            },
            [],
        )
        .await;

    assert!(result.is_ok());
    assert_eq!(call_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn wrap_err_with_evaluates_once_on_error() {
    let call_count = AtomicU32::new(0);

    let result = async { Err::<i32, _>("failed") }
        .wrap_err_with(
            || {
                call_count.fetch_add(1, Ordering::SeqCst);
                "operation failed"
            },
            [with_custom_code(3)],
        )
        .await;

    let err = result.unwrap_err();
    assert_eq!(call_count.load(Ordering::SeqCst), 1);
    assert_eq!(custom_code_of(&*err), 3);
}

#[tokio::test]
async fn with_options_updates_enriched_error_in_place() {
    let err = async { Err::<(), _>(new("row missing", [with_http_code(404)])) }
        .with_options([with_custom_code(12)])
        .await
        .unwrap_err();

    let enriched = find_enriched(&*err).unwrap();
    assert_eq!(enriched.http_code(), 404);
    assert_eq!(enriched.custom_code(), 12);
    assert!(enriched.cause().is_none());
}

#[tokio::test]
async fn map_boxed_err_receives_boxed_error() {
    let err = async { Err::<(), _>(MessageError::new("raw")) }
        .map_boxed_err(|error| wrap_error(error, "mapped", []))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "mapped: raw");
}
