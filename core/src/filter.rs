use std::any::Any;

use axum::{
    Json,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::exception::{CaughtException, ErrorEnvelope, Exception};

/// Rewrites every caught exception into the uniform error envelope.
///
/// Install outermost so the original request URI is still visible; anything
/// without a [`CaughtException`] extension passes through untouched.
pub async fn normalize_exceptions(request: Request, next: Next) -> Response {
    let path = request.uri().to_string();

    let response = next.run(request).await;

    let Some(caught) = response.extensions().get::<CaughtException>().cloned() else {
        return response;
    };

    tracing::error!(
        status = caught.status.as_u16(),
        message = %caught.payload,
        "request failed"
    );

    let envelope = ErrorEnvelope::new(caught.status, path, caught.payload);

    (caught.status, Json(envelope)).into_response()
}

/// Panic handler for `tower_http::catch_panic::CatchPanicLayer`.
///
/// Turns a handler panic into a caught 500 so the caller still receives the
/// envelope instead of a bare framework response.
pub fn panic_to_exception(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("panic");

    tracing::error!(%detail, "handler panicked");

    Exception::internal().into_response()
}
