use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::exception::Exception;

/// Cap on buffered response bodies; anything larger fails the request with a
/// caught 500 instead of buffering without bound.
const TRANSFORM_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Wraps successful JSON responses in a `{"data": ...}` envelope.
///
/// Layer this on the API subtree only; error responses pass through for the
/// normalizing filter, and non-JSON bodies are left alone.
pub async fn transform_response(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    if !response.status().is_success() {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));
    if !is_json {
        return response;
    }

    let (mut parts, body) = response.into_parts();

    let bytes = match to_bytes(body, TRANSFORM_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(error = %err, "failed to buffer response body");
            return Exception::internal().into_response();
        }
    };

    if bytes.is_empty() {
        return Response::from_parts(parts, Body::empty());
    }

    let payload: Value = match serde_json::from_slice(&bytes) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::error!(error = %err, "response declared json but did not parse");
            return Exception::internal().into_response();
        }
    };

    let wrapped = serde_json::to_vec(&json!({ "data": payload })).unwrap_or_default();

    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(wrapped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router, middleware};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/json", get(|| async { Json(json!({"message": "ok"})) }))
            .route("/text", get(|| async { "plain" }))
            .route(
                "/teapot",
                get(|| async { (StatusCode::IM_A_TEAPOT, Json(json!({"message": "no"}))) }),
            )
            .layer(middleware::from_fn(transform_response))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        serde_json::from_slice(&bytes).expect("expected json body")
    }

    #[tokio::test]
    async fn successful_json_is_wrapped_in_data() {
        let request = HttpRequest::builder().uri("/json").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"data": {"message": "ok"}}));
    }

    #[tokio::test]
    async fn non_json_bodies_pass_through() {
        let request = HttpRequest::builder().uri("/text").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"plain");
    }

    #[tokio::test]
    async fn error_statuses_are_not_wrapped() {
        let request = HttpRequest::builder().uri("/teapot").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(body_json(response).await, json!({"message": "no"}));
    }
}
