use axum::{Router, extract::Request, http::StatusCode, middleware, routing::get};
use tower_http::catch_panic::CatchPanicLayer;

use mercenary_core::exception::Exception;

use crate::app::controller::{health, mercenary};
use crate::app::middleware::{normalize_exceptions, panic_to_exception, transform_response};
use crate::docs;

pub fn routes() -> Router {
    let api = Router::new()
        .nest("/health", health::router())
        .nest("/mercenaries", mercenary::router())
        .layer(middleware::from_fn(transform_response));

    let app = Router::new()
        .nest("/api/v1", api)
        .route("/api/docs", get(docs::serve));

    with_global_stages(app)
}

/// Global stages shared by every route: panics become caught 500s, and every
/// caught exception leaves as the uniform envelope. The normalizer sits
/// outermost so it sees the original request URI.
fn with_global_stages(router: Router) -> Router {
    router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(panic_to_exception))
        .layer(middleware::from_fn(normalize_exceptions))
}

// Unmatched routes surface as a caught 404 so the envelope still applies.
async fn not_found(request: Request) -> Exception {
    Exception::not_found(format!("Cannot {} {}", request.method(), request.uri()))
}

// Same for a known path hit with the wrong method; axum's default 405 has an
// empty body and would escape the envelope.
async fn method_not_allowed(request: Request) -> Exception {
    Exception::new(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("Cannot {} {}", request.method(), request.uri()),
    )
}
