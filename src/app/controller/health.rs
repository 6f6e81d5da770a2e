use axum::{Json, Router, routing::get};

use mercenary_core::response::Data;

use crate::app::response::SimpleResponse;

#[derive(utoipa::OpenApi)]
#[openapi(paths(index))]
pub struct HealthControllerApi;

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, body = Data<SimpleResponse>, description = "Service is up"))
)]
pub async fn index() -> Json<SimpleResponse> {
    Json(SimpleResponse { message: "ok".into() })
}
