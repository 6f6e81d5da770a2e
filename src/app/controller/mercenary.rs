use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use mercenary_core::exception::{ErrorEnvelope, Exception};
use mercenary_core::extract::ValidatedJson;
use mercenary_core::response::Data;

/// In-memory roster; scaffold placeholder for a real storage layer.
pub type Roster = Arc<RwLock<HashMap<Uuid, Mercenary>>>;

#[derive(Debug, Clone, serde::Serialize, utoipa::ToSchema)]
pub struct Mercenary {
    pub id: Uuid,
    pub name: String,
    pub callsign: Option<String>,
}

/// Creation payload. Unknown fields are rejected by the validation stage.
#[derive(Debug, serde::Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateMercenary {
    pub name: String,
    pub callsign: Option<String>,
}

#[derive(utoipa::OpenApi)]
#[openapi(
    paths(list, create, show),
    components(schemas(Mercenary, CreateMercenary))
)]
pub struct MercenaryControllerApi;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(show))
        .with_state(Roster::default())
}

#[utoipa::path(
    get,
    path = "/",
    tag = "mercenaries",
    responses((status = 200, body = Data<Vec<Mercenary>>, description = "Full roster"))
)]
pub async fn list(State(roster): State<Roster>) -> Json<Vec<Mercenary>> {
    let roster = roster.read().await;

    Json(roster.values().cloned().collect())
}

#[utoipa::path(
    post,
    path = "/",
    tag = "mercenaries",
    request_body = CreateMercenary,
    responses(
        (status = 201, body = Data<Mercenary>, description = "Created"),
        (status = 400, body = ErrorEnvelope, description = "Validation failed")
    )
)]
pub async fn create(
    State(roster): State<Roster>,
    ValidatedJson(payload): ValidatedJson<CreateMercenary>,
) -> Result<(StatusCode, Json<Mercenary>), Exception> {
    if payload.name.trim().is_empty() {
        return Err(Exception::bad_request("name is required"));
    }

    let mercenary = Mercenary {
        id: Uuid::new_v4(),
        name: payload.name,
        callsign: payload.callsign,
    };

    roster.write().await.insert(mercenary.id, mercenary.clone());

    Ok((StatusCode::CREATED, Json(mercenary)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "mercenaries",
    params(("id" = String, Path, description = "Mercenary id")),
    responses(
        (status = 200, body = Data<Mercenary>, description = "The mercenary"),
        (status = 400, body = ErrorEnvelope, description = "Malformed id"),
        (status = 404, body = ErrorEnvelope, description = "Not found")
    )
)]
pub async fn show(
    State(roster): State<Roster>,
    Path(id): Path<String>,
) -> Result<Json<Mercenary>, Exception> {
    let id: Uuid = id
        .parse()
        .map_err(|_| Exception::bad_request("id must be a UUID"))?;

    let roster = roster.read().await;

    roster
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| Exception::not_found(format!("Mercenary {id} not found")))
}
