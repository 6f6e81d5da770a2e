use axum::Json;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use mercenary_core::exception::ErrorEnvelope;

use crate::app::controller::health::HealthControllerApi;
use crate::app::controller::mercenary::MercenaryControllerApi;
use crate::app::response::SimpleResponse;

#[derive(OpenApi)]
#[openapi(
    nest(
        (path = "/api/v1/health", api = HealthControllerApi),
        (path = "/api/v1/mercenaries", api = MercenaryControllerApi)
    ),
    components(schemas(SimpleResponse, ErrorEnvelope)),
    modifiers(&BearerAuthAddon),
    info(
        title = "Mercenary API",
        version = "1.0",
        description = "Professional starter for rapid API development"
    )
)]
pub struct MainApiDoc;

/// Declares the bearer scheme in the document only; enforcement belongs to an
/// external authenticator.
struct BearerAuthAddon;

impl Modify for BearerAuthAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Serves the generated document as JSON.
pub async fn serve() -> Json<utoipa::openapi::OpenApi> {
    Json(MainApiDoc::openapi())
}
