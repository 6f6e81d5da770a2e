use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::{Value, json};

/// Uniform error envelope returned for every failed request.
#[derive(Debug, Clone, serde::Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub status_code: u16,
    pub timestamp: String,
    pub path: String,
    pub error: Value,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, path: impl Into<String>, error: Value) -> Self {
        ErrorEnvelope {
            status_code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            path: path.into(),
            error,
        }
    }
}

/// A recognized HTTP exception: carries its own status and response payload.
///
/// Anything else that reaches the top of the stack collapses to a 500 via
/// `From<anyhow::Error>`, so handlers can use `Result<T, Exception>` with `?`
/// over both branches of the taxonomy.
#[derive(Debug, Clone)]
pub struct Exception {
    status: StatusCode,
    payload: Value,
}

/// Response extension consumed by the normalizing filter.
#[derive(Debug, Clone)]
pub struct CaughtException {
    pub status: StatusCode,
    pub payload: Value,
}

impl Exception {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Exception {
            status,
            payload: Value::String(message.into()),
        }
    }

    /// Exception whose response body is a structured value rather than a
    /// plain message.
    pub fn with_payload(status: StatusCode, payload: Value) -> Self {
        Exception { status, payload }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

impl From<anyhow::Error> for Exception {
    fn from(err: anyhow::Error) -> Self {
        // The caller only ever sees the generic 500; keep the real cause in
        // the logs.
        tracing::error!(error = ?err, "unrecognized error collapsed to 500");

        Exception::internal()
    }
}

impl IntoResponse for Exception {
    fn into_response(self) -> axum::response::Response {
        // Partial envelope only; the normalizing filter rewrites it with the
        // request path once the URI is known.
        let mut response = (
            self.status,
            Json(json!({
                "statusCode": self.status.as_u16(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "error": self.payload,
            })),
        )
            .into_response();

        response.extensions_mut().insert(CaughtException {
            status: self.status,
            payload: self.payload,
        });

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_with_camel_case_keys() {
        let envelope = ErrorEnvelope::new(
            StatusCode::NOT_FOUND,
            "/api/v1/thing",
            Value::String("Resource X not found".into()),
        );

        let value = serde_json::to_value(&envelope).expect("expected envelope to serialize");
        assert_eq!(value["statusCode"], 404);
        assert_eq!(value["path"], "/api/v1/thing");
        assert_eq!(value["error"], "Resource X not found");
        chrono::DateTime::parse_from_rfc3339(value["timestamp"].as_str().unwrap())
            .expect("expected rfc3339 timestamp");
    }

    #[test]
    fn anyhow_errors_collapse_to_generic_500() {
        let exception = Exception::from(anyhow::anyhow!("db connection refused"));

        assert_eq!(exception.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(exception.payload(), &Value::String("Internal Server Error".into()));
    }

    #[test]
    fn into_response_carries_the_caught_extension() {
        let response = Exception::not_found("gone").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let caught = response
            .extensions()
            .get::<CaughtException>()
            .expect("expected caught extension");
        assert_eq!(caught.status, StatusCode::NOT_FOUND);
        assert_eq!(caught.payload, Value::String("gone".into()));
    }

    #[test]
    fn structured_payloads_pass_through_untouched() {
        let payload = json!({"message": "invalid", "fields": ["name"]});
        let exception = Exception::with_payload(StatusCode::BAD_REQUEST, payload.clone());

        assert_eq!(exception.payload(), &payload);
    }
}
