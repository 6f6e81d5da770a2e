#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct SimpleResponse {
    pub message: String,
}
