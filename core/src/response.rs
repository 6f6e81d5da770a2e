/// Success body as it leaves the transform stage; used in route docs so the
/// documented shape matches what the wire actually carries.
#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct Data<T> {
    pub data: T,
}
