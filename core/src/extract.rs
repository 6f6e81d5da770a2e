use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::exception::Exception;

/// JSON extractor whose rejections surface as 400 exceptions, so validation
/// failures flow through the normalizing filter like any other error.
///
/// Pair with `#[serde(deny_unknown_fields)]` on the DTO to reject payload
/// fields the schema does not declare; declared fields are coerced into the
/// declared shape by deserialization.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Exception;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| Exception::bad_request(rejection.body_text()))?;

        Ok(ValidatedJson(value))
    }
}
