use crate::domain::schema::ValidationErrors;
use crate::error::ApiError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::Json;
use serde_json::Value as JsonValue;

/// Unwraps a JSON body. A missing or malformed body is an input-type error.
pub fn json_payload(body: Result<Json<JsonValue>, JsonRejection>) -> Result<JsonValue, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected request body");
            Err(ApiError::Validation(ValidationErrors::invalid_input()))
        }
    }
}

/// Unwraps an integer path id. Anything that does not parse matches no
/// resource, so it is reported as `not_found`.
pub fn path_id(
    id: Result<Path<i32>, PathRejection>,
    not_found: &'static str,
) -> Result<i32, ApiError> {
    id.map(|Path(id)| id).map_err(|_| ApiError::NotFound(not_found))
}
