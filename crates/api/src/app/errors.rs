use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use jobboard_infra::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Validation { fields } => validation_error(fields),
        ServiceError::IdentifierMismatch { expected, found } => json_error(
            StatusCode::BAD_REQUEST,
            "identifier_mismatch",
            format!("external id is immutable: expected '{expected}', got '{found}'"),
        ),
        ServiceError::Conflict(id) => json_error(
            StatusCode::CONFLICT,
            "conflict",
            format!("a job with external id '{id}' already exists"),
        ),
        ServiceError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        ServiceError::Store(e) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            e.to_string(),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

fn validation_error(fields: Vec<String>) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({
            "error": "validation_error",
            "message": format!("validation failed for fields: {}", fields.join(", ")),
            "fields": fields,
        })),
    )
        .into_response()
}
