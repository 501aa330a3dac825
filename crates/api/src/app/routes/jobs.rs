use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use jobboard_core::{ExternalId, JobDraft, JobPatch};
use jobboard_infra::JobService;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_job).get(list_jobs))
        .route(
            "/:external_id",
            get(get_job).put(replace_job).patch(patch_job),
        )
}

pub async fn create_job(
    Extension(service): Extension<Arc<JobService>>,
    Json(draft): Json<JobDraft>,
) -> axum::response::Response {
    match service.create(draft).await {
        Ok(record) => {
            let location = format!("/jobs/{}", record.external_id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(record),
            )
                .into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn replace_job(
    Extension(service): Extension<Arc<JobService>>,
    Path(external_id): Path<String>,
    Json(draft): Json<JobDraft>,
) -> axum::response::Response {
    let path_id = ExternalId::new(external_id);
    match service.replace(&path_id, draft).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn patch_job(
    Extension(service): Extension<Arc<JobService>>,
    Path(external_id): Path<String>,
    Json(patch): Json<JobPatch>,
) -> axum::response::Response {
    let path_id = ExternalId::new(external_id);
    match service.partial_update(&path_id, patch).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_job(
    Extension(service): Extension<Arc<JobService>>,
    Path(external_id): Path<String>,
) -> axum::response::Response {
    let path_id = ExternalId::new(external_id);
    match service.fetch(&path_id).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_jobs(
    Extension(service): Extension<Arc<JobService>>,
) -> axum::response::Response {
    match service.list().await {
        Ok(records) => {
            let summaries: Vec<dto::JobSummary> =
                records.iter().map(dto::JobSummary::from).collect();
            (StatusCode::OK, Json(summaries)).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}
