use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use spr_core::records::StudentRecord;
use spr_core::responses::DeleteResponse;

use super::AppState;
use crate::error::{ApiError, ApiJson, ApiPath};
use crate::payloads::StudentPayload;

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/students", get(list).post(create))
        .route("/students/{id}", get(show).put(update).delete(remove))
}

async fn list(State(svc): State<AppState>) -> Result<Json<Vec<StudentRecord>>, ApiError> {
    Ok(Json(svc.list_students().await?))
}

async fn create(
    State(svc): State<AppState>,
    ApiJson(payload): ApiJson<StudentPayload>,
) -> Result<(StatusCode, Json<StudentRecord>), ApiError> {
    let record = svc.create_student(&payload.into_new()?).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn show(
    State(svc): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<StudentRecord>, ApiError> {
    Ok(Json(svc.get_student(id).await?))
}

async fn update(
    State(svc): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<StudentPayload>,
) -> Result<Json<StudentRecord>, ApiError> {
    Ok(Json(svc.update_student(id, payload.into_update()?).await?))
}

async fn remove(
    State(svc): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    svc.delete_student(id).await?;
    Ok(Json(DeleteResponse::deleted()))
}
