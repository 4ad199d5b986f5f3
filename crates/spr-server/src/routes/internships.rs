use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use spr_core::records::InternshipRecord;
use spr_core::responses::DeleteResponse;

use super::AppState;
use crate::error::{ApiError, ApiJson, ApiPath};
use crate::payloads::InternshipPayload;

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/internships", get(list).post(create))
        .route("/internships/{id}", put(update).delete(remove))
}

async fn list(State(svc): State<AppState>) -> Result<Json<Vec<InternshipRecord>>, ApiError> {
    Ok(Json(svc.list_internships().await?))
}

async fn create(
    State(svc): State<AppState>,
    ApiJson(payload): ApiJson<InternshipPayload>,
) -> Result<(StatusCode, Json<InternshipRecord>), ApiError> {
    let record = svc.create_internship(&payload.into_new()?).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update(
    State(svc): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<InternshipPayload>,
) -> Result<Json<InternshipRecord>, ApiError> {
    Ok(Json(svc.update_internship(id, payload.into_update()?).await?))
}

async fn remove(
    State(svc): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    svc.delete_internship(id).await?;
    Ok(Json(DeleteResponse::deleted()))
}
