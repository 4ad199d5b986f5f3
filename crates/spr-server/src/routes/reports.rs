//! Reports have no list endpoint; they are read through their internship.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{post, put};
use axum::{Json, Router};
use spr_core::entities::Report;
use spr_core::responses::DeleteResponse;

use super::AppState;
use crate::error::{ApiError, ApiJson, ApiPath};
use crate::payloads::ReportPayload;

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/reports", post(create))
        .route("/reports/{id}", put(update).delete(remove))
}

async fn create(
    State(svc): State<AppState>,
    ApiJson(payload): ApiJson<ReportPayload>,
) -> Result<(StatusCode, Json<Report>), ApiError> {
    let report = svc.create_report(&payload.into_new()?).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

async fn update(
    State(svc): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<ReportPayload>,
) -> Result<Json<Report>, ApiError> {
    Ok(Json(svc.update_report(id, payload.into_update()?).await?))
}

async fn remove(
    State(svc): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    svc.delete_report(id).await?;
    Ok(Json(DeleteResponse::deleted()))
}
