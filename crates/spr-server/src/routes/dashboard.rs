use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use spr_core::responses::DashboardSummary;

use super::AppState;
use crate::error::ApiError;

pub(super) fn router() -> Router<AppState> {
    Router::new().route("/dashboard/summary", get(summary))
}

async fn summary(State(svc): State<AppState>) -> Result<Json<DashboardSummary>, ApiError> {
    Ok(Json(svc.dashboard_summary().await?))
}
