use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use spr_core::entities::Offer;
use spr_core::responses::DeleteResponse;

use super::AppState;
use crate::error::{ApiError, ApiJson, ApiPath};
use crate::payloads::OfferPayload;

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/offers", get(list).post(create))
        .route("/offers/{id}", put(update).delete(remove))
}

async fn list(State(svc): State<AppState>) -> Result<Json<Vec<Offer>>, ApiError> {
    Ok(Json(svc.list_offers().await?))
}

async fn create(
    State(svc): State<AppState>,
    ApiJson(payload): ApiJson<OfferPayload>,
) -> Result<(StatusCode, Json<Offer>), ApiError> {
    let offer = svc.create_offer(&payload.into_new()?).await?;
    Ok((StatusCode::CREATED, Json(offer)))
}

async fn update(
    State(svc): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<OfferPayload>,
) -> Result<Json<Offer>, ApiError> {
    Ok(Json(svc.update_offer(id, payload.into_update()?).await?))
}

async fn remove(
    State(svc): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    svc.delete_offer(id).await?;
    Ok(Json(DeleteResponse::deleted()))
}
