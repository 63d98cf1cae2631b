use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use models::partner::{Partner, PartnerCreateInput, PartnerPatch};

use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn list(State(state): State<ServerState>) -> Json<Vec<Partner>> {
    Json(state.partners.list().await)
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<PartnerCreateInput>,
) -> Result<Json<Partner>, ApiError> {
    let partner = state.partners.create(input).await?;
    Ok(Json(partner))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Partner>, ApiError> {
    let partner = state.partners.get(id).await?;
    Ok(Json(partner))
}

/// Partners take whole-document PUT from the admin UI; the patch type still
/// leaves unmentioned optional fields in place.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<PartnerPatch>,
) -> Result<Json<Partner>, ApiError> {
    let partner = state.partners.update(id, patch).await?;
    Ok(Json(partner))
}

pub async fn delete_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.partners.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
