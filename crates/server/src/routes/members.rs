use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use models::member::{Member, MemberCreateInput, MemberPatch};

use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn list(State(state): State<ServerState>) -> Json<Vec<Member>> {
    Json(state.members.list().await)
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<MemberCreateInput>,
) -> Result<Json<Member>, ApiError> {
    let member = state.members.create(input).await?;
    Ok(Json(member))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Member>, ApiError> {
    let member = state.members.get(id).await?;
    Ok(Json(member))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<MemberPatch>,
) -> Result<Json<Member>, ApiError> {
    let member = state.members.update(id, patch).await?;
    Ok(Json(member))
}

pub async fn delete_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.members.delete(id).await?;
    Ok(Json(serde_json::json!({ "message": "Member deleted successfully" })))
}
