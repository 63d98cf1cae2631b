use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use models::team_member::{TeamMember, TeamMemberCreateInput, TeamMemberPatch};

use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn list(State(state): State<ServerState>) -> Json<Vec<TeamMember>> {
    Json(state.team_members.list().await)
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<TeamMemberCreateInput>,
) -> Result<Json<TeamMember>, ApiError> {
    let member = state.team_members.create(input).await?;
    Ok(Json(member))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamMember>, ApiError> {
    let member = state.team_members.get(id).await?;
    Ok(Json(member))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<TeamMemberPatch>,
) -> Result<Json<TeamMember>, ApiError> {
    let member = state.team_members.update(id, patch).await?;
    Ok(Json(member))
}

pub async fn delete_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.team_members.delete(id).await?;
    Ok(Json(serde_json::json!({ "message": "Team member deleted successfully" })))
}
