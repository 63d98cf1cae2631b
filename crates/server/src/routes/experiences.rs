use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use models::experience::{Experience, ExperienceCreateInput, ExperiencePatch};

use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn list(State(state): State<ServerState>) -> Json<Vec<Experience>> {
    Json(state.experiences.list().await)
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ExperienceCreateInput>,
) -> Result<Json<Experience>, ApiError> {
    let experience = state.experiences.create(input).await?;
    Ok(Json(experience))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Experience>, ApiError> {
    let experience = state.experiences.get(id).await?;
    Ok(Json(experience))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ExperiencePatch>,
) -> Result<Json<Experience>, ApiError> {
    let experience = state.experiences.update(id, patch).await?;
    Ok(Json(experience))
}

pub async fn delete_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.experiences.delete(id).await?;
    Ok(Json(serde_json::json!({ "message": "Experience deleted successfully" })))
}
