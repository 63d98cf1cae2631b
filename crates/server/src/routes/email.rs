use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Generic outbound relay used by the contact form.
pub async fn send(
    State(state): State<ServerState>,
    Json(req): Json<EmailRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.mailer.send(&req.to, &req.subject, &req.html).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
