use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use models::booking::{Booking, BookingCreateInput, BookingPatch};

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct BookingsQuery {
    pub email: Option<String>,
}

/// Guest-facing listing, always filtered by guest email. An unfiltered dump
/// of all bookings is never served.
pub async fn list_by_email(
    State(state): State<ServerState>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    // `?email=` with no value counts as missing too
    let email = match query.email.as_deref() {
        Some(email) if !email.is_empty() => email,
        _ => return Err(ApiError::bad_request("Email parameter is required")),
    };
    Ok(Json(state.experiences.bookings_by_email(email).await))
}

/// Admin listing of every booking against one experience.
pub async fn list_for_experience(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Json<Vec<Booking>> {
    Json(state.experiences.bookings_by_experience(id).await)
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<BookingCreateInput>,
) -> Result<Json<Booking>, ApiError> {
    let booking = state.experiences.create_booking(input).await?;
    Ok(Json(booking))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<BookingPatch>,
) -> Result<Json<Booking>, ApiError> {
    let booking = state.experiences.update_booking(id, patch).await?;
    Ok(Json(booking))
}

/// DELETE is a cancellation, not a removal: the record stays with status
/// `cancelled`.
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.experiences.cancel_booking(id).await?;
    Ok(Json(serde_json::json!({ "message": "Booking cancelled successfully" })))
}
