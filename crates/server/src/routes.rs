use axum::{
    routing::{get, patch, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::ServerState;

pub mod bookings;
pub mod email;
pub mod experiences;
pub mod members;
pub mod partners;
pub mod team_members;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: static public pages, health, and the
/// JSON API for the five entities plus the email relay.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    // Anything the API does not claim falls through to the static pages
    let static_dir = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    Router::new()
        .route("/health", get(health))
        .route("/experiences", get(experiences::list).post(experiences::create))
        .route(
            "/experiences/:id",
            get(experiences::get_one)
                .patch(experiences::update)
                .delete(experiences::delete_one),
        )
        .route("/experiences/:id/bookings", get(bookings::list_for_experience))
        .route("/bookings", get(bookings::list_by_email).post(bookings::create))
        .route("/bookings/:id", patch(bookings::update).delete(bookings::cancel))
        .route("/members", get(members::list).post(members::create))
        .route(
            "/members/:id",
            get(members::get_one).patch(members::update).delete(members::delete_one),
        )
        .route("/partners", get(partners::list).post(partners::create))
        .route(
            "/partners/:id",
            get(partners::get_one).put(partners::update).delete(partners::delete_one),
        )
        .route("/team-members", get(team_members::list).post(team_members::create))
        .route(
            "/team-members/:id",
            get(team_members::get_one)
                .patch(team_members::update)
                .delete(team_members::delete_one),
        )
        .route("/email", post(email::send))
        .with_state(state)
        .fallback_service(static_dir)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
