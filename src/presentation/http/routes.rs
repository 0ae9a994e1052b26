//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .with_state(state)
}

/// Messaging API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/conversations",
            post(handlers::conversation::create_conversation),
        )
        // `{id}` is a user id here and a conversation id below
        .route(
            "/conversations/{id}",
            get(handlers::conversation::get_user_conversations),
        )
        .route(
            "/conversations/{id}/messages",
            get(handlers::message::get_messages),
        )
        .route("/messages", post(handlers::message::send_message))
        .route(
            "/messages/{message_id}/reactions",
            post(handlers::reaction::add_reaction).delete(handlers::reaction::remove_reaction),
        )
}
