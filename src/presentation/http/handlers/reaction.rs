//! Reaction Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::{AddReactionRequest, RemoveReactionRequest, SuccessResponse};
use crate::domain::MessageReaction;
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Add a reaction to a message
pub async fn add_reaction(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    ValidatedJson(body): ValidatedJson<AddReactionRequest>,
) -> Result<Json<MessageReaction>, AppError> {
    let reaction = state
        .storage
        .add_reaction(body.into_new_reaction(message_id))
        .await
        .map_err(|e| AppError::from_storage(e, "Failed to add reaction"))?;

    Ok(Json(reaction))
}

/// Remove a reaction from a message
///
/// Succeeds whether or not a matching reaction existed.
pub async fn remove_reaction(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    ValidatedJson(body): ValidatedJson<RemoveReactionRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .storage
        .remove_reaction(&message_id, &body.user_id, &body.emoji)
        .await
        .map_err(|e| AppError::from_storage(e, "Failed to remove reaction"))?;

    Ok(Json(SuccessResponse::ok()))
}
