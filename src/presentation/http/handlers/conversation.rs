//! Conversation Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::CreateConversationRequest;
use crate::domain::Conversation;
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List the conversations a user participates in
pub async fn get_user_conversations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Conversation>>, AppError> {
    let conversations = state
        .storage
        .get_conversations_by_user(&user_id)
        .await
        .map_err(|e| AppError::from_storage(e, "Failed to fetch conversations"))?;

    Ok(Json(conversations))
}

/// Create a conversation
pub async fn create_conversation(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateConversationRequest>,
) -> Result<Json<Conversation>, AppError> {
    let conversation = state
        .storage
        .create_conversation(body.participant_ids)
        .await
        .map_err(|e| AppError::from_storage(e, "Failed to create conversation"))?;

    tracing::info!(conversation_id = %conversation.id, "Conversation created");

    Ok(Json(conversation))
}
