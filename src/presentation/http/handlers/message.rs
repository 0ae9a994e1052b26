//! Message Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use futures::future::try_join_all;

use crate::application::dto::{CreateMessageRequest, MessageWithReactions};
use crate::domain::{Message, NewMessage, StorageError};
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Get the transcript of a conversation, each message with its reactions
pub async fn get_messages(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<Vec<MessageWithReactions>>, AppError> {
    let storage = &state.storage;

    let messages = storage
        .get_messages(&conversation_id)
        .await
        .map_err(|e| AppError::from_storage(e, "Failed to fetch messages"))?;

    // Reaction lookups are independent of each other
    let with_reactions = try_join_all(messages.into_iter().map(|message| async move {
        let reactions = storage.get_message_reactions(&message.id).await?;
        Ok::<_, StorageError>(MessageWithReactions::new(message, reactions))
    }))
    .await
    .map_err(|e| AppError::from_storage(e, "Failed to fetch messages"))?;

    Ok(Json(with_reactions))
}

/// Send a message to a conversation
pub async fn send_message(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateMessageRequest>,
) -> Result<Json<Message>, AppError> {
    let message = state
        .storage
        .create_message(NewMessage::from(body))
        .await
        .map_err(|e| {
            if e.is_integrity_violation() {
                AppError::from_storage(e, "Invalid message data")
            } else {
                AppError::from_storage(e, "Failed to create message")
            }
        })?;

    Ok(Json(message))
}
