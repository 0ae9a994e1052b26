//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{
    AddReactionRequest, CreateConversationRequest, CreateMessageRequest, RemoveReactionRequest,
    RequestBody,
};
pub use response::{MessageWithReactions, SuccessResponse};
