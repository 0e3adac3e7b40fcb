//! Client helpers for the per-lead chat endpoints.

use crate::{
    app_lib::{ApiResponse, AppError, get_json, post_json},
    features::chat::types::{ChatMessage, ChatMessageRequest},
};

/// Fetches the chat history for a lead, oldest first.
pub async fn chat_history(lead_id: u64) -> Result<Vec<ChatMessage>, AppError> {
    let response: ApiResponse<Vec<ChatMessage>> =
        get_json(&format!("/api/chat/{lead_id}")).await?;
    response.into_result()
}

/// Sends one message to a lead's thread. The body is a `{ message }` object;
/// the server rejects a bare string.
pub async fn send_message(lead_id: u64, message: &str) -> Result<ChatMessage, AppError> {
    let body = ChatMessageRequest {
        message: message.to_string(),
    };
    let response: ApiResponse<ChatMessage> =
        post_json(&format!("/api/chat/{lead_id}"), &body).await?;
    response.into_result()
}
