use serde::{Deserialize, Serialize};

/// One message in a lead's chat thread.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub lead_id: u64,
    pub sender: String,
    pub message: String,
    pub timestamp: String,
}

/// Send body. The backend binds an object with a `message` field, not a
/// bare string.
#[derive(Clone, Debug, Serialize)]
pub struct ChatMessageRequest {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::{ChatMessage, ChatMessageRequest};

    #[test]
    fn chat_message_parses_backend_payload() {
        let message: ChatMessage = serde_json::from_str(
            r#"{
                "id": 3,
                "leadId": 7,
                "sender": "ho_admin",
                "message": "Following up on the test ride.",
                "timestamp": "2024-05-02T11:15:00"
            }"#,
        )
        .expect("message should parse");

        assert_eq!(message.lead_id, 7);
        assert_eq!(message.sender, "ho_admin");
    }

    #[test]
    fn send_body_wraps_the_message_in_an_object() {
        let body = ChatMessageRequest {
            message: "hello".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&body).expect("body should serialize"),
            r#"{"message":"hello"}"#
        );
    }
}
