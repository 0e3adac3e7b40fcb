//! Response envelope used by every `/api/*` endpoint. The backend wraps
//! payloads as `{success, message, data}`; a `success: false` body can arrive
//! with an HTTP 200, so callers must branch on the envelope, not the status.

use super::errors::AppError;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the envelope into the payload or a typed error carrying the
    /// backend message when one was provided.
    pub fn into_result(self) -> Result<T, AppError> {
        if !self.success {
            let message = self
                .message
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| "Request failed.".to_string());
            return Err(AppError::Api(message));
        }

        self.data
            .ok_or_else(|| AppError::Parse("Response was missing data.".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::ApiResponse;
    use crate::app_lib::AppError;

    #[test]
    fn success_envelope_yields_payload() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"message":"ok","data":[1,2,3]}"#)
                .expect("envelope should parse");

        assert_eq!(envelope.into_result().expect("payload"), vec![1, 2, 3]);
    }

    #[test]
    fn failure_envelope_carries_backend_message() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":false,"message":"Lead not found","data":null}"#)
                .expect("envelope should parse");

        assert_eq!(
            envelope.into_result(),
            Err(AppError::Api("Lead not found".to_string()))
        );
    }

    #[test]
    fn failure_without_message_falls_back_to_generic_text() {
        let envelope: ApiResponse<String> =
            serde_json::from_str(r#"{"success":false}"#).expect("envelope should parse");

        assert_eq!(
            envelope.into_result(),
            Err(AppError::Api("Request failed.".to_string()))
        );
    }

    #[test]
    fn success_without_data_is_a_parse_error() {
        let envelope: ApiResponse<String> =
            serde_json::from_str(r#"{"success":true,"message":"ok"}"#)
                .expect("envelope should parse");

        assert!(matches!(envelope.into_result(), Err(AppError::Parse(_))));
    }
}
