use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Api(String),
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// True when the backend rejected the bearer token. Callers treat this as
    /// "session invalid" and force a sign-out.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AppError::Http { status: 401 | 403, .. })
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Api(message) => write!(formatter, "{message}"),
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn auth_error_matches_rejected_tokens_only() {
        let unauthorized = AppError::Http {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        let forbidden = AppError::Http {
            status: 403,
            message: "Forbidden".to_string(),
        };
        let server_error = AppError::Http {
            status: 500,
            message: "boom".to_string(),
        };

        assert!(unauthorized.is_auth_error());
        assert!(forbidden.is_auth_error());
        assert!(!server_error.is_auth_error());
        assert!(!AppError::Network("offline".to_string()).is_auth_error());
        assert!(!AppError::Api("bad credentials".to_string()).is_auth_error());
    }

    #[test]
    fn api_error_displays_backend_message_verbatim() {
        let err = AppError::Api("Invalid username or password".to_string());
        assert_eq!(err.to_string(), "Invalid username or password");
    }
}
