//! Auth types: the user role, the persisted credential, and the login
//! payloads. The credential carries the bearer token, so values of these
//! types must never be logged.

use serde::{Deserialize, Serialize};

/// User role as the backend reports it. HO (head office) has broad access
/// including the dashboard; DA (dealer agent) is restricted to leads and chat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "HO", alias = "ROLE_HO")]
    Ho,
    #[serde(rename = "DA", alias = "ROLE_DA")]
    Da,
}

impl Role {
    /// Parses a role string, accepting both the short form and the backend's
    /// `ROLE_` prefixed spelling.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "HO" | "ROLE_HO" => Some(Role::Ho),
            "DA" | "ROLE_DA" => Some(Role::Da),
            _ => None,
        }
    }

    /// Default landing route for the role after login or a silent redirect.
    pub fn home_path(self) -> &'static str {
        match self {
            Role::Ho => "/dashboard",
            Role::Da => "/leads",
        }
    }
}

/// Authenticated identity plus the bearer token. A credential is either fully
/// present or absent; `from_parts` rejects anything partial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub username: String,
    pub role: Role,
}

impl Credential {
    /// Validates raw stored or server-provided fields into a credential.
    /// Empty token, empty username, or an unknown role yields `None`.
    pub fn from_parts(token: &str, username: &str, role: &str) -> Option<Self> {
        let token = token.trim();
        let username = username.trim();
        if token.is_empty() || username.is_empty() {
            return None;
        }

        Some(Self {
            token: token.to_string(),
            username: username.to_string(),
            role: Role::parse(role)?,
        })
    }

    /// Non-sensitive identity slice handed to views.
    pub fn user(&self) -> UserInfo {
        UserInfo {
            username: self.username.clone(),
            role: self.role,
        }
    }
}

/// Identity without the token, safe to render and log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserInfo {
    pub username: String,
    pub role: Role,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Raw login response; the backend returns it unwrapped, not in the
/// `{success, data}` envelope used by `/api/*`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::{Credential, LoginResponse, Role};

    #[test]
    fn role_parses_both_spellings() {
        assert_eq!(Role::parse("HO"), Some(Role::Ho));
        assert_eq!(Role::parse("ROLE_HO"), Some(Role::Ho));
        assert_eq!(Role::parse("DA"), Some(Role::Da));
        assert_eq!(Role::parse("ROLE_DA"), Some(Role::Da));
        assert_eq!(Role::parse("ADMIN"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_home_paths() {
        assert_eq!(Role::Ho.home_path(), "/dashboard");
        assert_eq!(Role::Da.home_path(), "/leads");
    }

    #[test]
    fn credential_rejects_partial_state() {
        assert!(Credential::from_parts("", "ho_admin", "HO").is_none());
        assert!(Credential::from_parts("abc", "", "HO").is_none());
        assert!(Credential::from_parts("abc", "ho_admin", "MANAGER").is_none());
        assert!(Credential::from_parts("   ", "ho_admin", "HO").is_none());
    }

    #[test]
    fn credential_from_valid_parts_trims_fields() {
        let credential =
            Credential::from_parts(" abc ", " ho_admin ", "ROLE_HO").expect("valid credential");

        assert_eq!(credential.token, "abc");
        assert_eq!(credential.username, "ho_admin");
        assert_eq!(credential.role, Role::Ho);
        assert_eq!(credential.user().username, "ho_admin");
    }

    #[test]
    fn login_response_parses_backend_payload() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token":"abc","username":"ho_admin","role":"HO"}"#)
                .expect("response should parse");

        let credential =
            Credential::from_parts(&response.token, &response.username, &response.role)
                .expect("valid credential");
        assert_eq!(credential.role, Role::Ho);
    }
}
