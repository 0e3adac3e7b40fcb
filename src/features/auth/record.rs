//! Persisted credential record shapes. Kept free of browser types so the
//! save/load round trip runs under native unit tests; `storage` owns the
//! actual localStorage reads and writes.

use crate::features::auth::types::{Credential, Role};
use serde::{Deserialize, Serialize};

/// Identity half of the persisted credential. The token lives under its own
/// key, so either half missing invalidates the whole record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub username: String,
    pub role: Role,
}

impl StoredUser {
    pub fn of(credential: &Credential) -> Self {
        Self {
            username: credential.username.clone(),
            role: credential.role,
        }
    }
}

/// Rebuilds a credential from its persisted halves, revalidating on the way
/// in. Stored data may predate the running code, so nothing is trusted.
pub fn rebuild(token: &str, user: &StoredUser) -> Option<Credential> {
    Credential::from_parts(token, &user.username, role_name(user.role))
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::Ho => "HO",
        Role::Da => "DA",
    }
}

#[cfg(test)]
mod tests {
    use super::{StoredUser, rebuild};
    use crate::features::auth::types::{Credential, Role};

    #[test]
    fn credential_survives_the_persisted_round_trip() {
        let credential =
            Credential::from_parts("abc", "ho_admin", "HO").expect("valid credential");
        let user = StoredUser::of(&credential);

        // Both halves travel through JSON, same as the browser store.
        let token_json = serde_json::to_string(&credential.token).expect("token should encode");
        let user_json = serde_json::to_string(&user).expect("user should encode");
        let token: String = serde_json::from_str(&token_json).expect("token should decode");
        let restored: StoredUser = serde_json::from_str(&user_json).expect("user should decode");

        assert_eq!(rebuild(&token, &restored), Some(credential));
    }

    #[test]
    fn stored_role_uses_the_short_wire_spelling() {
        let user = StoredUser {
            username: "da_agent".to_string(),
            role: Role::Da,
        };

        assert_eq!(
            serde_json::to_string(&user).expect("user should encode"),
            r#"{"username":"da_agent","role":"DA"}"#
        );
    }

    #[test]
    fn partial_records_do_not_rebuild() {
        let blank_username = StoredUser {
            username: "  ".to_string(),
            role: Role::Ho,
        };
        assert_eq!(rebuild("abc", &blank_username), None);

        let valid = StoredUser {
            username: "ho_admin".to_string(),
            role: Role::Ho,
        };
        assert_eq!(rebuild("   ", &valid), None);
    }
}
