use serde::{Deserialize, Serialize};

use crate::domain::account::{Account, AccountId};
use crate::enums::{Department, Role};

/// Reduced identity projection kept for the lifetime of a session.
/// The password never leaves the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: Department,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<&Account> for SessionUser {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.full_name.clone(),
            email: account.email.clone(),
            role: account.role,
            department: account.department,
        }
    }
}

/// Encode the durable session payload
pub fn encode_session(user: &SessionUser) -> String {
    // Serialization of a plain struct cannot fail
    serde_json::to_string(user).unwrap_or_default()
}

/// Decode the durable session payload. Absent, truncated or otherwise
/// malformed input means "anonymous", never an error.
pub fn decode_session(raw: &str) -> Option<SessionUser> {
    serde_json::from_str(raw).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Single generic failure; never distinguishes unknown email from
    /// wrong password to avoid account enumeration.
    InvalidCredentials,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials => f.write_str("Invalid email or password"),
        }
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::directory;
    use crate::domain::account::AccountLookup;

    fn sample() -> SessionUser {
        directory()
            .authenticate("admin@motionmatrix.com", "admin123")
            .expect("seeded admin")
    }

    #[test]
    fn test_projection_never_carries_password() {
        let raw = encode_session(&sample());
        assert!(!raw.contains("password"));
        assert!(!raw.contains("admin123"));
    }

    #[test]
    fn test_session_round_trip() {
        let user = sample();
        let decoded = decode_session(&encode_session(&user)).expect("round trip");
        assert_eq!(decoded, user);
    }

    #[test]
    fn test_malformed_payload_is_anonymous() {
        assert!(decode_session("").is_none());
        assert!(decode_session("not json").is_none());
        assert!(decode_session("{\"id\":1}").is_none());
        assert!(decode_session(
            "{\"id\":1,\"name\":\"x\",\"email\":\"x\",\"role\":\"Chief\",\"department\":\"Cutting\"}"
        )
        .is_none());
    }
}
