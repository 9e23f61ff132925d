use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{AccountStatus, Department, Role};

/// Unique staff account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub u32);

impl AccountId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Staff account record.
///
/// The set is seeded once at startup and never mutated; the password is
/// stored in clear because the directory is a fixture standing in for a
/// real identity service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub full_name: String,
    /// Unique, compared case-sensitively as stored
    pub email: String,
    pub password: String,
    pub role: Role,
    pub department: Department,
    pub status: AccountStatus,
    pub joined: NaiveDate,
}
