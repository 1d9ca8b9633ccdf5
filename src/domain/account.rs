//! Account domain entity.
//!
//! Accounts exist solely for authentication and are distinct from
//! Employee records. They are immutable after creation: no update or
//! delete path exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    /// Unique across all accounts
    pub username: String,
    /// Unique across all accounts
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    /// Set at creation and never advanced; accounts are immutable
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with both timestamps stamped now
    pub fn new(id: Uuid, username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
