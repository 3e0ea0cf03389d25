//! Stored entities.

use chrono::{DateTime, Utc};
use serde::Serialize;
use splitbook_shared::types::{GroupId, MemberId, UserId};

/// A registered user.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// User ID.
    pub id: UserId,
    /// Email as registered.
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    /// Display name.
    pub full_name: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// The member identifier this user appears under in groups.
    #[must_use]
    pub fn member_id(&self) -> MemberId {
        MemberId::new(self.id.to_string())
    }
}

/// An expense-sharing group.
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    /// Group ID.
    pub id: GroupId,
    /// Group name.
    pub name: String,
    /// User who created the group.
    pub owner_id: UserId,
    /// Participants in the order they joined. No duplicates.
    pub members: Vec<MemberId>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Returns true if `member` belongs to the group.
    #[must_use]
    pub fn has_member(&self, member: &str) -> bool {
        self.members.iter().any(|m| m.as_str() == member)
    }
}
