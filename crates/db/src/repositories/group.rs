//! Group repository.

use splitbook_shared::types::{GroupId, MemberId, UserId};

use super::RepositoryError;
use crate::entities::Group;
use crate::store::Store;

/// Group repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct GroupRepository {
    store: Store,
}

impl GroupRepository {
    /// Creates a new group repository.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Creates a group owned by `owner_id`.
    ///
    /// The owner's member ID comes first. Blank and repeated members are
    /// dropped, keeping the first occurrence.
    pub fn create(&self, name: &str, owner_id: UserId, members: Vec<MemberId>) -> Group {
        let mut unique: Vec<MemberId> = Vec::with_capacity(members.len() + 1);
        for member in std::iter::once(MemberId::new(owner_id.to_string())).chain(members) {
            if !member.is_blank() && !unique.contains(&member) {
                unique.push(member);
            }
        }

        let group = Group {
            id: GroupId::new(),
            name: name.trim().to_string(),
            owner_id,
            members: unique,
            created_at: chrono::Utc::now(),
        };

        self.store.groups.insert(group.id, group.clone());
        tracing::debug!(group_id = %group.id, members = group.members.len(), "group created");
        group
    }

    /// Finds a group by ID.
    #[must_use]
    pub fn find_by_id(&self, id: GroupId) -> Option<Group> {
        self.store.groups.get(&id).map(|group| group.clone())
    }

    /// Groups that list `member`, oldest first.
    #[must_use]
    pub fn list_for_member(&self, member: &str) -> Vec<Group> {
        let mut groups: Vec<Group> = self
            .store
            .groups
            .iter()
            .filter(|group| group.has_member(member))
            .map(|group| group.clone())
            .collect();
        groups.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.0.cmp(&b.id.0)));
        groups
    }

    /// Appends a member to a group.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown group and `Duplicate` if the member
    /// is already listed.
    pub fn add_member(&self, id: GroupId, member: MemberId) -> Result<Group, RepositoryError> {
        let mut group = self
            .store
            .groups
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(format!("group {id}")))?;

        if group.has_member(member.as_str()) {
            return Err(RepositoryError::Duplicate(format!("member {member}")));
        }

        group.members.push(member);
        tracing::debug!(group_id = %id, members = group.members.len(), "member added");
        Ok(group.clone())
    }
}
