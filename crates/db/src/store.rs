//! Shared in-memory store.

use std::sync::Arc;

use dashmap::DashMap;
use splitbook_core::Expense;
use splitbook_shared::types::{GroupId, UserId};

use crate::entities::{Group, UserRecord};

/// Concurrent maps backing every repository.
///
/// Cloning is cheap; all clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) users: Arc<DashMap<UserId, UserRecord>>,
    /// Lowercased email to user, the uniqueness index.
    pub(crate) emails: Arc<DashMap<String, UserId>>,
    pub(crate) groups: Arc<DashMap<GroupId, Group>>,
    /// Expenses per group in insertion order.
    pub(crate) expenses: Arc<DashMap<GroupId, Vec<Expense>>>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
