//! User repository.

use dashmap::mapref::entry::Entry;
use splitbook_shared::types::UserId;

use super::RepositoryError;
use crate::entities::UserRecord;
use crate::store::Store;

/// User repository for account storage.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: Store,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Finds a user by email, ignoring case.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        let id = *self.store.emails.get(&normalize_email(email))?;
        self.find_by_id(id)
    }

    /// Finds a user by ID.
    #[must_use]
    pub fn find_by_id(&self, id: UserId) -> Option<UserRecord> {
        self.store.users.get(&id).map(|user| user.clone())
    }

    /// Checks if an email is already registered.
    #[must_use]
    pub fn email_exists(&self, email: &str) -> bool {
        self.store.emails.contains_key(&normalize_email(email))
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if the email is taken.
    pub fn create(
        &self,
        email: &str,
        password_hash: &str,
        full_name: &str,
    ) -> Result<UserRecord, RepositoryError> {
        let user = UserRecord {
            id: UserId::new(),
            email: email.trim().to_string(),
            password_hash: password_hash.to_string(),
            full_name: full_name.trim().to_string(),
            created_at: chrono::Utc::now(),
        };

        // The email index entry is held while the user row is written.
        match self.store.emails.entry(normalize_email(email)) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicate(format!("email {email}"))),
            Entry::Vacant(slot) => {
                self.store.users.insert(user.id, user.clone());
                slot.insert(user.id);
                tracing::debug!(user_id = %user.id, "user created");
                Ok(user)
            }
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
