//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface over the [`Store`](crate::Store),
//! hiding the map layout from the rest of the application.

pub mod expense;
pub mod group;
pub mod user;

pub use expense::ExpenseRepository;
pub use group::GroupRepository;
pub use user::UserRepository;

use thiserror::Error;

/// Errors returned by repositories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A unique value is already taken.
    #[error("{0} already exists")]
    Duplicate(String),

    /// The target row does not exist.
    #[error("{0} not found")]
    NotFound(String),
}
