//! In-memory storage layer with repositories.
//!
//! This crate provides:
//! - Stored entity definitions
//! - A shared, concurrent [`Store`]
//! - Repository abstractions for data access

pub mod entities;
pub mod repositories;
pub mod store;

pub use entities::{Group, UserRecord};
pub use repositories::{ExpenseRepository, GroupRepository, RepositoryError, UserRepository};
pub use store::Store;
