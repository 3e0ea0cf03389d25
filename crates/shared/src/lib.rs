//! Shared types, errors, and configuration for Splitbook.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs and member identifiers
//! - Pagination types for list endpoints
//! - Application-wide error types
//! - JWT claims and token service
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::{Claims, TokenKind, TokenPair};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use jwt::{JwtConfig, JwtError, JwtService};
