//! Common types used across the application.

pub mod id;
pub mod member;
pub mod pagination;

pub use id::*;
pub use member::MemberId;
pub use pagination::{PageMeta, PageRequest, PageResponse};
