//! Settlement planning.
//!
//! Turns a balance map into point-to-point transfers that settle the group.

pub mod planner;

#[cfg(test)]
mod planner_props;

pub use planner::{Settlement, apply_settlements, compute_settlements};
