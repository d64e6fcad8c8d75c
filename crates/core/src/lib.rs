//! Shared types, errors and wire-format rules for the to-do service.
//!
//! Nothing in this crate touches the database or the network.

pub mod error;
pub mod types;
pub mod wire;
