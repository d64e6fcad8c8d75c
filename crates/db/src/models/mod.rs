//! Row structs, wire records and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` row struct matching the database columns
//! - A `Serialize` wire record with the client-facing shape, built from the
//!   row by a pure `From` conversion
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for partial updates

pub mod category;
pub mod task;
