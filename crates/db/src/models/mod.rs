//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts (`Deserialize` where it is a request body)
//! - Read-only projections embedded in project responses

pub mod object;
pub mod object_status;
pub mod project;
pub mod user;
