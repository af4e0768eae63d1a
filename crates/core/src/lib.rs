//! Domain primitives shared by the database and API crates.
//!
//! - [`types`] -- id and timestamp aliases.
//! - [`error`] -- the domain error enum.
//! - [`listing`] -- pagination, sort direction and boolean filter parsing.
//! - [`project`] -- sortable project columns.

pub mod error;
pub mod listing;
pub mod project;
pub mod types;
