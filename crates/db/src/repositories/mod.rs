//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod object_repo;
pub mod object_status_repo;
pub mod project_repo;
pub mod user_repo;

pub use object_repo::ObjectRepo;
pub use object_status_repo::ObjectStatusRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
