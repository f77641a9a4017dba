//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod application_repo;
pub mod student_repo;
pub mod submission_repo;

pub use application_repo::ApplicationRepo;
pub use student_repo::StudentRepo;
pub use submission_repo::SubmissionRepo;
