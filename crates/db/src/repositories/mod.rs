//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod submission_repo;

pub use submission_repo::SubmissionRepo;
