//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept a pool or connection as the first argument.

pub mod comment_repo;

pub use comment_repo::CommentRepo;
