//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//!
//! There are no update DTOs: stored rows are never modified.

pub mod comment;
