//! Domain types, constants and validation shared by the invitation backend.
//!
//! Nothing in this crate touches the database or the network; the `db`,
//! `gallery` and `api` crates build on these definitions.

pub mod error;
pub mod guestbook;
pub mod media;
pub mod types;
