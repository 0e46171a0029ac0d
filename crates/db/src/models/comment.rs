//! Guestbook comment model.

use invitation_core::guestbook::ValidatedComment;
use invitation_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;

/// A row from the `comments` table.
///
/// Serialized in camelCase because the page layer reads `createdAt`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Comment {
    pub id: DbId,
    pub name: String,
    pub content: String,
    pub attendance: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting a new comment.
///
/// Only constructed from a [`ValidatedComment`], so nothing unvalidated can
/// reach the insert.
#[derive(Debug, Clone)]
pub struct CreateComment {
    pub name: String,
    pub content: String,
    pub attendance: bool,
}

impl From<ValidatedComment> for CreateComment {
    fn from(input: ValidatedComment) -> Self {
        Self {
            name: input.name,
            content: input.content,
            attendance: input.attendance.is_attending(),
        }
    }
}
