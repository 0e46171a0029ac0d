//! Repository for the `comments` table.

use invitation_core::guestbook::LIST_BATCH_SIZE;
use invitation_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::comment::{Comment, CreateComment};

/// Column list for comments queries.
const COLUMNS: &str = "id, name, content, attendance, created_at";

/// Create and read operations for guestbook comments.
///
/// Comments are append-only: there is no update or delete.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the stored row with its server-assigned
    /// `id` and `created_at`.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (name, content, attendance)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(&input.name)
            .bind(&input.content)
            .bind(input.attendance)
            .fetch_one(pool)
            .await
    }

    /// Fetch one newest-first page.
    ///
    /// With `after = None` the page starts at the newest comment; otherwise it
    /// starts strictly after the comment with that id in
    /// `(created_at DESC, id DESC)` order. An unknown cursor yields an empty
    /// page.
    pub async fn list_page(
        conn: &mut PgConnection,
        after: Option<DbId>,
        limit: i64,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE $1::BIGINT IS NULL
                OR (created_at, id) < (SELECT c.created_at, c.id FROM comments c WHERE c.id = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(after)
            .bind(limit)
            .fetch_all(conn)
            .await
    }

    /// Return every comment, newest first.
    ///
    /// Walks the table in [`LIST_BATCH_SIZE`] pages inside a single
    /// repeatable-read snapshot, so the result is consistent even if wishes
    /// arrive mid-walk. Either the full list is returned or the error is.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Comment>, sqlx::Error> {
        Self::list_all_batched(pool, LIST_BATCH_SIZE).await
    }

    /// [`list_all`](Self::list_all) with an explicit batch size.
    pub async fn list_all_batched(pool: &PgPool, batch_size: i64) -> Result<Vec<Comment>, sqlx::Error> {
        let batch_size = batch_size.max(1);
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let mut all = Vec::new();
        let mut cursor: Option<DbId> = None;
        let mut batches = 0usize;

        loop {
            let batch = Self::list_page(&mut *tx, cursor, batch_size).await?;
            batches += 1;
            let exhausted = (batch.len() as i64) < batch_size;
            cursor = batch.last().map(|c| c.id);
            all.extend(batch);

            if exhausted || cursor.is_none() {
                break;
            }
        }

        tx.commit().await?;

        tracing::debug!(count = all.len(), batches, "Listed guestbook comments");
        Ok(all)
    }

    /// Number of stored comments.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(pool)
            .await
    }
}
