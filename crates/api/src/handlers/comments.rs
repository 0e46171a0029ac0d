//! Handlers for the guestbook (`/comments`).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use invitation_core::guestbook::{validate_new_comment, NewComment};
use invitation_db::models::comment::CreateComment;
use invitation_db::repositories::CommentRepo;

use crate::error::AppResult;
use crate::response::{AckResponse, DataResponse};
use crate::state::AppState;

/// GET /api/v1/comments
///
/// Every stored wish, newest first, read from one consistent snapshot.
pub async fn list_comments(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let comments = CommentRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// POST /api/v1/comments
///
/// Validate and store a wish. Nothing is written unless validation passes.
pub async fn create_comment(
    State(state): State<AppState>,
    payload: Result<Json<NewComment>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let validated = validate_new_comment(input)?;

    let comment = CommentRepo::create(&state.pool, &CreateComment::from(validated)).await?;

    tracing::info!(
        comment_id = comment.id,
        attendance = comment.attendance,
        "Guestbook wish stored",
    );

    Ok((
        StatusCode::CREATED,
        Json(AckResponse {
            data: comment,
            message: state.config.wish_ack_message.clone(),
        }),
    ))
}
