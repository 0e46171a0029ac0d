//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Writes that the guest
//! sees confirmed also carry a `message`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": T, "message": "..." }` envelope for acknowledged writes.
#[derive(Debug, Serialize)]
pub struct AckResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}
