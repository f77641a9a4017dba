//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "success": true, "data": ... }` envelope.
//! Use [`DataResponse`] instead of ad-hoc `serde_json::json!` maps to get
//! compile-time type safety and consistent serialization. Error responses
//! carry `{ "success": false, "message": ..., "code": ... }` and are
//! produced by the `AppError` conversion in `error.rs`.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { success: true, data }
    }
}
