//! Shared response envelope for API handlers.
//!
//! Every API response (health excepted) is wrapped in
//! `{ "success": bool, "data": ..., "message": ... }`; errors carry
//! `{ "success": false, "error": ... }` via [`crate::error::AppError`].

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 200 envelope with a data payload.
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        success: true,
        data,
        message: None,
    })
}

/// 200 envelope with a data payload and a human-readable message.
pub fn ok_message<T: Serialize>(data: T, message: &str) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        success: true,
        data,
        message: Some(message.to_string()),
    })
}

/// 201 envelope for newly created resources.
pub fn created<T: Serialize>(data: T, message: &str) -> (StatusCode, Json<ApiResponse<T>>) {
    (StatusCode::CREATED, ok_message(data, message))
}
