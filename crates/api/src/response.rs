use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

/// Standard success envelope: `{ "success": true, "data": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload in the success envelope with HTTP 200.
    pub fn ok(data: T) -> (StatusCode, Json<Self>) {
        (
            StatusCode::OK,
            Json(Self {
                success: true,
                data,
            }),
        )
    }

    /// Wrap a payload in the success envelope with HTTP 201 Created.
    pub fn created(data: T) -> (StatusCode, Json<Self>) {
        (
            StatusCode::CREATED,
            Json(Self {
                success: true,
                data,
            }),
        )
    }
}

/// A success response carrying only a message, no data payload.
///
/// Used for operations like deletes where there is nothing to return.
pub fn message_response(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "success": true,
        "message": message,
    });
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_shape() {
        let (status, Json(body)) = ApiResponse::ok(json!({ "id": 7 }));
        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        assert_eq!(body.data["id"], 7);
    }

    #[test]
    fn test_created_status() {
        let (status, _) = ApiResponse::created("new-thing");
        assert_eq!(status, StatusCode::CREATED);
    }
}
