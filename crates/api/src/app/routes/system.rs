use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

pub async fn health() -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "message": "Vibe Commerce API is running",
            "timestamp": Utc::now().to_rfc3339(),
        })),
    )
        .into_response()
}
