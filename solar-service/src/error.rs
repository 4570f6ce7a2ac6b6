use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Errors surfaced to HTTP clients.
///
/// Measurement reads deliberately propagate database failures here instead of
/// absorbing them the way the health check does.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Database(e) => {
                tracing::error!(error = %e, "request failed");
            }
        }
        metrics::counter!("http_request_errors_total").increment(1);

        let body = Json(serde_json::json!({
            "statusCode": 500,
            "message": "Internal server error",
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
