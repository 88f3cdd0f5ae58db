//! HTTP error type and its response mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Error returned by handlers and extractors.
///
/// Every variant renders as `{"error": "<message>"}`. The source of an
/// `Internal` error is logged, never sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    TooManyRequests(String),
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: memos_core::Error,
    },
}

impl ApiError {
    /// Map a store error to a 500 carrying `message`.
    ///
    /// ```ignore
    /// store.list_tags(&find).await.map_err(ApiError::internal("Failed to find tag list"))?;
    /// ```
    pub fn internal(message: impl Into<String>) -> impl FnOnce(memos_core::Error) -> ApiError {
        let message = message.into();
        move |source| ApiError::Internal { message, source }
    }

    /// Rejection of a tag request body that is not valid JSON of the expected shape.
    pub fn malformed_tag_request(err: serde_json::Error) -> ApiError {
        tracing::debug!(error = %err, "Rejected tag request body");
        ApiError::BadRequest("Malformed post tag request".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal { message, source } = &self {
            tracing::error!(error = %source, "{}", message);
        }

        let body = Json(serde_json::json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("x".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::TooManyRequests("x".into()).status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        let internal = ApiError::internal("Failed to upsert tag")(memos_core::Error::InvalidInput(
            "boom".into(),
        ));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_message_hides_source() {
        let err = ApiError::internal("Failed to find tag list")(memos_core::Error::NotFound(
            "tag work".into(),
        ));
        assert_eq!(err.to_string(), "Failed to find tag list");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Not found: tag work"));
    }

    #[tokio::test]
    async fn test_response_body_shape() {
        let response = ApiError::NotFound("Tag name not found: x".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Tag name not found: x" }));
    }
}
