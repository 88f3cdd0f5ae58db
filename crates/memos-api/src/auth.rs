//! Authenticated-user extraction.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use memos_core::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Extractor for the user owning the request's session.
///
/// Reads `Authorization: Bearer <token>` and resolves the token through the
/// session repository. Handlers take this as an argument instead of reading
/// any ambient request context:
///
/// ```ignore
/// async fn list_tags(State(state): State<AppState>, CurrentUser(user): CurrentUser) -> ... {
///     state.tags.list_tags(&user).await
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Extract the token from a `Bearer <token>` header value.
pub fn bearer_token(value: &str) -> Option<&str> {
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .ok_or_else(missing_user)?;

        let user = state
            .sessions
            .find_user_by_token(token)
            .await
            .map_err(ApiError::internal("Failed to find user session"))?
            .ok_or_else(missing_user)?;

        tracing::trace!(
            subsystem = "api",
            component = "auth",
            user_id = user.id,
            "Session resolved"
        );
        Ok(CurrentUser(user))
    }
}

fn missing_user() -> ApiError {
    ApiError::Unauthorized("Missing user in session".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("Bearer   abc  "), Some("abc"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("abc"), None);
    }
}
