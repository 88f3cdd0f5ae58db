//! Tag HTTP handlers.
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | POST | `/api/tag` | `{"data": "<name>"}` |
//! | GET | `/api/tag` | `{"data": ["<name>", ...]}` |
//! | GET | `/api/tag/suggestion` | `{"data": ["<name>", ...]}` |
//! | POST | `/api/tag/delete` | `{"data": true}` |

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /api/tag` and `POST /api/tag/delete`.
///
/// A missing or `null` name decodes as the empty string.
#[derive(Debug, Default, Deserialize)]
pub struct TagNameBody {
    #[serde(default)]
    pub name: Option<String>,
}

impl TagNameBody {
    /// Decode a request body. The `Content-Type` header is not consulted.
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(body).map_err(ApiError::malformed_tag_request)
    }

    pub fn into_name(self) -> String {
        self.name.unwrap_or_default()
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tag", get(list_tags).post(create_tag))
        .route("/tag/suggestion", get(suggest_tags))
        .route("/tag/delete", post(delete_tag))
}

async fn create_tag(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Bytes,
) -> Result<DataResponse<String>, ApiError> {
    let body = TagNameBody::parse(&body)?;
    let name = state.tags.create_tag(&user, body.into_name()).await?;
    Ok(DataResponse::new(name))
}

async fn list_tags(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<DataResponse<Vec<String>>, ApiError> {
    let names = state.tags.list_tags(&user).await?;
    Ok(DataResponse::new(names))
}

async fn suggest_tags(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<DataResponse<Vec<String>>, ApiError> {
    let names = state.tags.suggest_tags(&user).await?;
    Ok(DataResponse::new(names))
}

async fn delete_tag(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Bytes,
) -> Result<DataResponse<bool>, ApiError> {
    let body = TagNameBody::parse(&body)?;
    state.tags.delete_tag(&user, body.into_name()).await?;
    Ok(DataResponse::new(true))
}
