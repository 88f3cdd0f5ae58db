//! Success envelope shared by all tag endpoints.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// `{"data": ...}` wrapper around a successful payload.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_under_data_key() {
        let json = serde_json::to_string(&DataResponse::new(vec!["a", "b"])).unwrap();
        assert_eq!(json, r#"{"data":["a","b"]}"#);

        let json = serde_json::to_string(&DataResponse::new(true)).unwrap();
        assert_eq!(json, r#"{"data":true}"#);
    }
}
