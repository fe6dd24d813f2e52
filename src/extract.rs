use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;

/// Numeric `:id` path segment that rejects with the JSON error body.
pub struct IdPath(pub u32);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<u32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(IdPath(id)),
            Err(rejection) if rejection.status().is_client_error() => {
                Err(AppError::BadRequest(rejection.body_text()))
            }
            Err(rejection) => {
                // route registered without exactly one `:id` segment
                tracing::error!("Path extraction failed: {}", rejection.body_text());
                Err(AppError::InternalError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn id_handler(IdPath(id): IdPath) -> String {
        id.to_string()
    }

    fn app() -> Router {
        Router::new()
            .route("/items/:id", get(id_handler))
            .route("/items", get(id_handler))
    }

    async fn get_uri(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_numeric_id_is_extracted() {
        let (status, body) = get_uri("/items/42").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"42");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_json_bad_request() {
        let (status, body) = get_uri("/items/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_route_without_id_is_internal_error() {
        let (status, body) = get_uri("/items").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Internal server error");
    }
}
