//! HTTP layer - axum router exposing the read projections as JSON.
//!
//! Handlers are thin: each one calls a single projection with the shared
//! connection pool and serializes the records as-is.

/// Route handlers, one per collection
pub mod handlers;

use crate::errors::{Error, Result};
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared data available to all handlers.
#[derive(Clone)]
pub struct ApiState {
    /// Connection pool; every request checks out its own connection
    pub database: DatabaseConnection,
}

impl ApiState {
    /// Creates a new `ApiState` around the given database connection.
    #[must_use]
    pub const fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

/// Body returned with a 500 response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::EmptyField { .. } | Self::InvalidQuantity { .. } => StatusCode::BAD_REQUEST,
            Self::ProductTypeNotFound { .. }
            | Self::ProductNotFound { .. }
            | Self::ClientNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Builds the application router.
pub fn router(database: DatabaseConnection) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/product_types", get(handlers::product_types))
        .route("/products", get(handlers::products))
        .route("/deliveries", get(handlers::deliveries))
        .route("/sales", get(handlers::sales))
        .route("/clients", get(handlers::clients))
        .layer(TraceLayer::new_for_http())
        .with_state(ApiState::new(database))
}

/// Serves the API on `addr` until the process is stopped.
///
/// # Errors
/// Returns `Error::Io` if the address cannot be bound or the server fails.
pub async fn serve(addr: SocketAddr, database: DatabaseConnection) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(database)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    async fn get_path(app: Router, path: &str) -> (StatusCode, String, String) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_greeting() -> Result<()> {
        let db = setup_test_db().await?;
        let (status, content_type, body) = get_path(router(db), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body, handlers::GREETING);
        Ok(())
    }

    #[tokio::test]
    async fn test_every_collection_route_returns_two_records() -> Result<()> {
        let db = setup_seeded_db().await?;

        for path in ["/product_types", "/products", "/deliveries", "/sales", "/clients"] {
            let (status, content_type, body) = get_path(router(db.clone()), path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(content_type, "application/json", "{path}");

            let value: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(value.as_array().map(Vec::len), Some(2), "{path}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_products_route_shape() -> Result<()> {
        let db = setup_seeded_db().await?;
        let (_, _, body) = get_path(router(db), "/products").await;

        assert!(body.contains("Смартфон"));
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            value[0],
            serde_json::json!({"id": 1, "name": "Смартфон", "quantity": 50, "type": "Електроніка"})
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_deliveries_route_shape() -> Result<()> {
        let db = setup_seeded_db().await?;
        let (_, _, body) = get_path(router(db), "/deliveries").await;

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            value[1],
            serde_json::json!({
                "id": 2,
                "date": "2024-01-15T10:30:00Z",
                "quantity": 50,
                "product_id": 2
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_clients_route_preserves_unicode() -> Result<()> {
        let db = setup_seeded_db().await?;
        let (_, _, body) = get_path(router(db), "/clients").await;

        assert!(body.contains("\"name\":\"Іванов Максим\""));
        assert!(body.contains("\"products\":[\"Смартфон\"]"));
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_store_returns_empty_arrays() -> Result<()> {
        let db = setup_test_db().await?;

        for path in ["/product_types", "/products", "/deliveries", "/sales", "/clients"] {
            let (status, _, body) = get_path(router(db.clone()), path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, "[]", "{path}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_read_failure_is_not_masked() -> Result<()> {
        let db = setup_seeded_db().await?;
        drop_table(&db, "sales").await?;

        let (status, _, body) = get_path(router(db), "/sales").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(
            value["error"]
                .as_str()
                .unwrap()
                .starts_with("Failed to read sales")
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_broken_store_does_not_affect_healthy_one() -> Result<()> {
        let broken = setup_seeded_db().await?;
        drop_table(&broken, "sales").await?;
        let healthy = setup_seeded_db().await?;

        let (sales, products) = tokio::join!(
            get_path(router(broken), "/sales"),
            get_path(router(healthy), "/products"),
        );
        assert_eq!(sales.0, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(products.0, StatusCode::OK);
        assert!(products.2.contains("Футболка"));
        Ok(())
    }
}
