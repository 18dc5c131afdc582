use crate::{
    api::ApiState,
    core::{
        ClientRecord, DeliveryRecord, ProductRecord, ProductTypeRecord, RelatedFetch, SaleRecord,
        list_clients, list_deliveries, list_product_types, list_products, list_sales,
    },
    errors::Result,
};
use axum::{Json, extract::State};
use tracing::error;

/// Plain-text body of the root route
pub const GREETING: &str = "Ласкаво просимо на головну сторінку!";

/// `GET /`
pub async fn index() -> &'static str {
    GREETING
}

/// `GET /product_types`
pub async fn product_types(State(state): State<ApiState>) -> Result<Json<Vec<ProductTypeRecord>>> {
    list_product_types(&state.database)
        .await
        .map(Json)
        .inspect_err(|e| error!("Error in /product_types: {}", e))
}

/// `GET /products`
pub async fn products(State(state): State<ApiState>) -> Result<Json<Vec<ProductRecord>>> {
    list_products(&state.database, RelatedFetch::Joined)
        .await
        .map(Json)
        .inspect_err(|e| error!("Error in /products: {}", e))
}

/// `GET /deliveries`
pub async fn deliveries(State(state): State<ApiState>) -> Result<Json<Vec<DeliveryRecord>>> {
    list_deliveries(&state.database)
        .await
        .map(Json)
        .inspect_err(|e| error!("Error in /deliveries: {}", e))
}

/// `GET /sales`
pub async fn sales(State(state): State<ApiState>) -> Result<Json<Vec<SaleRecord>>> {
    list_sales(&state.database)
        .await
        .map(Json)
        .inspect_err(|e| error!("Error in /sales: {}", e))
}

/// `GET /clients`
pub async fn clients(State(state): State<ApiState>) -> Result<Json<Vec<ClientRecord>>> {
    list_clients(&state.database)
        .await
        .map(Json)
        .inspect_err(|e| error!("Error in /clients: {}", e))
}
