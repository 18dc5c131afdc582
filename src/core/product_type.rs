//! Product type projection and creation.
//!
//! Each listed product type carries the names of the products assigned to it,
//! loaded in the same query as the types themselves.

use crate::{
    core::require_text,
    entities::{Product, ProductType, product, product_type},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, prelude::*};
use serde::Serialize;

/// Flat, serializable view of a product type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductTypeRecord {
    /// Product type ID
    pub id: i64,
    /// Product type name
    pub name: String,
    /// Names of the products of this type, ordered by product ID
    pub products: Vec<String>,
}

/// Lists all product types ordered by ID, each with the names of its products.
///
/// # Errors
/// Returns `Error::Read` if the query fails.
pub async fn list_product_types(db: &DatabaseConnection) -> Result<Vec<ProductTypeRecord>> {
    let rows = ProductType::find()
        .find_with_related(Product)
        .order_by_asc(product_type::Column::Id)
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(Error::read("product_types"))?;

    Ok(rows
        .into_iter()
        .map(|(product_type, products)| ProductTypeRecord {
            id: product_type.id,
            name: product_type.name,
            products: products.into_iter().map(|p| p.name).collect(),
        })
        .collect())
}

/// Creates a new product type.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The database insert operation fails
pub async fn create_product_type<C>(db: &C, name: &str) -> Result<product_type::Model>
where
    C: ConnectionTrait,
{
    let product_type = product_type::ActiveModel {
        name: Set(require_text("name", name)?),
        ..Default::default()
    };
    product_type.insert(db).await.map_err(Into::into)
}
