//! Product business logic - projection of products with their type name.
//!
//! The type name is resolved according to a [`RelatedFetch`] strategy chosen by the
//! caller. A product with no type is reported without a `type` field.

use crate::{
    core::{RelatedFetch, require_text},
    entities::{Product, ProductType, product},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, prelude::*};
use serde::Serialize;

/// Flat, serializable view of a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    /// Product ID
    pub id: i64,
    /// Product name
    pub name: String,
    /// Units in stock
    pub quantity: i32,
    /// Name of the product's type; omitted from JSON when the product has none
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

impl ProductRecord {
    fn new(product: product::Model, type_name: Option<String>) -> Self {
        Self {
            id: product.id,
            name: product.name,
            quantity: product.quantity,
            type_name,
        }
    }
}

/// Lists all products ordered by ID, each with the name of its product type.
///
/// # Errors
/// Returns `Error::Read` if any query fails.
pub async fn list_products(
    db: &DatabaseConnection,
    fetch: RelatedFetch,
) -> Result<Vec<ProductRecord>> {
    match fetch {
        RelatedFetch::Joined => {
            let rows = Product::find()
                .find_also_related(ProductType)
                .order_by_asc(product::Column::Id)
                .all(db)
                .await
                .map_err(Error::read("products"))?;

            Ok(rows
                .into_iter()
                .map(|(product, product_type)| {
                    ProductRecord::new(product, product_type.map(|t| t.name))
                })
                .collect())
        }
        RelatedFetch::PerRow => {
            let products = Product::find()
                .order_by_asc(product::Column::Id)
                .all(db)
                .await
                .map_err(Error::read("products"))?;

            let mut records = Vec::with_capacity(products.len());
            for product in products {
                let type_name = match product.type_id {
                    Some(type_id) => ProductType::find_by_id(type_id)
                        .one(db)
                        .await
                        .map_err(Error::read("products"))?
                        .map(|t| t.name),
                    None => None,
                };
                records.push(ProductRecord::new(product, type_name));
            }
            Ok(records)
        }
    }
}

/// Creates a new product, checking that the referenced type exists.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The quantity is negative
/// - `type_id` is set but no such product type exists
/// - The database insert operation fails
pub async fn create_product<C>(
    db: &C,
    name: &str,
    quantity: i32,
    type_id: Option<i64>,
) -> Result<product::Model>
where
    C: ConnectionTrait,
{
    let name = require_text("name", name)?;

    if quantity < 0 {
        return Err(Error::InvalidQuantity { quantity });
    }

    if let Some(id) = type_id {
        ProductType::find_by_id(id)
            .one(db)
            .await?
            .ok_or(Error::ProductTypeNotFound { id })?;
    }

    let product = product::ActiveModel {
        name: Set(name),
        quantity: Set(quantity),
        type_id: Set(type_id),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{list_product_types, product_type::create_product_type};
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_product_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_product(&db, "", 1, None).await;
        assert!(matches!(result, Err(Error::EmptyField { field: "name" })));

        let result = create_product(&db, "Смартфон", -1, None).await;
        assert!(matches!(result, Err(Error::InvalidQuantity { quantity: -1 })));

        assert!(list_products(&db, RelatedFetch::Joined).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_rejects_unknown_type() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_product(&db, "Смартфон", 5, Some(999)).await;
        assert!(matches!(result, Err(Error::ProductTypeNotFound { id: 999 })));
        assert!(list_products(&db, RelatedFetch::Joined).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_allows_zero_quantity() -> Result<()> {
        let db = setup_test_db().await?;
        let product = create_product(&db, "Футболка", 0, None).await?;
        assert_eq!(product.quantity, 0);
        assert_eq!(product.type_id, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_products_resolves_type_name() -> Result<()> {
        let db = setup_seeded_db().await?;

        let records = list_products(&db, RelatedFetch::Joined).await?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Смартфон");
        assert_eq!(records[0].quantity, 50);
        assert_eq!(records[0].type_name.as_deref(), Some("Електроніка"));
        assert_eq!(records[1].name, "Футболка");
        assert_eq!(records[1].type_name.as_deref(), Some("Одяг"));

        // Every type name matches the product type the row actually references
        let types = list_product_types(&db).await?;
        for record in &records {
            let stored = Product::find_by_id(record.id)
                .one(&db)
                .await?
                .ok_or(Error::ProductNotFound { id: record.id })?;
            let expected = types
                .iter()
                .find(|t| Some(t.id) == stored.type_id)
                .map(|t| t.name.clone());
            assert_eq!(record.type_name, expected);
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_strategies_agree() -> Result<()> {
        let db = setup_test_db().await?;
        let clothes = create_product_type(&db, "Одяг").await?;
        create_test_product(&db, "Футболка", Some(clothes.id)).await?;
        create_test_product(&db, "Загадка", None).await?;

        let joined = list_products(&db, RelatedFetch::Joined).await?;
        let per_row = list_products(&db, RelatedFetch::PerRow).await?;
        assert_eq!(joined, per_row);
        assert_eq!(joined[1].type_name, None);
        Ok(())
    }

    #[test]
    fn test_untyped_product_omits_type_field() {
        let record = ProductRecord {
            id: 3,
            name: "Загадка".to_string(),
            quantity: 1,
            type_name: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "name": "Загадка", "quantity": 1}));
    }

    #[tokio::test]
    async fn test_list_products_surfaces_read_failure() -> Result<()> {
        let db = setup_test_db().await?;
        drop_table(&db, "products").await?;

        for fetch in [RelatedFetch::Joined, RelatedFetch::PerRow] {
            let result = list_products(&db, fetch).await;
            assert!(matches!(
                result,
                Err(Error::Read {
                    collection: "products",
                    ..
                })
            ));
        }
        Ok(())
    }
}
