//! Sale projection and creation.

use crate::{
    entities::{Product, Sale, sale},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, prelude::*};
use serde::Serialize;

/// Flat, serializable view of a sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleRecord {
    /// Sale ID
    pub id: i64,
    /// When the sale happened, serialized as RFC 3339
    pub date: DateTimeUtc,
    /// Units sold
    pub quantity: i32,
    /// ID of the sold product (not resolved to a name)
    pub product_id: i64,
}

impl From<sale::Model> for SaleRecord {
    fn from(model: sale::Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            quantity: model.quantity,
            product_id: model.product_id,
        }
    }
}

/// Lists all sales ordered by ID.
///
/// # Errors
/// Returns `Error::Read` if the query fails.
pub async fn list_sales(db: &DatabaseConnection) -> Result<Vec<SaleRecord>> {
    Sale::find()
        .order_by_asc(sale::Column::Id)
        .all(db)
        .await
        .map(|rows| rows.into_iter().map(SaleRecord::from).collect())
        .map_err(Error::read("sales"))
}

/// Records a sale of `quantity` units of a product at `date`.
///
/// # Errors
/// Returns an error if:
/// - The quantity is not positive
/// - The product does not exist
/// - The database insert operation fails
pub async fn create_sale<C>(
    db: &C,
    product_id: i64,
    quantity: i32,
    date: DateTimeUtc,
) -> Result<sale::Model>
where
    C: ConnectionTrait,
{
    if quantity <= 0 {
        return Err(Error::InvalidQuantity { quantity });
    }

    Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    let sale = sale::ActiveModel {
        date: Set(date),
        quantity: Set(quantity),
        product_id: Set(product_id),
        ..Default::default()
    };
    sale.insert(db).await.map_err(Into::into)
}
