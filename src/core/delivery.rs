//! Delivery projection and creation.

use crate::{
    entities::{Delivery, Product, delivery},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, prelude::*};
use serde::Serialize;

/// Flat, serializable view of a delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryRecord {
    /// Delivery ID
    pub id: i64,
    /// When the delivery was recorded, serialized as RFC 3339
    pub date: DateTimeUtc,
    /// Units delivered
    pub quantity: i32,
    /// ID of the delivered product (not resolved to a name)
    pub product_id: i64,
}

impl From<delivery::Model> for DeliveryRecord {
    fn from(model: delivery::Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            quantity: model.quantity,
            product_id: model.product_id,
        }
    }
}

/// Lists all deliveries ordered by ID.
///
/// # Errors
/// Returns `Error::Read` if the query fails.
pub async fn list_deliveries(db: &DatabaseConnection) -> Result<Vec<DeliveryRecord>> {
    Delivery::find()
        .order_by_asc(delivery::Column::Id)
        .all(db)
        .await
        .map(|rows| rows.into_iter().map(DeliveryRecord::from).collect())
        .map_err(Error::read("deliveries"))
}

/// Records a delivery of `quantity` units of a product at `date`.
///
/// # Errors
/// Returns an error if:
/// - The quantity is not positive
/// - The product does not exist
/// - The database insert operation fails
pub async fn create_delivery<C>(
    db: &C,
    product_id: i64,
    quantity: i32,
    date: DateTimeUtc,
) -> Result<delivery::Model>
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

    let delivery = delivery::ActiveModel {
        date: Set(date),
        quantity: Set(quantity),
        product_id: Set(product_id),
        ..Default::default()
    };
    delivery.insert(db).await.map_err(Into::into)
}
