//! Delivery entity - An incoming shipment of a single product.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Delivery database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "deliveries")]
pub struct Model {
    /// Unique identifier for the delivery
    #[sea_orm(primary_key)]
    pub id: i64,
    /// When the delivery was recorded (UTC)
    pub date: DateTimeUtc,
    /// Number of units delivered
    pub quantity: i32,
    /// ID of the delivered product
    pub product_id: i64,
}

/// Defines relationships between Delivery and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each delivery belongs to one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
