//! Product entity - Represents a stocked item with its on-hand quantity.
//!
//! A product optionally belongs to a product type, owns its deliveries and sales,
//! and is linked to clients through the `products_clients_association` table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product (e.g., "Смартфон")
    pub name: String,
    /// Units currently in stock, never negative
    pub quantity: i32,
    /// ID of the product type, None if the product is uncategorized
    pub type_id: Option<i64>,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product optionally belongs to one product type
    #[sea_orm(
        belongs_to = "super::product_type::Entity",
        from = "Column::TypeId",
        to = "super::product_type::Column::Id"
    )]
    ProductType,
    /// One product has many deliveries
    #[sea_orm(has_many = "super::delivery::Entity")]
    Deliveries,
    /// One product has many sales
    #[sea_orm(has_many = "super::sale::Entity")]
    Sales,
    /// Rows of the product/client association table
    #[sea_orm(has_many = "super::product_client::Entity")]
    ProductClients,
}

impl Related<super::product_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductType.def()
    }
}

impl Related<super::delivery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deliveries.def()
    }
}

impl Related<super::sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sales.def()
    }
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_client::Relation::Client.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_client::Relation::Product.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
