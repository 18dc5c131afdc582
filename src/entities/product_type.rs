//! Product type entity - A category that groups products (e.g., "Електроніка").

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product type database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_types")]
pub struct Model {
    /// Unique identifier for the product type
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the category
    pub name: String,
}

/// Defines relationships between `ProductType` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One product type has many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
