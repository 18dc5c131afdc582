//! Client entity - A customer, linked to the products they are associated with.
//!
//! The link to products is many-to-many and goes through
//! [`super::product_client`]; neither side owns the other.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Client database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    /// Unique identifier for the client
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Full name of the client
    pub name: String,
    /// Contact email, stored as given
    pub email: String,
}

/// Defines relationships between Client and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Rows of the product/client association table
    #[sea_orm(has_many = "super::product_client::Entity")]
    ProductClients,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_client::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_client::Relation::Client.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
