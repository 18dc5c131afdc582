//! Association table between products and clients.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One product/client pairing
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products_clients_association")]
pub struct Model {
    /// ID of the linked product
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i64,
    /// ID of the linked client
    #[sea_orm(primary_key, auto_increment = false)]
    pub client_id: i64,
}

/// Both columns are foreign keys
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The linked product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
    /// The linked client
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
