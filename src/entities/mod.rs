//! Entity module - Contains all SeaORM entity definitions for the shop database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod client;
pub mod delivery;
pub mod product;
pub mod product_client;
pub mod product_type;
pub mod sale;

// Re-export specific types to avoid conflicts
pub use client::{Column as ClientColumn, Entity as Client, Model as ClientModel};
pub use delivery::{Column as DeliveryColumn, Entity as Delivery, Model as DeliveryModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use product_client::{
    Column as ProductClientColumn, Entity as ProductClient, Model as ProductClientModel,
};
pub use product_type::{
    Column as ProductTypeColumn, Entity as ProductType, Model as ProductTypeModel,
};
pub use sale::{Column as SaleColumn, Entity as Sale, Model as SaleModel};
