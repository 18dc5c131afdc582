//! Client projection, creation and linking to products.
//!
//! Clients reach products through the `products_clients_association` table; the
//! listing loads both sides in one query.

use crate::{
    core::require_text,
    entities::{Client, Product, client, product, product_client},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, prelude::*};
use serde::Serialize;

/// Flat, serializable view of a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientRecord {
    /// Client ID
    pub id: i64,
    /// Client name
    pub name: String,
    /// Client email
    pub email: String,
    /// Names of the linked products, ordered by product ID
    pub products: Vec<String>,
}

/// Lists all clients ordered by ID, each with the names of its linked products.
///
/// # Errors
/// Returns `Error::Read` if the query fails.
pub async fn list_clients(db: &DatabaseConnection) -> Result<Vec<ClientRecord>> {
    let rows = Client::find()
        .find_with_related(Product)
        .order_by_asc(client::Column::Id)
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(Error::read("clients"))?;

    Ok(rows
        .into_iter()
        .map(|(client, products)| ClientRecord {
            id: client.id,
            name: client.name,
            email: client.email,
            products: products.into_iter().map(|p| p.name).collect(),
        })
        .collect())
}

/// Creates a new client. The email is only required to be present.
///
/// # Errors
/// Returns an error if:
/// - The name or email is empty or whitespace-only
/// - The database insert operation fails
pub async fn create_client<C>(db: &C, name: &str, email: &str) -> Result<client::Model>
where
    C: ConnectionTrait,
{
    let client = client::ActiveModel {
        name: Set(require_text("name", name)?),
        email: Set(require_text("email", email)?),
        ..Default::default()
    };
    client.insert(db).await.map_err(Into::into)
}

/// Links an existing client to an existing product.
///
/// # Errors
/// Returns an error if either row is missing or the pair is already linked.
pub async fn link_product<C>(db: &C, client_id: i64, product_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    Client::find_by_id(client_id)
        .one(db)
        .await?
        .ok_or(Error::ClientNotFound { id: client_id })?;
    Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    let link = product_client::ActiveModel {
        product_id: Set(product_id),
        client_id: Set(client_id),
    };
    product_client::Entity::insert(link)
        .exec_without_returning(db)
        .await?;
    Ok(())
}
