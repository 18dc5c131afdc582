//! Seeds the store with the fixed sample dataset.
//!
//! Rows go in dependency order: product types, products, deliveries, sales, clients,
//! then client/product links. Each stage runs in its own database transaction and is
//! committed before the next stage reads the IDs it produced.

use crate::{
    core::{
        client::{create_client, link_product},
        delivery::create_delivery,
        product::create_product,
        product_type::create_product_type,
        sale::create_sale,
    },
    entities::{Client, Delivery, Product, ProductType, Sale},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, PaginatorTrait, TransactionTrait, prelude::*};
use tracing::{debug, info, instrument, warn};

const PRODUCT_TYPES: [&str; 2] = ["Електроніка", "Одяг"];
/// (name, quantity, index into `PRODUCT_TYPES`)
const PRODUCTS: [(&str, i32, usize); 2] = [("Смартфон", 50, 0), ("Футболка", 100, 1)];
/// (index into `PRODUCTS`, quantity)
const DELIVERIES: [(usize, i32); 2] = [(0, 20), (1, 50)];
const SALES: [(usize, i32); 2] = [(0, 10), (1, 30)];
/// (name, email, index into `PRODUCTS`)
const CLIENTS: [(&str, &str, usize); 2] = [
    ("Іванов Максим", "ivanov@gmail.com", 0),
    ("Петров Володимир", "petrov@gmail.com", 1),
];

fn schema_err(source: DbErr) -> Error {
    Error::Schema { source }
}

/// Inserts the sample dataset, stamping deliveries and sales with `timestamp`.
///
/// # Errors
/// Returns `Error::Schema` on any storage failure, or the validation error of the
/// offending row. Stages committed before the failure are kept.
#[instrument(skip(db))]
pub async fn seed(db: &DatabaseConnection, timestamp: DateTimeUtc) -> Result<()> {
    let txn = db.begin().await.map_err(schema_err)?;
    let mut type_ids = Vec::with_capacity(PRODUCT_TYPES.len());
    for name in PRODUCT_TYPES {
        let product_type = create_product_type(&txn, name)
            .await
            .map_err(Error::into_schema)?;
        type_ids.push(product_type.id);
    }
    txn.commit().await.map_err(schema_err)?;
    debug!("Seeded {} product types", type_ids.len());

    let txn = db.begin().await.map_err(schema_err)?;
    let mut product_ids = Vec::with_capacity(PRODUCTS.len());
    for (name, quantity, type_index) in PRODUCTS {
        let product = create_product(&txn, name, quantity, Some(type_ids[type_index]))
            .await
            .map_err(Error::into_schema)?;
        product_ids.push(product.id);
    }
    txn.commit().await.map_err(schema_err)?;
    debug!("Seeded {} products", product_ids.len());

    let txn = db.begin().await.map_err(schema_err)?;
    for (product_index, quantity) in DELIVERIES {
        create_delivery(&txn, product_ids[product_index], quantity, timestamp)
            .await
            .map_err(Error::into_schema)?;
    }
    txn.commit().await.map_err(schema_err)?;

    let txn = db.begin().await.map_err(schema_err)?;
    for (product_index, quantity) in SALES {
        create_sale(&txn, product_ids[product_index], quantity, timestamp)
            .await
            .map_err(Error::into_schema)?;
    }
    txn.commit().await.map_err(schema_err)?;
    debug!("Seeded deliveries and sales");

    let txn = db.begin().await.map_err(schema_err)?;
    for (name, email, product_index) in CLIENTS {
        let client = create_client(&txn, name, email)
            .await
            .map_err(Error::into_schema)?;
        link_product(&txn, client.id, product_ids[product_index])
            .await
            .map_err(Error::into_schema)?;
    }
    txn.commit().await.map_err(schema_err)?;

    info!("Sample data seeded.");
    Ok(())
}

/// Names of the seeded collections that currently hold no rows.
///
/// # Errors
/// Returns `Error::Schema` if a count query fails.
pub async fn empty_collections(db: &DatabaseConnection) -> Result<Vec<&'static str>> {
    let counts = [
        ("product_types", ProductType::find().count(db).await),
        ("products", Product::find().count(db).await),
        ("deliveries", Delivery::find().count(db).await),
        ("sales", Sale::find().count(db).await),
        ("clients", Client::find().count(db).await),
    ];

    let mut empty = Vec::new();
    for (name, count) in counts {
        if count.map_err(schema_err)? == 0 {
            empty.push(name);
        }
    }
    Ok(empty)
}

/// Seeds the store unless it already holds product types.
///
/// Returns `true` if the sample dataset was inserted. A store left partially seeded
/// by an earlier failure is not repaired; its empty collections are logged with
/// `warn!` and served as they are.
///
/// # Errors
/// Same as [`seed`].
pub async fn seed_if_empty(db: &DatabaseConnection, timestamp: DateTimeUtc) -> Result<bool> {
    let existing = ProductType::find().count(db).await.map_err(schema_err)?;
    if existing > 0 {
        info!("Store already holds {existing} product types, skipping seed.");
        let missing = empty_collections(db).await?;
        if !missing.is_empty() {
            warn!(
                "Store looks partially seeded, empty collections: {}",
                missing.join(", ")
            );
        }
        return Ok(false);
    }

    seed(db, timestamp).await?;
    Ok(true)
}
