//! Database configuration module for the shop backend.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated with `Schema::create_table_from_entity`, so the schema always
//! matches the entity definitions, and every statement carries `IF NOT EXISTS` so that
//! creating the schema against an existing store is a no-op.

use crate::config::AppConfig;
use crate::entities::{Client, Delivery, Product, ProductClient, ProductType, Sale};
use crate::errors::{Error, Result};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema,
};
use tracing::{debug, info, instrument};

/// Opens the connection pool described by `config`.
///
/// The returned handle is passed explicitly to every read operation; there is no
/// process-wide engine.
#[instrument(skip(config), fields(url = %config.database_url))]
pub async fn create_connection(config: &AppConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.sqlx_logging(config.sql_logging);

    Database::connect(options).await.map_err(Into::into)
}

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    debug!("Ensuring table {}", entity.table_name());
    let builder = db.get_database_backend();
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(builder.build(&statement))
        .await
        .map_err(|source| Error::Schema { source })?;
    Ok(())
}

/// Creates all tables, parents before children so foreign keys resolve.
///
/// # Errors
/// Returns `Error::Schema` if any `CREATE TABLE` statement fails.
#[instrument(skip(db))]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, ProductType).await?;
    create_table(db, &schema, Product).await?;
    create_table(db, &schema, Delivery).await?;
    create_table(db, &schema, Sale).await?;
    create_table(db, &schema, Client).await?;
    create_table(db, &schema, ProductClient).await?;

    info!("Database tables ensured.");
    Ok(())
}
