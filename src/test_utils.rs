//! Shared test utilities for the shop backend.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    config::database::create_tables,
    core::{product::create_product, seed},
    entities,
    errors::Result,
};
use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing_subscriber::EnvFilter;

pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Fixed instant used for seeded deliveries and sales: 2024-01-15T10:30:00Z.
pub fn test_timestamp() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_705_314_600, 0).unwrap_or_default()
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Creates an in-memory database holding the sample dataset.
pub async fn setup_seeded_db() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    seed(&db, test_timestamp()).await?;
    Ok(db)
}

/// Creates a test product with 10 units in stock.
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    type_id: Option<i64>,
) -> Result<entities::product::Model> {
    create_product(db, name, 10, type_id).await
}

/// Drops `table`, making every read of it fail afterwards.
pub async fn drop_table(db: &DatabaseConnection, table: &str) -> Result<()> {
    db.execute_unprepared(&format!("DROP TABLE {table}")).await?;
    Ok(())
}

/// Counts the user tables in a `SQLite` store.
pub async fn count_tables(db: &DatabaseConnection) -> Result<usize> {
    let rows = db
        .query_all(Statement::from_string(
            db.get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        ))
        .await?;
    Ok(rows.len())
}
