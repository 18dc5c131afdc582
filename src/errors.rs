//! Unified error type for the shop backend.
//!
//! Startup failures (configuration, schema, seed) and read failures from the
//! projection layer are kept apart so callers can tell a broken store from a
//! broken request. An empty collection is never an error.

use sea_orm::DbErr;
use thiserror::Error;

/// All errors produced by the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or environment could not be used
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Creating the schema or inserting seed rows failed
    #[error("Schema error: {source}")]
    Schema {
        /// Underlying storage error
        source: DbErr,
    },

    /// A projection query over `collection` failed
    #[error("Failed to read {collection}: {source}")]
    Read {
        /// Name of the collection being listed (e.g. `"products"`)
        collection: &'static str,
        /// Underlying storage error
        source: DbErr,
    },

    /// Any other storage error
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// A required text field was empty or whitespace-only
    #[error("Field `{field}` cannot be empty")]
    EmptyField {
        /// Name of the offending field
        field: &'static str,
    },

    /// A quantity outside the allowed range
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: i32,
    },

    /// Referenced product type does not exist
    #[error("Product type not found: {id}")]
    ProductTypeNotFound {
        /// The missing ID
        id: i64,
    },

    /// Referenced product does not exist
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The missing ID
        id: i64,
    },

    /// Referenced client does not exist
    #[error("Client not found: {id}")]
    ClientNotFound {
        /// The missing ID
        id: i64,
    },

    /// I/O error (binding or serving the HTTP listener)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Reclassifies a storage error raised while building or seeding the schema.
    ///
    /// Validation errors pass through unchanged.
    #[must_use]
    pub fn into_schema(self) -> Self {
        match self {
            Self::Database(source) => Self::Schema { source },
            other => other,
        }
    }

    /// Builds a `map_err` adapter that tags a storage error with the collection being read.
    pub(crate) fn read(collection: &'static str) -> impl FnOnce(DbErr) -> Self {
        move |source| Self::Read { collection, source }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_schema_wraps_database_errors() {
        let err = Error::Database(DbErr::Custom("boom".to_string())).into_schema();
        assert!(matches!(err, Error::Schema { .. }));
        assert_eq!(err.to_string(), "Schema error: Custom Error: boom");
    }

    #[test]
    fn test_into_schema_keeps_validation_errors() {
        let err = Error::EmptyField { field: "name" }.into_schema();
        assert!(matches!(err, Error::EmptyField { field: "name" }));
    }

    #[test]
    fn test_read_error_names_collection() {
        let err = Error::read("sales")(DbErr::Custom("gone".to_string()));
        assert!(err.to_string().starts_with("Failed to read sales:"));
    }
}
