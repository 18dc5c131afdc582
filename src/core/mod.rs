//! Core logic - framework-agnostic reads (projections) and seed writes.
//!
//! Every operation takes the storage handle explicitly, so tests can point each call
//! at its own in-memory store.

/// Clients and their linked products
pub mod client;
/// Incoming deliveries
pub mod delivery;
/// Products with their resolved type name
pub mod product;
/// Product categories
pub mod product_type;
/// Outgoing sales
pub mod sale;
/// Fixed sample dataset inserted at startup
pub mod seed;

pub use client::{ClientRecord, list_clients};
pub use delivery::{DeliveryRecord, list_deliveries};
pub use product::{ProductRecord, list_products};
pub use product_type::{ProductTypeRecord, list_product_types};
pub use sale::{SaleRecord, list_sales};
pub use seed::{seed, seed_if_empty};

/// How a projection loads the single related entity it reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelatedFetch {
    /// Load the related row in the same query with a LEFT JOIN
    #[default]
    Joined,
    /// Load the related row with one extra query per primary row
    PerRow,
}

/// Rejects empty or whitespace-only text, returning the trimmed value.
pub(crate) fn require_text(field: &'static str, value: &str) -> crate::errors::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::errors::Error::EmptyField { field });
    }
    Ok(trimmed.to_string())
}
