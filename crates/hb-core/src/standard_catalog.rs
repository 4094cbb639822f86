//! Built-in bill catalog used when no custom catalog is supplied.

use hb_domain::{BillCategory, CatalogSet};
use once_cell::sync::Lazy;

use crate::CoreError;

static STANDARD_CATALOG: Lazy<CatalogSet> = Lazy::new(|| {
    CatalogSet::new(vec![
        BillCategory::new("rent", "Rent/Mortgage", 1200.0).essential(),
        BillCategory::new("utilities", "Utilities", 150.0).essential(),
        BillCategory::new("groceries", "Groceries", 400.0).essential(),
        BillCategory::new("transportation", "Transportation", 200.0).essential(),
        BillCategory::new("insurance", "Insurance", 180.0).essential(),
        BillCategory::new("phone_internet", "Phone & Internet", 90.0),
        BillCategory::new("subscriptions", "Subscriptions", 40.0),
        BillCategory::new("debt", "Debt Payments", 250.0),
        BillCategory::new("childcare", "Childcare", 600.0).essential(),
        BillCategory::new("entertainment", "Entertainment", 100.0),
    ])
    .unwrap_or_else(|err| panic!("standard catalog is malformed: {err}"))
});

/// Returns a copy of the built-in catalog.
pub fn standard_catalog() -> CatalogSet {
    STANDARD_CATALOG.clone()
}

/// Parses a custom catalog from a JSON array of categories.
pub fn catalog_from_json(json: &str) -> Result<CatalogSet, CoreError> {
    let entries: Vec<BillCategory> =
        serde_json::from_str(json).map_err(|err| CoreError::Serde(err.to_string()))?;
    Ok(CatalogSet::new(entries)?)
}
