use std::sync::Mutex;

use hb_domain::{BillCategory, CatalogSet};
use hb_storage_json::JsonSessionStorage;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Mutex<Vec<TempDir>> = Mutex::new(Vec::new());

/// Creates a session store backed by a unique directory for each test.
#[allow(dead_code)]
pub fn temp_storage() -> JsonSessionStorage {
    let temp = TempDir::new().expect("create temp dir");
    let sessions = temp.path().join("sessions");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    JsonSessionStorage::new(sessions).expect("create json session storage")
}

/// Rent, Groceries and Utilities, in that order.
pub fn household_catalog() -> CatalogSet {
    CatalogSet::new(vec![
        BillCategory::new("rent", "Rent", 1200.0).essential(),
        BillCategory::new("groceries", "Groceries", 400.0).essential(),
        BillCategory::new("utilities", "Utilities", 150.0).essential(),
    ])
    .expect("valid catalog")
}
