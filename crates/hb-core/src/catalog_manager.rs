//! Bill-slot allocation: at most one row per catalog category.

use std::collections::HashMap;

use hb_domain::{BillCategory, CatalogSet, RowId};
use tracing::{debug, warn};

use crate::CoreError;

/// Owns the catalog and the registry of categories claimed by rows.
///
/// Every mutation keeps the registry and its reverse index in lockstep, so no
/// two rows ever hold the same category and a reassignment swaps claims in a
/// single call.
#[derive(Debug, Clone)]
pub struct BillCatalogManager {
    catalog: CatalogSet,
    claims: HashMap<String, RowId>,
    by_row: HashMap<RowId, String>,
}

impl BillCatalogManager {
    pub fn new(catalog: CatalogSet) -> Self {
        Self {
            catalog,
            claims: HashMap::new(),
            by_row: HashMap::new(),
        }
    }

    pub fn catalog(&self) -> &CatalogSet {
        &self.catalog
    }

    pub fn category(&self, category_id: &str) -> Option<&BillCategory> {
        self.catalog.get(category_id)
    }

    /// Lists the categories `row` may pick: everything unclaimed plus the
    /// row's own current selection, in catalog order.
    pub fn selectable_categories(&self, row: RowId) -> Vec<&BillCategory> {
        self.catalog
            .iter()
            .filter(|category| match self.claims.get(&category.id) {
                None => true,
                Some(owner) => *owner == row,
            })
            .collect()
    }

    /// Claims `category_id` for `row`, releasing whatever the row held before.
    ///
    /// Fails without touching any state when another row already holds the
    /// category or the id is not part of the catalog.
    pub fn assign(&mut self, row: RowId, category_id: &str) -> Result<(), CoreError> {
        if !self.catalog.contains(category_id) {
            return Err(CoreError::CategoryNotFound(category_id.to_string()));
        }
        if let Some(owner) = self.claims.get(category_id) {
            if *owner == row {
                return Ok(());
            }
            warn!(%row, holder = %owner, category_id, "rejected duplicate category claim");
            return Err(CoreError::DuplicateCategory {
                category_id: category_id.to_string(),
            });
        }

        if let Some(previous) = self.by_row.insert(row, category_id.to_string()) {
            self.claims.remove(&previous);
            debug!(%row, from = %previous, to = category_id, "reassigned bill row");
        } else {
            debug!(%row, category_id, "assigned bill row");
        }
        self.claims.insert(category_id.to_string(), row);
        Ok(())
    }

    /// Drops the row's claim, if any. Calling it twice is harmless.
    pub fn release(&mut self, row: RowId) {
        if let Some(previous) = self.by_row.remove(&row) {
            self.claims.remove(&previous);
            debug!(%row, category_id = %previous, "released bill row");
        }
    }

    /// True once every catalog category is claimed.
    pub fn is_exhausted(&self) -> bool {
        self.claims.len() == self.catalog.len()
    }

    /// Suggested pre-fill amount; unknown ids yield `0.0`.
    pub fn default_amount_for(&self, category_id: &str) -> f64 {
        self.catalog
            .get(category_id)
            .map(|category| category.default_amount)
            .unwrap_or(0.0)
    }

    pub fn assigned_to(&self, row: RowId) -> Option<&BillCategory> {
        self.by_row
            .get(&row)
            .and_then(|category_id| self.catalog.get(category_id))
    }

    pub fn holder_of(&self, category_id: &str) -> Option<RowId> {
        self.claims.get(category_id).copied()
    }

    pub fn is_claimed(&self, category_id: &str) -> bool {
        self.claims.contains_key(category_id)
    }

    pub fn claimed_count(&self) -> usize {
        self.claims.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hb_domain::BillCategory;

    fn three_categories() -> CatalogSet {
        CatalogSet::new(vec![
            BillCategory::new("rent", "Rent", 1200.0),
            BillCategory::new("groceries", "Groceries", 400.0),
            BillCategory::new("utilities", "Utilities", 150.0),
        ])
        .expect("valid catalog")
    }

    fn ids(categories: &[&BillCategory]) -> Vec<String> {
        categories.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn unassigned_row_sees_every_unclaimed_category() {
        let mut manager = BillCatalogManager::new(three_categories());
        let a = RowId::new();
        let b = RowId::new();
        manager.assign(a, "groceries").unwrap();

        assert_eq!(ids(&manager.selectable_categories(b)), ["rent", "utilities"]);
    }

    #[test]
    fn row_keeps_its_own_selection_in_catalog_order() {
        let mut manager = BillCatalogManager::new(three_categories());
        let a = RowId::new();
        manager.assign(a, "groceries").unwrap();

        assert_eq!(
            ids(&manager.selectable_categories(a)),
            ["rent", "groceries", "utilities"]
        );
    }

    #[test]
    fn duplicate_claim_is_rejected_without_mutation() {
        let mut manager = BillCatalogManager::new(three_categories());
        let a = RowId::new();
        let b = RowId::new();
        manager.assign(a, "rent").unwrap();
        manager.assign(b, "utilities").unwrap();

        let err = manager.assign(b, "rent").expect_err("rent is taken");
        assert!(
            matches!(err, CoreError::DuplicateCategory { ref category_id } if category_id == "rent"),
            "unexpected error: {err:?}"
        );
        assert_eq!(manager.holder_of("rent"), Some(a));
        assert_eq!(manager.assigned_to(b).map(|c| c.id.as_str()), Some("utilities"));
        assert_eq!(manager.claimed_count(), 2);
    }

    #[test]
    fn reassigning_the_same_category_is_a_no_op() {
        let mut manager = BillCatalogManager::new(three_categories());
        let a = RowId::new();
        manager.assign(a, "rent").unwrap();
        manager.assign(a, "rent").expect("same claim succeeds");
        assert_eq!(manager.claimed_count(), 1);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut manager = BillCatalogManager::new(three_categories());
        let err = manager.assign(RowId::new(), "yacht").expect_err("not in catalog");
        assert!(matches!(err, CoreError::CategoryNotFound(_)));
        assert_eq!(manager.claimed_count(), 0);
    }

    #[test]
    fn default_amount_falls_back_to_zero() {
        let manager = BillCatalogManager::new(three_categories());
        assert_eq!(manager.default_amount_for("rent"), 1200.0);
        assert_eq!(manager.default_amount_for("unknown"), 0.0);
    }

    #[test]
    fn empty_catalog_is_exhausted_immediately() {
        let manager = BillCatalogManager::new(CatalogSet::new(Vec::new()).unwrap());
        assert!(manager.is_exhausted());
    }
}
