//! Form-shaped adapter over the catalog manager.
//!
//! A UI layer translates its events (add row, pick category, type amount,
//! remove row, submit) into calls on [`BudgetForm`]; the form keeps the row
//! list and the raw input strings, while every category claim goes through
//! the [`BillCatalogManager`].

use hb_core::{
    format::CurrencyFormatter,
    parse_amount,
    storage::{session_warnings, SessionStorage},
    AdviceEngine, BillCatalogManager, SnapshotService,
};
use hb_domain::{BillCategory, BillRow, BudgetSnapshot, CatalogSet, RowId, SavedSession};
use tracing::{debug, info, warn};

use crate::errors::{BudgetError, Result};
use crate::report::BudgetReport;

#[derive(Debug, Clone)]
struct FormRow {
    row: BillRow,
    amount_raw: String,
}

#[derive(Debug, Clone)]
pub struct BudgetForm {
    manager: BillCatalogManager,
    rows: Vec<FormRow>,
    income_raw: String,
    partner_income_raw: String,
}

impl BudgetForm {
    pub fn new(catalog: CatalogSet) -> Self {
        Self {
            manager: BillCatalogManager::new(catalog),
            rows: Vec::new(),
            income_raw: String::new(),
            partner_income_raw: String::new(),
        }
    }

    pub fn catalog(&self) -> &CatalogSet {
        self.manager.catalog()
    }

    pub fn manager(&self) -> &BillCatalogManager {
        &self.manager
    }

    pub fn set_income(&mut self, raw: impl Into<String>) {
        self.income_raw = raw.into();
    }

    pub fn set_partner_income(&mut self, raw: impl Into<String>) {
        self.partner_income_raw = raw.into();
    }

    pub fn income_raw(&self) -> &str {
        &self.income_raw
    }

    pub fn partner_income_raw(&self) -> &str {
        &self.partner_income_raw
    }

    /// Whether another bill row would still have a category to pick.
    pub fn can_add_row(&self) -> bool {
        !self.manager.is_exhausted() && self.rows.len() < self.catalog().len()
    }

    pub fn add_row(&mut self) -> Result<RowId> {
        if !self.can_add_row() {
            return Err(BudgetError::CatalogExhausted);
        }
        let id = self.push_row(String::new());
        debug!(row = %id, rows = self.rows.len(), "added bill row");
        Ok(id)
    }

    pub fn rows(&self) -> impl Iterator<Item = &BillRow> + '_ {
        self.rows.iter().map(|entry| &entry.row)
    }

    pub fn row(&self, id: RowId) -> Option<&BillRow> {
        self.rows
            .iter()
            .find(|entry| entry.row.id == id)
            .map(|entry| &entry.row)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Categories the row's selection list should offer.
    pub fn options_for(&self, id: RowId) -> Result<Vec<&BillCategory>> {
        self.row(id).ok_or(BudgetError::UnknownRow(id))?;
        Ok(self.manager.selectable_categories(id))
    }

    /// Applies a selection change. An empty id clears the row's category.
    ///
    /// A rejected change leaves the row on its previous category. When the
    /// row has no amount yet, the catalog default is filled in.
    pub fn select_category(&mut self, id: RowId, category_id: &str) -> Result<()> {
        let index = self.index_of(id)?;
        let category_id = category_id.trim();
        if category_id.is_empty() {
            self.manager.release(id);
            self.rows[index].row.assigned_category_id = None;
            return Ok(());
        }

        self.manager.assign(id, category_id)?;
        let default_amount = self.manager.default_amount_for(category_id);
        let entry = &mut self.rows[index];
        entry.row.assigned_category_id = Some(category_id.to_string());
        if entry.amount_raw.trim().is_empty() && default_amount > 0.0 {
            entry.amount_raw = default_amount.to_string();
            entry.row.amount = default_amount;
        }
        Ok(())
    }

    pub fn set_amount(&mut self, id: RowId, raw: impl Into<String>) -> Result<()> {
        let index = self.index_of(id)?;
        let entry = &mut self.rows[index];
        entry.amount_raw = raw.into();
        entry.row.amount = parse_amount(&entry.amount_raw);
        Ok(())
    }

    /// Drops the row and frees its category for other rows.
    pub fn remove_row(&mut self, id: RowId) -> Result<()> {
        let index = self.index_of(id)?;
        self.manager.release(id);
        self.rows.remove(index);
        debug!(row = %id, rows = self.rows.len(), "removed bill row");
        Ok(())
    }

    pub fn snapshot(&self) -> BudgetSnapshot {
        let rows: Vec<BillRow> = self.rows.iter().map(|entry| entry.row.clone()).collect();
        let bills = SnapshotService::entries_from_rows(self.catalog(), &rows);
        SnapshotService::build(&self.income_raw, &self.partner_income_raw, bills)
    }

    /// Computes totals, advice and chart data for the current form state.
    pub fn submit<F: CurrencyFormatter>(&self, engine: &AdviceEngine<F>) -> BudgetReport {
        let snapshot = self.snapshot();
        let advice = engine.advise(snapshot.total_income, &snapshot.bills);
        let chart = SnapshotService::chart_series(&snapshot);
        info!(
            income = snapshot.total_income,
            expenses = snapshot.total_expenses,
            remaining = snapshot.remaining,
            advice = advice.len(),
            "budget submitted"
        );
        BudgetReport {
            snapshot,
            advice,
            chart,
        }
    }

    pub fn to_saved(&self) -> SavedSession {
        self.rows.iter().fold(
            SavedSession::new(self.income_raw.clone(), self.partner_income_raw.clone()),
            |session, entry| {
                session.with_row(
                    entry.row.assigned_category_id.as_deref(),
                    entry.amount_raw.clone(),
                )
            },
        )
    }

    /// Rebuilds a form by replaying every saved claim through the manager.
    ///
    /// Rows whose category is unknown or already claimed come back
    /// unassigned instead of corrupting the registry.
    pub fn restore(catalog: CatalogSet, saved: &SavedSession) -> Self {
        for warning in session_warnings(saved, &catalog) {
            warn!(%warning, "saved session needs repair");
        }

        let mut form = Self::new(catalog);
        form.income_raw = saved.income_raw.clone();
        form.partner_income_raw = saved.partner_income_raw.clone();
        for saved_row in &saved.rows {
            let id = form.push_row(saved_row.amount_raw.clone());
            let Some(category_id) = saved_row.category_id.as_deref() else {
                continue;
            };
            match form.manager.assign(id, category_id) {
                Ok(()) => {
                    if let Some(entry) = form.rows.last_mut() {
                        entry.row.assigned_category_id = Some(category_id.to_string());
                    }
                }
                Err(err) => {
                    warn!(row = %id, category_id, error = %err, "restored row left unassigned");
                }
            }
        }
        form
    }

    pub fn save(&self, storage: &dyn SessionStorage, key: &str) -> Result<()> {
        storage.save_session(key, &self.to_saved())?;
        debug!(key, "saved budget session");
        Ok(())
    }

    pub fn load(
        storage: &dyn SessionStorage,
        key: &str,
        catalog: CatalogSet,
    ) -> Result<Option<Self>> {
        let saved = storage.load_session(key)?;
        Ok(saved.map(|saved| Self::restore(catalog, &saved)))
    }

    fn push_row(&mut self, amount_raw: String) -> RowId {
        let mut row = BillRow::new();
        row.amount = parse_amount(&amount_raw);
        let id = row.id;
        self.rows.push(FormRow { row, amount_raw });
        id
    }

    fn index_of(&self, id: RowId) -> Result<usize> {
        self.rows
            .iter()
            .position(|entry| entry.row.id == id)
            .ok_or(BudgetError::UnknownRow(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hb_core::CoreError;

    fn catalog() -> CatalogSet {
        CatalogSet::new(vec![
            BillCategory::new("rent", "Rent", 1200.0),
            BillCategory::new("groceries", "Groceries", 400.0),
        ])
        .unwrap()
    }

    #[test]
    fn selecting_prefills_default_amount_once() {
        let mut form = BudgetForm::new(catalog());
        let row = form.add_row().unwrap();

        form.select_category(row, "rent").unwrap();
        assert_eq!(form.row(row).unwrap().amount, 1200.0);

        form.set_amount(row, "950").unwrap();
        form.select_category(row, "groceries").unwrap();
        assert_eq!(form.row(row).unwrap().amount, 950.0);
    }

    #[test]
    fn rejected_selection_keeps_previous_category() {
        let mut form = BudgetForm::new(catalog());
        let a = form.add_row().unwrap();
        let b = form.add_row().unwrap();
        form.select_category(a, "rent").unwrap();
        form.select_category(b, "groceries").unwrap();

        let err = form.select_category(b, "rent").unwrap_err();
        assert!(matches!(
            err,
            BudgetError::Core(CoreError::DuplicateCategory { .. })
        ));
        assert!(err.is_recoverable());
        assert_eq!(
            form.row(b).unwrap().assigned_category_id.as_deref(),
            Some("groceries")
        );
    }

    #[test]
    fn empty_selection_releases_the_claim() {
        let mut form = BudgetForm::new(catalog());
        let a = form.add_row().unwrap();
        form.select_category(a, "rent").unwrap();
        form.select_category(a, "").unwrap();

        assert!(form.row(a).unwrap().assigned_category_id.is_none());
        assert!(!form.manager().is_claimed("rent"));
    }

    #[test]
    fn rows_are_capped_by_catalog_size() {
        let mut form = BudgetForm::new(catalog());
        form.add_row().unwrap();
        let last = form.add_row().unwrap();
        assert!(matches!(form.add_row(), Err(BudgetError::CatalogExhausted)));

        form.remove_row(last).unwrap();
        assert!(form.can_add_row());
    }

    #[test]
    fn unknown_row_is_reported() {
        let mut form = BudgetForm::new(catalog());
        let stray = RowId::new();
        assert!(matches!(
            form.set_amount(stray, "1"),
            Err(BudgetError::UnknownRow(id)) if id == stray
        ));
    }
}
