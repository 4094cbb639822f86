//! Builds budget snapshots and chart data from submitted form values.

use hb_domain::{BillEntry, BillRow, BudgetSnapshot, CatalogSet};
use serde::{Deserialize, Serialize};

use crate::input::parse_amount;

/// One `(label, value)` pair for the chart collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

pub struct SnapshotService;

impl SnapshotService {
    /// Sums both income fields and the given bills.
    pub fn build(
        income_raw: &str,
        partner_income_raw: &str,
        bills: Vec<BillEntry>,
    ) -> BudgetSnapshot {
        let total_income = parse_amount(income_raw) + parse_amount(partner_income_raw);
        BudgetSnapshot::new(total_income, bills)
    }

    /// Turns rows into bill entries, keeping only rows that carry both a
    /// category and a positive amount. Row order is preserved.
    pub fn entries_from_rows(catalog: &CatalogSet, rows: &[BillRow]) -> Vec<BillEntry> {
        rows.iter()
            .filter(|row| row.amount > 0.0)
            .filter_map(|row| {
                let category_id = row.assigned_category_id.as_deref()?;
                let category = catalog.get(category_id)?;
                Some(BillEntry::new(category.label.clone(), row.amount))
            })
            .collect()
    }

    pub fn chart_series(snapshot: &BudgetSnapshot) -> Vec<ChartPoint> {
        snapshot
            .bills
            .iter()
            .map(|bill| ChartPoint {
                label: bill.category.clone(),
                value: bill.amount,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hb_domain::BillCategory;

    #[test]
    fn build_sums_both_incomes() {
        let snapshot = SnapshotService::build(
            "2500",
            "500",
            vec![BillEntry::new("Rent", 1200.0), BillEntry::new("Utilities", 150.0)],
        );
        assert_eq!(snapshot.total_income, 3000.0);
        assert_eq!(snapshot.total_expenses, 1350.0);
        assert_eq!(snapshot.remaining, 1650.0);
    }

    #[test]
    fn invalid_income_counts_as_zero() {
        let snapshot = SnapshotService::build("lots", "-20", Vec::new());
        assert_eq!(snapshot.total_income, 0.0);
        assert_eq!(snapshot.remaining, 0.0);
    }

    #[test]
    fn entries_skip_incomplete_rows() {
        let catalog = CatalogSet::new(vec![
            BillCategory::new("rent", "Rent", 0.0),
            BillCategory::new("food", "Groceries", 0.0),
        ])
        .unwrap();
        let mut rent = BillRow::new();
        rent.assigned_category_id = Some("rent".into());
        rent.amount = 900.0;
        let mut unassigned = BillRow::new();
        unassigned.amount = 50.0;
        let mut empty_amount = BillRow::new();
        empty_amount.assigned_category_id = Some("food".into());

        let entries = SnapshotService::entries_from_rows(&catalog, &[rent, unassigned, empty_amount]);
        assert_eq!(entries, vec![BillEntry::new("Rent", 900.0)]);
    }

    #[test]
    fn chart_series_mirrors_bill_order() {
        let snapshot = BudgetSnapshot::new(
            100.0,
            vec![BillEntry::new("B", 2.0), BillEntry::new("A", 1.0)],
        );
        let series = SnapshotService::chart_series(&snapshot);
        let labels: Vec<_> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["B", "A"]);
    }
}
