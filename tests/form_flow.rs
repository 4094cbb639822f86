mod common;

use common::household_catalog;
use hb_core::{AdviceEngine, CoreError, DISCLAIMER};
use hb_domain::{AdviceKind, Severity};
use household_budget::{render_report, BudgetError, BudgetForm, ReportStyle};

fn engine() -> AdviceEngine {
    AdviceEngine::default()
}

#[test]
fn three_bill_household_keeps_a_healthy_buffer() {
    let mut form = BudgetForm::new(household_catalog());
    form.set_income("2500");
    form.set_partner_income("500");
    for (id, amount) in [("rent", "1200"), ("groceries", "400"), ("utilities", "150")] {
        let row = form.add_row().expect("add row");
        form.select_category(row, id).expect("select category");
        form.set_amount(row, amount).expect("set amount");
    }

    let report = form.submit(&engine());

    assert_eq!(report.snapshot.total_income, 3000.0);
    assert_eq!(report.snapshot.total_expenses, 1750.0);
    assert_eq!(report.snapshot.remaining, 1250.0);
    assert_eq!(report.advice[0].kind, AdviceKind::HealthyBuffer);
    assert!(report.advice[0].message.contains("healthy buffer of $1250.00"));
    assert_eq!(report.advice.last().unwrap().message, DISCLAIMER);

    let labels: Vec<_> = report.chart.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["Rent", "Groceries", "Utilities"]);
}

#[test]
fn remaining_exactly_ten_percent_is_healthy() {
    let mut form = BudgetForm::new(household_catalog());
    form.set_income("1000");
    let row = form.add_row().unwrap();
    form.select_category(row, "rent").unwrap();
    form.set_amount(row, "900").unwrap();

    let report = form.submit(&engine());
    assert_eq!(report.snapshot.remaining, 100.0);
    assert_eq!(report.advice[0].kind, AdviceKind::HealthyBuffer);
}

#[test]
fn overspending_is_critical_and_flags_concentration() {
    let mut form = BudgetForm::new(household_catalog());
    form.set_income("1000");
    let row = form.add_row().unwrap();
    form.select_category(row, "rent").unwrap();

    // pre-filled with the catalog default of 1200
    let report = form.submit(&engine());

    assert_eq!(report.advice[0].severity, Severity::Critical);
    assert!(report.advice[0].message.contains("$200.00"));
    assert_eq!(report.advice[1].kind, AdviceKind::CategoryConcentration);
    assert!(report.advice[1].message.contains("Rent"));
    assert!(report.has_critical_advice());

    let text = render_report(&report, &ReportStyle::default());
    assert!(text.contains("[critical]"));
}

#[test]
fn duplicate_selection_leaves_other_row_unassigned() {
    let mut form = BudgetForm::new(household_catalog());
    let a = form.add_row().unwrap();
    let b = form.add_row().unwrap();

    form.select_category(a, "rent").unwrap();
    let err = form.select_category(b, "rent").unwrap_err();

    assert!(matches!(err, BudgetError::Core(CoreError::DuplicateCategory { .. })));
    assert!(form.row(b).unwrap().assigned_category_id.is_none());
    assert_eq!(form.row(a).unwrap().assigned_category_id.as_deref(), Some("rent"));
}

#[test]
fn options_shrink_as_rows_claim_categories() {
    let mut form = BudgetForm::new(household_catalog());
    let a = form.add_row().unwrap();
    let b = form.add_row().unwrap();
    form.select_category(a, "groceries").unwrap();

    let ids = |form: &BudgetForm, row| -> Vec<String> {
        form.options_for(row)
            .unwrap()
            .into_iter()
            .map(|c| c.id.clone())
            .collect()
    };
    assert_eq!(ids(&form, a), ["rent", "groceries", "utilities"]);
    assert_eq!(ids(&form, b), ["rent", "utilities"]);

    form.remove_row(a).unwrap();
    assert_eq!(ids(&form, b), ["rent", "groceries", "utilities"]);
}

#[test]
fn full_catalog_blocks_new_rows() {
    let mut form = BudgetForm::new(household_catalog());
    for id in ["rent", "groceries", "utilities"] {
        let row = form.add_row().unwrap();
        form.select_category(row, id).unwrap();
    }

    assert!(form.manager().is_exhausted());
    assert!(!form.can_add_row());
    assert!(matches!(form.add_row(), Err(BudgetError::CatalogExhausted)));
}

#[test]
fn invalid_amounts_count_as_zero() {
    let mut form = BudgetForm::new(household_catalog());
    form.set_income("abc");
    let row = form.add_row().unwrap();
    form.select_category(row, "utilities").unwrap();
    form.set_amount(row, "-75").unwrap();

    let snapshot = form.snapshot();
    assert_eq!(snapshot.total_income, 0.0);
    assert!(snapshot.bills.is_empty());
}
