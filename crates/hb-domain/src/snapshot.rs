//! Totals derived from a submitted form.

use serde::{Deserialize, Serialize};

use crate::common::Amounted;

/// A finalized `{category, amount}` pair handed to the advice engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillEntry {
    pub category: String,
    pub amount: f64,
}

impl BillEntry {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

impl Amounted for BillEntry {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Income, bills and balance computed at submit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub total_income: f64,
    pub bills: Vec<BillEntry>,
    pub total_expenses: f64,
    pub remaining: f64,
}

impl BudgetSnapshot {
    pub fn new(total_income: f64, bills: Vec<BillEntry>) -> Self {
        let total_expenses: f64 = bills.iter().map(Amounted::amount).sum();
        Self {
            total_income,
            remaining: total_income - total_expenses,
            total_expenses,
            bills,
        }
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining < 0.0
    }
}
