//! Threshold-driven advice derived from income and finalized bills.
//!
//! Rules run in a fixed order: exactly one overspend tier, then one notice per
//! over-concentrated category, then any optional checks, and finally the
//! disclaimer. The engine never mutates its inputs and rounds only while
//! building message text.

use std::collections::HashSet;

use hb_domain::{Advice, AdviceKind, BillEntry, Severity};
use serde::{Deserialize, Serialize};

use crate::format::{CurrencyFormatter, PlainCurrencyFormatter};

/// Share of income that must be left over to count as a healthy buffer.
pub const SAVINGS_BUFFER_RATIO: f64 = 0.10;
/// Share of total spending above which a single category is flagged.
pub const CONCENTRATION_RATIO: f64 = 0.40;

pub const DISCLAIMER: &str = "This advice is for general information only and does not replace consultation with a qualified financial professional.";

const EMERGENCY_FUND_ADVICE: &str = "In emergency mode, we recommend putting aside at least 20% of your income for unexpected expenses.";
const PLANNING_AHEAD_ADVICE: &str = "Congratulations on planning ahead! Consider setting some money aside for future savings or investing opportunities.";

/// Optional checks layered on top of the standard rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdviceOptions {
    /// Flag essential spending above this share of income (e.g. `0.5`).
    #[serde(default)]
    pub essential_ratio_limit: Option<f64>,
    /// Labels of categories counted as essential.
    #[serde(default)]
    pub essential_labels: Vec<String>,
    /// `Some(true)` adds emergency-fund guidance, `Some(false)` the planning-ahead note.
    #[serde(default)]
    pub emergency_mode: Option<bool>,
}

impl AdviceOptions {
    pub fn with_essentials<I, S>(mut self, labels: I, limit: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.essential_labels = labels.into_iter().map(Into::into).collect();
        self.essential_ratio_limit = Some(limit);
        self
    }

    pub fn with_emergency_mode(mut self, enabled: bool) -> Self {
        self.emergency_mode = Some(enabled);
        self
    }
}

/// Summed spending for one category label.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub label: String,
    pub amount: f64,
}

/// Groups bill amounts by label, keeping first-seen order.
pub fn category_totals(bills: &[BillEntry]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for bill in bills {
        match totals.iter_mut().find(|total| total.label == bill.category) {
            Some(total) => total.amount += bill.amount,
            None => totals.push(CategoryTotal {
                label: bill.category.clone(),
                amount: bill.amount,
            }),
        }
    }
    totals
}

/// Computes advice with the default engine and no optional checks.
pub fn compute_advice(total_income: f64, bills: &[BillEntry]) -> Vec<Advice> {
    let engine: AdviceEngine = AdviceEngine::default();
    engine.advise(total_income, bills)
}

pub struct AdviceEngine<F: CurrencyFormatter = PlainCurrencyFormatter> {
    formatter: F,
    options: AdviceOptions,
}

impl Default for AdviceEngine {
    fn default() -> Self {
        Self::new(PlainCurrencyFormatter::default(), AdviceOptions::default())
    }
}

impl<F: CurrencyFormatter> AdviceEngine<F> {
    pub fn new(formatter: F, options: AdviceOptions) -> Self {
        Self { formatter, options }
    }

    pub fn options(&self) -> &AdviceOptions {
        &self.options
    }

    /// Produces the ordered advice list for the given income and bills.
    ///
    /// Income of zero or less still yields output; callers should treat it as
    /// degenerate.
    pub fn advise(&self, total_income: f64, bills: &[BillEntry]) -> Vec<Advice> {
        let total_expenses: f64 = bills.iter().map(|bill| bill.amount).sum();
        let remaining = total_income - total_expenses;

        let mut advice = vec![self.overspend_tier(total_income, remaining)];
        advice.extend(self.concentration_notices(bills, total_expenses));
        advice.extend(self.essential_ratio_notice(total_income, bills));
        advice.extend(self.emergency_notice());
        advice.push(Advice::new(
            AdviceKind::Disclaimer,
            Severity::Info,
            DISCLAIMER,
        ));
        advice
    }

    fn overspend_tier(&self, total_income: f64, remaining: f64) -> Advice {
        if remaining < 0.0 {
            Advice::new(
                AdviceKind::Overspending,
                Severity::Critical,
                format!(
                    "You are overspending by {}. Consider cutting unnecessary expenses or increasing your income.",
                    self.formatter.format_amount(remaining.abs())
                ),
            )
        } else if total_income > 0.0 && remaining < total_income * SAVINGS_BUFFER_RATIO {
            Advice::new(
                AdviceKind::LimitedSavings,
                Severity::Warning,
                format!(
                    "Only {} is left after bills, which means limited savings potential. You might need to cut back on some discretionary spending.",
                    self.formatter.format_amount(remaining)
                ),
            )
        } else {
            Advice::new(
                AdviceKind::HealthyBuffer,
                Severity::Positive,
                format!(
                    "Great job staying within your budget: you keep a healthy buffer of {}.",
                    self.formatter.format_amount(remaining)
                ),
            )
        }
    }

    fn concentration_notices(&self, bills: &[BillEntry], total_expenses: f64) -> Vec<Advice> {
        let threshold = total_expenses * CONCENTRATION_RATIO;
        category_totals(bills)
            .into_iter()
            .filter(|total| total.amount > threshold)
            .map(|total| {
                Advice::new(
                    AdviceKind::CategoryConcentration,
                    Severity::Warning,
                    format!(
                        "Category {} accounts for over {:.0}% of spending ({}).",
                        total.label,
                        CONCENTRATION_RATIO * 100.0,
                        self.formatter.format_amount(total.amount)
                    ),
                )
            })
            .collect()
    }

    fn essential_ratio_notice(&self, total_income: f64, bills: &[BillEntry]) -> Option<Advice> {
        let limit = self.options.essential_ratio_limit?;
        if total_income <= 0.0 {
            return None;
        }
        let essentials: HashSet<&str> = self
            .options
            .essential_labels
            .iter()
            .map(String::as_str)
            .collect();
        let essential_total: f64 = bills
            .iter()
            .filter(|bill| essentials.contains(bill.category.as_str()))
            .map(|bill| bill.amount)
            .sum();
        if essential_total > total_income * limit {
            Some(Advice::new(
                AdviceKind::EssentialRatio,
                Severity::Warning,
                format!(
                    "Essential bills take over {:.0}% of income ({}). Look for cheaper housing, utility or food options.",
                    limit * 100.0,
                    self.formatter.format_amount(essential_total)
                ),
            ))
        } else {
            None
        }
    }

    fn emergency_notice(&self) -> Option<Advice> {
        match self.options.emergency_mode? {
            true => Some(Advice::new(
                AdviceKind::EmergencyFund,
                Severity::Info,
                EMERGENCY_FUND_ADVICE,
            )),
            false => Some(Advice::new(
                AdviceKind::PlanningAhead,
                Severity::Positive,
                PLANNING_AHEAD_ADVICE,
            )),
        }
    }
}
