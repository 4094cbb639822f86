//! Submitted budget results and their text rendering for export.

use std::{fmt::Write, io::IsTerminal};

use colored::{Color, Colorize};
use hb_config::{Config, Theme};
use hb_core::{
    format::{CurrencyFormatter, PlainCurrencyFormatter},
    ChartPoint,
};
use hb_domain::{Advice, BudgetSnapshot, Severity};
use serde::Serialize;

use crate::errors::Result;

const LABEL_WIDTH: usize = 18;
const AMOUNT_WIDTH: usize = 14;

/// Everything the UI needs after a submit: totals, advice and chart pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetReport {
    pub snapshot: BudgetSnapshot,
    pub advice: Vec<Advice>,
    pub chart: Vec<ChartPoint>,
}

impl BudgetReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn has_critical_advice(&self) -> bool {
        self.advice
            .iter()
            .any(|advice| advice.severity == Severity::Critical)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportStyle {
    pub currency_symbol: String,
    pub use_color: bool,
    pub theme: Theme,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            currency_symbol: Config::default_currency_symbol(),
            use_color: false,
            theme: Theme::default(),
        }
    }
}

impl ReportStyle {
    /// Derives the style from preferences and the current terminal.
    pub fn detect(config: &Config) -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self {
            currency_symbol: config.currency_symbol.clone(),
            use_color: stdout_tty && config.ui_color_enabled && !no_color,
            theme: config.theme,
        }
    }

    fn severity_color(&self, severity: Severity) -> Color {
        match (self.theme, severity) {
            (Theme::Light, Severity::Critical) => Color::Red,
            (Theme::Light, Severity::Warning) => Color::Yellow,
            (Theme::Light, Severity::Positive) => Color::Green,
            (Theme::Light, Severity::Info) => Color::Blue,
            (Theme::Dark, Severity::Critical) => Color::BrightRed,
            (Theme::Dark, Severity::Warning) => Color::BrightYellow,
            (Theme::Dark, Severity::Positive) => Color::BrightGreen,
            (Theme::Dark, Severity::Info) => Color::BrightCyan,
        }
    }

    fn tag(&self, severity: Severity) -> String {
        let tag = format!("[{severity}]");
        if self.use_color {
            tag.color(self.severity_color(severity)).bold().to_string()
        } else {
            tag
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_color {
            text.bold().underline().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Renders the report as plain text (optionally ANSI-colored) for display or export.
pub fn render_report(report: &BudgetReport, style: &ReportStyle) -> String {
    let formatter = PlainCurrencyFormatter::new(style.currency_symbol.clone());
    let snapshot = &report.snapshot;
    let mut out = String::new();

    let _ = writeln!(out, "{}", style.heading("Budget Summary"));
    for (label, amount) in [
        ("Total income", snapshot.total_income),
        ("Total expenses", snapshot.total_expenses),
        ("Remaining", snapshot.remaining),
    ] {
        let _ = writeln!(
            out,
            "{label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}",
            formatter.format_amount(amount)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style.heading("Bills"));
    if snapshot.bills.is_empty() {
        let _ = writeln!(out, "  (no bills entered)");
    }
    for bill in &snapshot.bills {
        let _ = writeln!(
            out,
            "  {:<width$}{:>AMOUNT_WIDTH$}",
            bill.category,
            formatter.format_amount(bill.amount),
            width = LABEL_WIDTH - 2
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style.heading("Advice"));
    for advice in &report.advice {
        let _ = writeln!(out, "  {} {}", style.tag(advice.severity), advice.message);
    }
    out
}
