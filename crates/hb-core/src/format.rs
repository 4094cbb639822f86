/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Two-decimal formatter with a leading symbol and no grouping.
///
/// Rounding happens here and only here; callers keep full precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainCurrencyFormatter {
    pub symbol: String,
}

impl PlainCurrencyFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

impl Default for PlainCurrencyFormatter {
    fn default() -> Self {
        Self::new("$")
    }
}

impl CurrencyFormatter for PlainCurrencyFormatter {
    fn format_amount(&self, amount: f64) -> String {
        let rounded = format!("{:.2}", amount.abs());
        // -0.001 rounds to 0.00 and should not print a sign
        if amount < 0.0 && rounded != "0.00" {
            format!("-{}{}", self.symbol, rounded)
        } else {
            format!("{}{}", self.symbol, rounded)
        }
    }
}
