//! Normalisation of raw form values before they reach the core.

/// Parses a raw amount field. Blank, non-numeric, non-finite and negative
/// inputs all become `0.0`.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}
