#![doc(test(attr(deny(warnings))))]

//! Household Budget wires the catalog manager, advice engine and session
//! storage into a form-shaped API that a UI layer can drive directly.

pub mod errors;
pub mod form;
pub mod report;
pub mod settings;
pub mod utils;

pub use errors::{BudgetError, Result};
pub use form::BudgetForm;
pub use report::{render_report, BudgetReport, ReportStyle};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Household budget tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
