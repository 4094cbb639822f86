use std::result::Result as StdResult;

use hb_config::ConfigError;
use hb_core::CoreError;
use hb_domain::RowId;
use thiserror::Error;

/// Unified error type for the form, configuration and storage layers.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Every bill category is already in use")]
    CatalogExhausted,
    #[error("Unknown bill row: {0}")]
    UnknownRow(RowId),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

impl BudgetError {
    /// True for rejections the UI should surface and recover from locally.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BudgetError::Core(CoreError::DuplicateCategory { .. })
                | BudgetError::Core(CoreError::CategoryNotFound(_))
                | BudgetError::CatalogExhausted
                | BudgetError::UnknownRow(_)
                | BudgetError::InvalidInput(_)
        )
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::Core(CoreError::Serde(err.to_string()))
    }
}
