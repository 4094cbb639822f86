use hb_domain::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Category `{category_id}` is already used by another bill")]
    DuplicateCategory { category_id: String },
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Storage(err.to_string())
    }
}

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        CoreError::Validation(err.to_string())
    }
}
