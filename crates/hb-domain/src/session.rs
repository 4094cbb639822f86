//! Serializable form state for session persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw form values as the user typed them, ready to be stored as one blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSession {
    #[serde(default)]
    pub income_raw: String,
    #[serde(default)]
    pub partner_income_raw: String,
    #[serde(default)]
    pub rows: Vec<SavedRow>,
    #[serde(default = "Utc::now")]
    pub saved_at: DateTime<Utc>,
}

impl SavedSession {
    pub fn new(income_raw: impl Into<String>, partner_income_raw: impl Into<String>) -> Self {
        Self {
            income_raw: income_raw.into(),
            partner_income_raw: partner_income_raw.into(),
            rows: Vec::new(),
            saved_at: Utc::now(),
        }
    }

    pub fn with_row(mut self, category_id: Option<&str>, amount_raw: impl Into<String>) -> Self {
        self.rows.push(SavedRow {
            category_id: category_id.map(str::to_string),
            amount_raw: amount_raw.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub amount_raw: String,
}
