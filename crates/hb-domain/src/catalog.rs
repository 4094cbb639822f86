//! Domain types describing the fixed catalog of bill categories.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable catalog entry offered in a bill row's selection list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillCategory {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub default_amount: f64,
    #[serde(default)]
    pub essential: bool,
}

impl BillCategory {
    pub fn new(id: impl Into<String>, label: impl Into<String>, default_amount: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            default_amount: default_amount.max(0.0),
            essential: false,
        }
    }

    /// Marks the category as an essential bill (housing, utilities, food...).
    pub fn essential(mut self) -> Self {
        self.essential = true;
        self
    }
}

/// Ordered, duplicate-free set of bill categories fixed for a session.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct CatalogSet {
    entries: Vec<BillCategory>,
}

impl CatalogSet {
    /// Builds a catalog, rejecting entries that reuse an id.
    pub fn new(entries: Vec<BillCategory>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.id.trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[BillCategory] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BillCategory> {
        self.entries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&BillCategory> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for CatalogSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<BillCategory>::deserialize(deserializer)?;
        CatalogSet::new(entries).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a CatalogSet {
    type Item = &'a BillCategory;
    type IntoIter = std::slice::Iter<'a, BillCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    EmptyId,
    DuplicateId(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EmptyId => f.write_str("catalog entry id must not be empty"),
            CatalogError::DuplicateId(id) => write!(f, "catalog id `{id}` appears more than once"),
        }
    }
}

impl std::error::Error for CatalogError {}
