//! Bill rows as the UI layer sees them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Amounted;

/// Opaque handle identifying one bill row for the lifetime of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(Uuid);

impl RowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One visible bill line: an optional catalog claim plus a parsed amount.
///
/// The claim itself is mediated by the catalog manager; this struct only
/// mirrors what the manager accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillRow {
    pub id: RowId,
    pub assigned_category_id: Option<String>,
    pub amount: f64,
}

impl BillRow {
    pub fn new() -> Self {
        Self {
            id: RowId::new(),
            assigned_category_id: None,
            amount: 0.0,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_category_id.is_some()
    }
}

impl Default for BillRow {
    fn default() -> Self {
        Self::new()
    }
}

impl Amounted for BillRow {
    fn amount(&self) -> f64 {
        self.amount
    }
}
