use std::{
    collections::{BTreeMap, HashSet},
    sync::Mutex,
};

use hb_domain::{CatalogSet, SavedSession};

use crate::CoreError;

/// Key-value persistence for a single form's raw state.
pub trait SessionStorage: Send + Sync {
    fn save_session(&self, key: &str, session: &SavedSession) -> Result<(), CoreError>;
    fn load_session(&self, key: &str) -> Result<Option<SavedSession>, CoreError>;
    fn clear_session(&self, key: &str) -> Result<(), CoreError>;
    fn list_sessions(&self) -> Result<Vec<String>, CoreError>;
}

/// Process-local storage, mostly useful for tests and previews.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    sessions: Mutex<BTreeMap<String, SavedSession>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, SavedSession>>, CoreError> {
        self.sessions
            .lock()
            .map_err(|_| CoreError::Storage("session store lock poisoned".into()))
    }
}

impl SessionStorage for MemorySessionStorage {
    fn save_session(&self, key: &str, session: &SavedSession) -> Result<(), CoreError> {
        self.lock()?.insert(key.to_string(), session.clone());
        Ok(())
    }

    fn load_session(&self, key: &str) -> Result<Option<SavedSession>, CoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn clear_session(&self, key: &str) -> Result<(), CoreError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn list_sessions(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}

/// Detects saved rows that cannot be replayed cleanly against `catalog`.
pub fn session_warnings(session: &SavedSession, catalog: &CatalogSet) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();
    for (index, row) in session.rows.iter().enumerate() {
        let Some(category_id) = row.category_id.as_deref() else {
            continue;
        };
        if !catalog.contains(category_id) {
            warnings.push(format!(
                "row {index} references unknown category `{category_id}`"
            ));
        } else if !seen.insert(category_id) {
            warnings.push(format!(
                "row {index} repeats category `{category_id}`"
            ));
        }
    }
    warnings
}
