use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use hb_core::{storage::SessionStorage, CoreError};
use hb_domain::SavedSession;

const SESSION_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON blobs, one file per session key.
#[derive(Debug, Clone)]
pub struct JsonSessionStorage {
    sessions_dir: PathBuf,
}

impl JsonSessionStorage {
    pub fn new(sessions_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&sessions_dir)?;
        Ok(Self { sessions_dir })
    }

    pub fn sessions_dir(&self) -> &Path {
        &self.sessions_dir
    }

    pub fn session_path(&self, key: &str) -> PathBuf {
        self.sessions_dir
            .join(format!("{}.{}", canonical_key(key), SESSION_EXTENSION))
    }
}

impl SessionStorage for JsonSessionStorage {
    fn save_session(&self, key: &str, session: &SavedSession) -> Result<(), CoreError> {
        let path = self.session_path(key);
        let json = serde_json::to_string_pretty(session)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load_session(&self, key: &str) -> Result<Option<SavedSession>, CoreError> {
        let path = self.session_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        serde_json::from_str(&data)
            .map(Some)
            .map_err(|err| CoreError::Serde(err.to_string()))
    }

    fn clear_session(&self, key: &str) -> Result<(), CoreError> {
        let path = self.session_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn list_sessions(&self) -> Result<Vec<String>, CoreError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.sessions_dir)? {
            let path = entry?.path();
            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(SESSION_EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "session".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    tmp.set_extension(format!("{SESSION_EXTENSION}.{TMP_SUFFIX}"));
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), CoreError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::canonical_key;

    #[test]
    fn keys_are_sanitized_for_file_names() {
        assert_eq!(canonical_key("Household Budget"), "household_budget");
        assert_eq!(canonical_key("../etc"), "___etc");
        assert_eq!(canonical_key("  "), "session");
        assert_eq!(canonical_key("june-2025"), "june-2025");
    }
}
