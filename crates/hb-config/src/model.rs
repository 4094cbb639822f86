use serde::{de::Deserializer, Deserialize, Serialize};
use std::{fmt, path::PathBuf};

const DEFAULT_SESSION_KEY: &str = "household";

/// Stores user-configurable preferences for the calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    /// `Some(true)` asks for emergency-fund guidance with every report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_mode: Option<bool>,

    /// Share of income that essential bills may take before a warning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub essential_ratio_limit: Option<f64>,

    #[serde(default = "Config::default_session_key")]
    pub session_key: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for saved sessions. Defaults to the platform data dir.
    pub session_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional JSON file replacing the built-in bill catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency_symbol: Self::default_currency_symbol(),
            theme: Theme::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            emergency_mode: None,
            essential_ratio_limit: None,
            session_key: Self::default_session_key(),
            session_dir: None,
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_session_key() -> String {
        DEFAULT_SESSION_KEY.into()
    }

    pub fn resolve_session_dir(&self) -> PathBuf {
        if let Some(path) = &self.session_dir {
            return path.clone();
        }

        dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("household-budget")
            .join("sessions")
    }
}

/// Light or dark presentation preference.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().map(Theme::parse).unwrap_or_default())
    }
}
