//! Maps stored preferences onto the engine, renderer and session store.

use std::fs;

use hb_config::Config;
use hb_core::{
    catalog_from_json, format::PlainCurrencyFormatter, standard_catalog, AdviceEngine,
    AdviceOptions, CoreError,
};
use hb_domain::CatalogSet;
use hb_storage_json::JsonSessionStorage;
use tracing::info;

use crate::errors::{BudgetError, Result};
use crate::form::BudgetForm;

/// Rejects preference values the advice engine cannot use.
pub fn validate(config: &Config) -> Result<()> {
    if let Some(limit) = config.essential_ratio_limit {
        if !(limit > 0.0 && limit <= 1.0) {
            return Err(BudgetError::InvalidInput(format!(
                "essential_ratio_limit must be within (0, 1], got {limit}"
            )));
        }
    }
    if config.session_key.trim().is_empty() {
        return Err(BudgetError::InvalidInput(
            "session_key must not be empty".into(),
        ));
    }
    Ok(())
}

/// Loads the configured catalog, falling back to the built-in one.
pub fn load_catalog(config: &Config) -> Result<CatalogSet> {
    let Some(path) = config.catalog_path.as_deref() else {
        return Ok(standard_catalog());
    };
    let json = fs::read_to_string(path).map_err(CoreError::from)?;
    let catalog = catalog_from_json(&json)?;
    info!(path = %path.display(), categories = catalog.len(), "loaded custom bill catalog");
    Ok(catalog)
}

pub fn advice_options(config: &Config, catalog: &CatalogSet) -> AdviceOptions {
    let mut options = AdviceOptions::default();
    if let Some(limit) = config.essential_ratio_limit {
        let essentials = catalog
            .iter()
            .filter(|category| category.essential)
            .map(|category| category.label.clone());
        options = options.with_essentials(essentials, limit);
    }
    options.emergency_mode = config.emergency_mode;
    options
}

pub fn advice_engine(config: &Config, catalog: &CatalogSet) -> Result<AdviceEngine> {
    validate(config)?;
    Ok(AdviceEngine::new(
        PlainCurrencyFormatter::new(config.currency_symbol.clone()),
        advice_options(config, catalog),
    ))
}

/// Opens the JSON session store under the configured directory.
pub fn session_storage(config: &Config) -> Result<JsonSessionStorage> {
    Ok(JsonSessionStorage::new(config.resolve_session_dir())?)
}

/// Reopens the form saved under the configured session key, or starts an empty one.
pub fn resume_form(config: &Config) -> Result<BudgetForm> {
    validate(config)?;
    let catalog = load_catalog(config)?;
    let storage = session_storage(config)?;
    match BudgetForm::load(&storage, &config.session_key, catalog.clone())? {
        Some(form) => Ok(form),
        None => Ok(BudgetForm::new(catalog)),
    }
}

pub fn persist_form(form: &BudgetForm, config: &Config) -> Result<()> {
    let storage = session_storage(config)?;
    form.save(&storage, &config.session_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn catalog_defaults_to_standard() {
        let catalog = load_catalog(&Config::default()).expect("standard catalog");
        assert_eq!(catalog, standard_catalog());
    }

    #[test]
    fn custom_catalog_is_read_from_disk() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"id":"rent","label":"Rent","default_amount":900.0,"essential":true}]"#,
        )
        .unwrap();
        let config = Config {
            catalog_path: Some(path),
            ..Config::default()
        };

        let catalog = load_catalog(&config).expect("custom catalog");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("rent").unwrap().default_amount, 900.0);
    }

    #[test]
    fn missing_catalog_file_is_a_storage_error() {
        let config = Config {
            catalog_path: Some("/definitely/not/here.json".into()),
            ..Config::default()
        };
        assert!(matches!(
            load_catalog(&config),
            Err(BudgetError::Core(CoreError::Storage(_)))
        ));
    }

    #[test]
    fn essentials_come_from_catalog_flags() {
        let config = Config {
            essential_ratio_limit: Some(0.5),
            emergency_mode: Some(true),
            ..Config::default()
        };
        let options = advice_options(&config, &standard_catalog());

        assert_eq!(options.essential_ratio_limit, Some(0.5));
        assert!(options.essential_labels.contains(&"Rent/Mortgage".to_string()));
        assert!(!options.essential_labels.contains(&"Entertainment".to_string()));
        assert_eq!(options.emergency_mode, Some(true));
    }

    #[test]
    fn default_config_adds_no_optional_checks() {
        let options = advice_options(&Config::default(), &standard_catalog());
        assert_eq!(options, AdviceOptions::default());
    }

    #[test]
    fn resume_form_round_trips_through_configured_dir() {
        let dir = tempdir().expect("tempdir");
        let config = Config {
            session_dir: Some(dir.path().join("sessions")),
            ..Config::default()
        };

        let mut form = resume_form(&config).expect("fresh form");
        assert_eq!(form.row_count(), 0);
        form.set_income("4200");
        let row = form.add_row().unwrap();
        form.select_category(row, "groceries").unwrap();
        persist_form(&form, &config).expect("persist form");

        let resumed = resume_form(&config).expect("resumed form");
        assert_eq!(resumed.income_raw(), "4200");
        assert!(resumed.manager().is_claimed("groceries"));
    }

    #[test]
    fn out_of_range_ratio_is_rejected() {
        let config = Config {
            essential_ratio_limit: Some(1.5),
            ..Config::default()
        };
        assert!(matches!(
            advice_engine(&config, &standard_catalog()),
            Err(BudgetError::InvalidInput(_))
        ));
    }
}
