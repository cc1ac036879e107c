//! Tests for the GED configuration system.

use std::sync::Mutex;

use ged_core::config::{CliOverrides, GedConfig};
use ged_core::errors::ConfigError;
use ged_core::AnalysisWindow;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all GED_ env vars to prevent cross-test contamination.
fn clear_ged_env_vars() {
    for key in [
        "GED_INPUT_DELIMITER",
        "GED_INPUT_ENCODING",
        "GED_INPUT_DATE_FORMAT",
        "GED_CACHE_ENABLED",
        "GED_CACHE_MAX_ENTRIES",
        "GED_ANALYSIS_WINDOW",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn empty_toml_yields_ged_export_defaults() {
    let config = GedConfig::from_toml("").unwrap();

    assert_eq!(config.input.effective_delimiter(), b';');
    assert_eq!(config.input.effective_encoding(), "iso-8859-1");
    assert_eq!(config.input.effective_date_format(), "%d/%m/%Y");
    assert!(config.input.effective_trim_fields());

    assert_eq!(config.columns.effective_deposit_date(), "Date dépôt GED");
    assert_eq!(config.columns.effective_document_type(), "TYPE DE DOCUMENT");
    assert_eq!(config.columns.effective_project(), "PROJET");
    assert_eq!(config.columns.effective_emitter(), "EMET");
    assert_eq!(config.columns.effective_lot(), "LOT");
    assert_eq!(config.columns.effective_revision_index(), "INDICE");
    assert_eq!(config.columns.effective_added_by(), "Ajouté par");
    assert_eq!(config.columns.effective_document_label(), "Libellé du document");

    assert!(config.cache.effective_enabled());
    assert_eq!(config.cache.effective_max_entries(), 16);
    assert_eq!(config.analysis.effective_window(), AnalysisWindow::All);
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let toml = r#"
[input]
delimiter = ","
encoding = "utf-8"

[columns]
document_label = "Nom du document"

[analysis]
window = "12m"
"#;
    let config = GedConfig::from_toml(toml).unwrap();
    assert_eq!(config.input.effective_delimiter(), b',');
    assert_eq!(config.input.effective_encoding(), "utf-8");
    assert_eq!(config.columns.effective_document_label(), "Nom du document");
    assert_eq!(config.columns.effective_lot(), "LOT");
    assert_eq!(config.analysis.effective_window(), AnalysisWindow::FirstYear);
}

#[test]
fn unknown_encoding_fails_validation() {
    let err = GedConfig::from_toml("[input]\nencoding = \"klingon-8\"").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "input.encoding"),
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn zero_cache_entries_fails_validation() {
    let err = GedConfig::from_toml("[cache]\nmax_entries = 0").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn layered_resolution_cli_beats_env_beats_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_ged_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("ged.toml"),
        r#"
[input]
encoding = "utf-8"
date_format = "%Y-%m-%d"

[cache]
max_entries = 4
"#,
    )
    .unwrap();

    std::env::set_var("GED_INPUT_ENCODING", "windows-1252");
    std::env::set_var("GED_CACHE_MAX_ENTRIES", "8");

    let cli = CliOverrides {
        encoding: Some("iso-8859-15".into()),
        ..Default::default()
    };
    let config = GedConfig::load(dir.path(), Some(&cli)).unwrap();

    assert_eq!(config.input.effective_encoding(), "iso-8859-15");
    assert_eq!(config.cache.effective_max_entries(), 8);
    assert_eq!(config.input.effective_date_format(), "%Y-%m-%d");

    clear_ged_env_vars();
}

#[test]
fn missing_project_config_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_ged_env_vars();

    let dir = tempdir();
    let config = GedConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.input.effective_delimiter(), b';');
}

#[test]
fn invalid_project_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_ged_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("ged.toml"), "this is not toml {{{{").unwrap();
    match GedConfig::load(dir.path(), None).unwrap_err() {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("ged.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn bad_window_env_var_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_ged_env_vars();

    let dir = tempdir();
    std::env::set_var("GED_ANALYSIS_WINDOW", "fortnight");
    let result = GedConfig::load(dir.path(), None);
    clear_ged_env_vars();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn config_toml_roundtrip() {
    let mut config = GedConfig::default();
    config.input.delimiter = Some('|');
    config.analysis.window = Some(AnalysisWindow::FirstSixMonths);
    let toml_str = config.to_toml().unwrap();
    let back = GedConfig::from_toml(&toml_str).unwrap();
    assert_eq!(back.input.effective_delimiter(), b'|');
    assert_eq!(back.analysis.effective_window(), AnalysisWindow::FirstSixMonths);
}
