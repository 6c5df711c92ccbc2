use pitchflow_core::config::{ENV_DATA_DIR, ENV_LOG_LEVEL};
use pitchflow_core::{AppConfig, ConfigError};
use std::fs;
use std::path::PathBuf;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn missing_file_argument_uses_defaults_under_given_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_with_env(None, dir.path(), no_env).unwrap();

    assert_eq!(config.data_dir, dir.path());
    assert_eq!(config.db_path(), dir.path().join("pitchflow.sqlite3"));
    assert_eq!(config.session_dir(), dir.path().join("session"));
    assert_eq!(config.effective_log_dir(), dir.path().join("logs"));
    assert!(config.demo_mode);
}

#[test]
fn file_values_then_environment_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.json");
    let file_data_dir = dir.path().join("from-file");
    let env_data_dir = dir.path().join("from-env");
    fs::write(
        &file,
        serde_json::json!({
            "dataDir": file_data_dir,
            "logLevel": "debug",
            "dbFileName": "custom.sqlite3",
            "demoMode": false
        })
        .to_string(),
    )
    .unwrap();

    let from_file = AppConfig::load_with_env(Some(&file), dir.path(), no_env).unwrap();
    assert_eq!(from_file.data_dir, file_data_dir);
    assert_eq!(from_file.log_level, "debug");
    assert_eq!(from_file.db_path(), file_data_dir.join("custom.sqlite3"));
    assert!(!from_file.demo_mode);

    let env_value = env_data_dir.to_string_lossy().into_owned();
    let overridden = AppConfig::load_with_env(Some(&file), dir.path(), |key| match key {
        ENV_DATA_DIR => Some(env_value.clone()),
        ENV_LOG_LEVEL => Some("error".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(overridden.data_dir, env_data_dir);
    assert_eq!(overridden.log_level, "error");
    assert_eq!(overridden.db_file_name, "custom.sqlite3");
}

#[test]
fn malformed_file_reports_parse_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.json");
    fs::write(&file, "{ not json").unwrap();

    match AppConfig::load_with_env(Some(&file), dir.path(), no_env) {
        Err(ConfigError::Parse { path, .. }) => assert_eq!(path, file),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn unreadable_file_reports_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(matches!(
        AppConfig::load_with_env(Some(&missing), dir.path(), no_env),
        Err(ConfigError::Read { .. })
    ));
}

#[test]
fn unsupported_log_level_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let result = AppConfig::load_with_env(None, dir.path(), |key| {
        (key == ENV_LOG_LEVEL).then(|| "verbose".to_string())
    });
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn relative_override_is_rejected() {
    let result = AppConfig::load_with_env(None, &PathBuf::from("/tmp"), |key| {
        (key == ENV_DATA_DIR).then(|| "relative/dir".to_string())
    });
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}
