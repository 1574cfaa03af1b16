mod common;

use common::temp_config;
use postboard::config::{ApiConfig, Config, ConfigError, LoggingConfig};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "https://jsonplaceholder.typicode.com");
    assert_eq!(config.api.posts_path, "/posts");
    assert_eq!(config.api.users_path, "/users");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.logging.filter, "warn");
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"[api]
base_url = "http://localhost:3000"
timeout_seconds = 10

[logging]
filter = "postboard=debug"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(
        config.api,
        ApiConfig {
            base_url: "http://localhost:3000".to_string(),
            timeout_seconds: 10,
            ..ApiConfig::default()
        }
    );
    assert_eq!(
        config.logging,
        LoggingConfig {
            filter: "postboard=debug".to_string()
        }
    );
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = temp_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_parse_error() {
    let (_dir, path) = temp_config("[api\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = Config::default();
    config.api.base_url = "ftp://example.com".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    let mut config = Config::default();
    config.api.posts_path = "posts".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.api.timeout_seconds = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_path_ends_with_app_dir() {
    let path = Config::config_path();
    assert!(path.ends_with("postboard/config.toml"));
}
