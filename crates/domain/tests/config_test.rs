use ferrous_lookup_domain::{Config, ConfigError, LogFormat};

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.resolver.server, "8.8.8.8:53");
    assert_eq!(config.resolver.timeout_ms, 5000);
    assert_eq!(config.resolver.attempts, 2);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_toml_gives_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let config = Config::from_toml(
        r#"
[resolver]
server = "1.1.1.1:53"

[logging]
format = "json"
"#,
    )
    .unwrap();

    assert_eq!(config.resolver.server, "1.1.1.1:53");
    assert_eq!(config.resolver.timeout_ms, 5000);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_timeout_duration() {
    let config = Config::from_toml("[resolver]\ntimeout_ms = 250\n").unwrap();
    assert_eq!(config.resolver.timeout().as_millis(), 250);
}

#[test]
fn test_invalid_toml() {
    let result = Config::from_toml("[resolver\nserver = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_validate_rejects_zero_attempts() {
    let config = Config::from_toml("[resolver]\nattempts = 0\n").unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let config = Config::from_toml("[resolver]\ntimeout_ms = 0\n").unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_empty_server() {
    let config = Config::from_toml("[resolver]\nserver = \"  \"\n").unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}
