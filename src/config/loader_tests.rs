//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_returns_some_path() {
    let path = default_config_path();
    assert!(
        path.is_some(),
        "default_config_path should return Some on supported platforms"
    );
}

#[test]
fn default_config_path_contains_confview_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("confview") && path_str.ends_with("config.toml"),
        "Path should contain 'confview' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let temp_dir = env::temp_dir();
    let config_path = temp_dir.join("confview_test_config.toml");

    let toml_content = r#"
filmstrip_size = 120
hangup_button_size = 64
log_file_path = "/tmp/confview-test.log"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(result.is_ok(), "Should successfully parse valid TOML");

    let config = result.unwrap();
    assert!(
        config.is_some(),
        "Should return Some(ConfigFile) for existing file"
    );

    let config = config.unwrap();
    assert_eq!(config.filmstrip_size, Some(120));
    assert_eq!(config.hangup_button_size, Some(64));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/confview-test.log"))
    );

    // Cleanup
    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let temp_dir = env::temp_dir();
    let config_path = temp_dir.join("confview_test_invalid.toml");

    let invalid_toml = "this is not valid TOML ][}{";
    fs::write(&config_path, invalid_toml).expect("Failed to write invalid test config");

    let result = load_config_file(&config_path);
    assert!(
        result.is_err(),
        "Invalid TOML should return Err(ConfigError::ParseError)"
    );

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    // Cleanup
    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let temp_dir = env::temp_dir();
    let config_path = temp_dir.join("confview_test_unknown_key.toml");

    let toml_content = r#"
filmstrip_size = 120
not_a_real_setting = true
"#;
    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown keys should be rejected, got: {:?}",
        result
    );

    // Cleanup
    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let temp_dir = env::temp_dir();
    let config_path = temp_dir.join("confview_test_partial.toml");

    let partial_toml = r#"
hangup_button_size = 48
# Other fields omitted
"#;

    fs::write(&config_path, partial_toml).expect("Failed to write partial test config");

    let result = load_config_file(&config_path);
    assert!(result.is_ok(), "Should parse partial config");

    let config = result.unwrap().unwrap();
    assert_eq!(config.hangup_button_size, Some(48));
    assert_eq!(config.filmstrip_size, None);
    assert_eq!(config.log_file_path, None);

    // Cleanup
    fs::remove_file(config_path).ok();
}

#[test]
fn merge_config_uses_defaults_when_none() {
    let resolved = merge_config(None);
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.metrics, defaults.metrics);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        filmstrip_size: Some(150),
        hangup_button_size: Some(72),
        log_file_path: Some(PathBuf::from("/tmp/elsewhere.log")),
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.metrics.filmstrip_size, 150);
    assert_eq!(resolved.metrics.hangup_button_size, 72);
    assert_eq!(resolved.log_file_path, PathBuf::from("/tmp/elsewhere.log"));
}

#[test]
fn merge_config_keeps_defaults_for_omitted_fields() {
    let config_file = ConfigFile {
        filmstrip_size: Some(150),
        hangup_button_size: None,
        log_file_path: None,
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.metrics.filmstrip_size, 150);
    assert_eq!(
        resolved.metrics.hangup_button_size,
        defaults.metrics.hangup_button_size
    );
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

#[test]
#[serial(confview_config_env)]
fn precedence_explicit_path_beats_env_var() {
    let temp_dir = env::temp_dir();
    let explicit_path = temp_dir.join("confview_test_explicit.toml");
    let env_path = temp_dir.join("confview_test_env.toml");

    fs::write(&explicit_path, "filmstrip_size = 111").expect("Failed to write explicit config");
    fs::write(&env_path, "filmstrip_size = 222").expect("Failed to write env config");

    env::set_var("CONFVIEW_CONFIG", &env_path);
    let result = load_config_with_precedence(Some(explicit_path.clone()));
    env::remove_var("CONFVIEW_CONFIG");

    let config = result.expect("Should load").expect("Should be Some");
    assert_eq!(
        config.filmstrip_size,
        Some(111),
        "Explicit path should win over CONFVIEW_CONFIG"
    );

    // Cleanup
    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(confview_config_env)]
fn precedence_env_var_used_without_explicit_path() {
    let temp_dir = env::temp_dir();
    let env_path = temp_dir.join("confview_test_env_only.toml");

    fs::write(&env_path, "hangup_button_size = 33").expect("Failed to write env config");

    env::set_var("CONFVIEW_CONFIG", &env_path);
    let result = load_config_with_precedence(None);
    env::remove_var("CONFVIEW_CONFIG");

    let config = result.expect("Should load").expect("Should be Some");
    assert_eq!(
        config.hangup_button_size,
        Some(33),
        "CONFVIEW_CONFIG path should be used when no explicit path is given"
    );

    // Cleanup
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(confview_config_env)]
fn precedence_missing_env_file_yields_none() {
    env::set_var("CONFVIEW_CONFIG", "/nonexistent/confview.toml");
    let result = load_config_with_precedence(None);
    env::remove_var("CONFVIEW_CONFIG");

    assert_eq!(
        result,
        Ok(None),
        "Missing file behind CONFVIEW_CONFIG should fall back to defaults"
    );
}
