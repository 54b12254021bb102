use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, Platform};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.platform, eq(Platform::Desktop));
    assert_that!(
        config.api.resolved_base_url(),
        eq(crate::DEFAULT_DESKTOP_BASE_URL)
    );
    assert_that!(config.retry.max_retries, eq(3));
    assert_that!(config.retry.delay_ms, eq(1000));
    assert_that!(config.storage.dir.as_str(), eq(crate::DEFAULT_STORAGE_DIR));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_is_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested/.dash");
    let _guard = EnvGuard::set("DASH_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [api]
            platform = "android-emulator"

            [retry]
            max_retries = 5
            delay_ms = 250

            [logging]
            level = "debug"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.platform, eq(Platform::AndroidEmulator));
    assert_that!(
        config.api.resolved_base_url(),
        eq(crate::DEFAULT_ANDROID_EMULATOR_BASE_URL)
    );
    assert_that!(config.retry.max_retries, eq(5));
    assert_that!(config.retry.delay_ms, eq(250));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [retry]
            max_retries = 5
        "#,
    )
    .unwrap();
    let _retries = EnvGuard::set("DASH_RETRY_MAX_RETRIES", "1");
    let _url = EnvGuard::set("DASH_API_BASE_URL", "https://dash.example.com/");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.retry.max_retries, eq(1));
    assert_that!(
        config.api.resolved_base_url(),
        eq("https://dash.example.com")
    );
}

#[test]
#[serial]
fn given_unparseable_env_var_when_load_then_keeps_previous_value() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _delay = EnvGuard::set("DASH_RETRY_DELAY_MS", "soon");
    let _colored = EnvGuard::set("DASH_LOG_COLORED", "maybe");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.retry.delay_ms, eq(1000));
    assert_that!(config.logging.colored, eq(true));
}

#[test]
#[serial]
fn given_invalid_log_level_when_load_then_defaults_to_info() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _level = EnvGuard::set("DASH_LOG_LEVEL", "chatty");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_empty_log_file_env_when_load_then_file_is_none() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("DASH_LOG_FILE", "");

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(config.logging.file.is_none());
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[retry\nmax_retries = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_no_config_dir_env_when_config_dir_then_uses_cwd() {
    // Given
    let _guard = EnvGuard::remove("DASH_CONFIG_DIR");

    // When
    let dir = Config::config_dir().unwrap();

    // Then
    assert!(dir.ends_with(crate::DEFAULT_CONFIG_DIR_NAME));
}

#[test]
#[serial]
fn given_storage_dir_when_storage_path_then_joined_to_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.storage_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join("cache")));
}
