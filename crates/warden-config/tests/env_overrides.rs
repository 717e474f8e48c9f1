use figment::Jail;
use warden_config::{ConfigError, WardenConfig};

#[test]
fn env_sets_database_path() {
    Jail::expect_with(|jail| {
        jail.set_env("WARDEN_DATABASE__PATH", ":memory:");
        let config = WardenConfig::load().expect("config loads");
        assert!(config.database.is_in_memory());
        Ok(())
    });
}

#[test]
fn invalid_env_timezone_fails_load() {
    Jail::expect_with(|jail| {
        jail.set_env("WARDEN_GENERAL__DEFAULT_TIMEZONE", "Invalid/Zone");
        let result = WardenConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn non_numeric_limit_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("WARDEN_GENERAL__DEFAULT_LIMIT", "lots");
        let result = WardenConfig::load();
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
