//! Tests for layered configuration loading
//!
//! Each test runs inside a `figment::Jail`, which gives it a private working
//! directory and restores the environment afterwards.

use figment::Jail;
use opm_domain::Error;
use opm_infrastructure::config::{AppConfig, ConfigLoader};
use opm_infrastructure::constants::DEFAULT_OCTOPERF_BASE_URL;

fn load(loader: ConfigLoader) -> figment::error::Result<AppConfig> {
    loader.load().map_err(|e| e.to_string().into())
}

#[test]
fn test_defaults() {
    Jail::expect_with(|_jail| {
        let config = load(ConfigLoader::new())?;

        assert_eq!(config.octoperf.base_url, DEFAULT_OCTOPERF_BASE_URL);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json_format);
        Ok(())
    });
}

#[test]
fn test_canonical_env_vars() {
    Jail::expect_with(|jail| {
        jail.set_env("OCTOPERF_API_KEY", "secret-token");
        jail.set_env("OCTOPERF_PROJECT_ID", "project-42");

        let config = load(ConfigLoader::new())?;

        assert_eq!(config.octoperf.api_key.as_deref(), Some("secret-token"));
        assert_eq!(config.octoperf.default_project_id.as_deref(), Some("project-42"));
        Ok(())
    });
}

#[test]
fn test_numeric_canonical_env_vars_stay_strings() {
    Jail::expect_with(|jail| {
        jail.set_env("OCTOPERF_API_KEY", "123456789");
        jail.set_env("OCTOPERF_PROJECT_ID", "12345");

        let config = load(ConfigLoader::new())?;

        assert_eq!(config.octoperf.api_key.as_deref(), Some("123456789"));
        assert_eq!(config.octoperf.default_project_id.as_deref(), Some("12345"));

        jail.set_env("OCTOPERF_PROJECT_ID", "007");
        let config = load(ConfigLoader::new())?;
        assert_eq!(config.octoperf.default_project_id.as_deref(), Some("007"));
        Ok(())
    });
}

#[test]
fn test_numeric_ids_from_prefixed_env_and_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "octoperf-mcp.toml",
            r#"
            [octoperf]
            api_key = 987654
            "#,
        )?;
        jail.set_env("OPM_OCTOPERF__DEFAULT_PROJECT_ID", "42");

        let config = load(ConfigLoader::new())?;

        assert_eq!(config.octoperf.api_key.as_deref(), Some("987654"));
        assert_eq!(config.octoperf.default_project_id.as_deref(), Some("42"));
        Ok(())
    });
}

#[test]
fn test_default_config_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "octoperf-mcp.toml",
            r#"
            [octoperf]
            base_url = "http://localhost:9000"
            default_project_id = "from-file"

            [logging]
            level = "debug"
            json_format = true
            "#,
        )?;

        let config = load(ConfigLoader::new())?;

        assert_eq!(config.octoperf.base_url, "http://localhost:9000");
        assert_eq!(config.octoperf.default_project_id.as_deref(), Some("from-file"));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
        Ok(())
    });
}

#[test]
fn test_prefixed_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
            [logging]
            level = "debug"
            "#,
        )?;
        jail.set_env("OPM_LOGGING__LEVEL", "warn");
        jail.set_env("OPM_OCTOPERF__BASE_URL", "http://127.0.0.1:8080");

        let config = load(ConfigLoader::new().with_config_path("custom.toml"))?;

        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.octoperf.base_url, "http://127.0.0.1:8080");
        Ok(())
    });
}

#[test]
fn test_canonical_api_key_wins_over_prefixed() {
    Jail::expect_with(|jail| {
        jail.set_env("OPM_OCTOPERF__API_KEY", "prefixed");
        jail.set_env("OCTOPERF_API_KEY", "canonical");

        let config = load(ConfigLoader::new())?;

        assert_eq!(config.octoperf.api_key.as_deref(), Some("canonical"));
        Ok(())
    });
}

#[test]
fn test_missing_explicit_config_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let result = ConfigLoader::new().with_config_path("missing.toml").load();

        assert!(matches!(result, Err(Error::Configuration { .. })));
        Ok(())
    });
}

#[test]
fn test_invalid_base_url_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("OPM_OCTOPERF__BASE_URL", "ftp://api.octoperf.com");

        let result = ConfigLoader::new().load();

        assert!(matches!(result, Err(Error::Configuration { .. })));
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("OPM_LOGGING__LEVEL", "chatty");

        let result = ConfigLoader::new().load();

        assert!(matches!(result, Err(Error::Configuration { .. })));
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("OCTO_LOGGING__LEVEL", "error");

        let config = load(ConfigLoader::new().with_env_prefix("OCTO"))?;

        assert_eq!(config.logging.level, "error");
        Ok(())
    });
}

#[test]
fn test_api_key_is_redacted_in_debug_output() {
    let mut config = AppConfig::default();
    config.octoperf.api_key = Some("super-secret".to_string());

    let debug = format!("{:?}", config);
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("<redacted>"));
}
