use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::filters::MAX_RESULTS_PER_CATEGORY;
use crate::models::DEFAULT_MAX_UPLOAD_BYTES;
use crate::services::classifier::DEFAULT_TIMEOUT_SECS;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub classifier: ClassifierSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierSettings {
    pub base_url: String,
    #[serde(default = "default_classifier_timeout")]
    pub timeout_secs: u64,
}

/// Without a URL the service runs on the bundled in-memory catalog
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
            max_results: default_max_results(),
        }
    }
}

fn default_classifier_timeout() -> u64 { DEFAULT_TIMEOUT_SECS }
fn default_max_upload_bytes() -> usize { DEFAULT_MAX_UPLOAD_BYTES }
fn default_max_results() -> usize { MAX_RESULTS_PER_CATEGORY }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with GLAM__)
    /// 4. Deployment variables: DATABASE_URL, AI_SERVICE_URL, JWT_SECRET
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false));

        Self::layered(builder)
    }

    /// Load configuration from a custom path
    ///
    /// Environment and deployment variables still apply on top of the file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::layered(Config::builder().add_source(File::from(path.as_ref())))
    }

    fn layered(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings = builder
            // e.g., GLAM__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("GLAM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_deployment_overrides(settings)?.try_deserialize()
    }
}

/// Conventional deployment variables win over everything else
fn apply_deployment_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let overrides = [
        ("DATABASE_URL", "database.url"),
        ("AI_SERVICE_URL", "classifier.base_url"),
        ("JWT_SECRET", "auth.jwt_secret"),
    ];

    let mut builder = Config::builder().add_source(settings);
    for (var, key) in overrides {
        if let Ok(value) = env::var(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_defaults_fill_optional_sections() {
        let settings = from_toml(
            r#"
            [server]
            host = "0.0.0.0"
            port = 5000

            [classifier]
            base_url = "http://localhost:8000"

            [auth]
            jwt_secret = "secret"
            "#,
        )
        .unwrap();

        assert_eq!(settings.classifier.timeout_secs, 60);
        assert_eq!(settings.analysis.max_upload_bytes, 5 * 1024 * 1024);
        assert_eq!(settings.analysis.max_results, 6);
        assert!(settings.database.url.is_none());
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let result = from_toml(
            r#"
            [server]
            host = "0.0.0.0"
            port = 5000

            [classifier]
            base_url = "http://localhost:8000"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_applies_deployment_overrides() {
        std::env::set_var("AI_SERVICE_URL", "http://face-analysis.internal:8000");
        let settings = Settings::load_from("config/default.toml");
        std::env::remove_var("AI_SERVICE_URL");

        let settings = settings.unwrap();
        assert_eq!(settings.classifier.base_url, "http://face-analysis.internal:8000");
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.analysis.max_results, 6);
    }
}
