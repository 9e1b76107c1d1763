//! Configuration loader with layered sources.

use crate::{AppConfig, DEFAULT_JWT_SECRET, MAX_JWT_EXPIRATION_SECS};
use config::{Config, ConfigError, Environment, File};
use docman_core::DocmanError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `DOCMAN__` prefix, e.g. `DOCMAN__DATABASE__URL`
    pub fn new(config_dir: impl Into<String>) -> Result<Self, DocmanError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, DocmanError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), DocmanError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, DocmanError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var("DOCMAN_ENV").unwrap_or_else(|_| "development".to_string());
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder()
            .set_override("app.environment", environment.clone())
            .map_err(config_error_to_docman_error)?;

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{config_dir}/{name}.toml");
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("DOCMAN")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("server.cors_origins"),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_docman_error)?;

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Settings the server can run with but should not.
///
/// The caller logs these once the tracing subscriber is installed.
#[must_use]
pub fn config_warnings(config: &AppConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.app.is_production() && config.security.jwt_secret == DEFAULT_JWT_SECRET {
        warnings.push("Using default JWT secret in production! This is a security risk.".to_string());
    }

    if config.app.is_production() && config.seed.enabled {
        warnings.push(format!(
            "Demo user seeding is enabled in production ({})",
            config.seed.email
        ));
    }

    warnings
}

/// Validates the configuration, failing fast on values the server cannot run with.
pub fn validate_config(config: &AppConfig) -> Result<(), DocmanError> {
    if config.security.jwt_secret.is_empty() {
        return Err(DocmanError::Configuration("JWT secret is required".to_string()));
    }

    if config.security.jwt_expiration_secs == 0
        || config.security.jwt_expiration_secs > MAX_JWT_EXPIRATION_SECS
    {
        return Err(DocmanError::Configuration(format!(
            "Invalid JWT expiration: {} seconds (must be between 1 and {})",
            config.security.jwt_expiration_secs, MAX_JWT_EXPIRATION_SECS
        )));
    }

    if config.database.url.is_empty() {
        return Err(DocmanError::Configuration("Database URL is required".to_string()));
    }

    if config.database.min_connections > config.database.max_connections {
        return Err(DocmanError::Configuration(format!(
            "Invalid pool size: min ({}) cannot be greater than max ({})",
            config.database.min_connections, config.database.max_connections
        )));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !VALID_LOG_LEVELS.contains(&level.as_str()) {
        return Err(DocmanError::Configuration(format!(
            "Invalid log level: {}",
            config.observability.log_level
        )));
    }

    Ok(())
}

fn config_error_to_docman_error(err: ConfigError) -> DocmanError {
    DocmanError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServerConfig;
    use std::fs;

    #[tokio::test]
    async fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.security.jwt_expiration_secs, 86_400);
        assert!(config.server.cors_enabled);
        assert!(validate_config(&config).is_ok());
    }

    #[tokio::test]
    async fn test_server_address() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert!(config.allows_any_origin());
    }

    #[tokio::test]
    async fn test_loads_file_layers() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[server]\nport = 9100\n\n[database]\nurl = \"mysql://u:p@db:3306/docs\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("local.toml"), "[server]\nport = 9200\n").unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy().to_string()).unwrap();
        let config = loader.get().await;

        assert_eq!(config.server.port, 9200);
        assert_eq!(config.database.url, "mysql://u:p@db:3306/docs");
        assert_eq!(config.security.jwt_issuer, "docman");
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        fs::write(&path, "[observability]\nlog_level = \"info\"\n").unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy().to_string()).unwrap();
        assert_eq!(loader.get().await.observability.log_level, "info");

        fs::write(&path, "[observability]\nlog_level = \"debug\"\n").unwrap();
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.observability.log_level, "debug");
    }

    #[test]
    fn test_rejects_empty_database_url() {
        let mut config = AppConfig::default();
        config.database.url = String::new();
        assert!(matches!(validate_config(&config), Err(DocmanError::Configuration(_))));
    }

    #[test]
    fn test_default_secret_in_production_warns() {
        let mut config = AppConfig::default();
        config.app.environment = "production".to_string();
        config.security.jwt_secret = DEFAULT_JWT_SECRET.to_string();

        let warnings = config_warnings(&config);

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("default JWT secret"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_seeding_in_production_warns() {
        let mut config = AppConfig::default();
        config.app.environment = "production".to_string();
        config.security.jwt_secret = "a-real-secret".to_string();
        config.seed.enabled = true;

        let warnings = config_warnings(&config);

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("test@xyz.com"));
    }

    #[test]
    fn test_default_secret_outside_production_is_quiet() {
        let config = AppConfig::default();
        assert!(config_warnings(&config).is_empty());

        let mut custom = AppConfig::default();
        custom.app.environment = "production".to_string();
        custom.security.jwt_secret = "a-real-secret".to_string();
        assert!(config_warnings(&custom).is_empty());
    }

    #[test]
    fn test_rejects_out_of_range_jwt_expiration() {
        let mut config = AppConfig::default();
        config.security.jwt_expiration_secs = u64::MAX;
        assert!(matches!(validate_config(&config), Err(DocmanError::Configuration(_))));

        config.security.jwt_expiration_secs = 0;
        assert!(validate_config(&config).is_err());

        config.security.jwt_expiration_secs = MAX_JWT_EXPIRATION_SECS;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_inverted_pool_bounds() {
        let mut config = AppConfig::default();
        config.database.min_connections = 20;
        config.database.max_connections = 5;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut config = AppConfig::default();
        config.observability.log_level = "verbose".to_string();
        assert!(validate_config(&config).is_err());
    }
}
