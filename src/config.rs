use serde::{Deserialize, Serialize};
use tracing::{info, error};

pub use crate::error::ConfigError;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Auto-restart on code changes. Only reported at startup; restarting is
    /// left to external tooling such as cargo-watch.
    #[serde(default = "default_reload")]
    pub reload: bool,

    /// Environment (dev, staging, prod)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Serve Swagger UI at /docs and the OpenAPI document at /openapi.json
    #[serde(default = "default_docs_enabled")]
    pub docs_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        // Load from environment variables using envy
        match Self::from_vars(std::env::vars()) {
            Ok(config) => {
                info!("✅ Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                error!("❌ Failed to load configuration: {}", e);
                Err(e)
            }
        }
    }

    /// Build a configuration from explicit key/value pairs, named like the
    /// environment variables (`HOST`, `PORT`, ...).
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, Config>(vars)?)
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        self.environment.to_lowercase() == "dev" || self.environment.to_lowercase() == "development"
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "prod" || self.environment.to_lowercase() == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            reload: default_reload(),
            environment: default_environment(),
            docs_enabled: default_docs_enabled(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_reload() -> bool {
    true
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_docs_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_bind_localhost_8000_with_reload() {
        let config = Config::from_vars(Vec::new()).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert!(config.reload);
        assert!(config.docs_enabled);
        assert!(config.is_development());
        assert_eq!(config.server_address(), "127.0.0.1:8000");
    }

    #[test]
    fn default_impl_matches_empty_environment() {
        let loaded = Config::from_vars(Vec::new()).unwrap();
        let default = Config::default();

        assert_eq!(loaded.server_address(), default.server_address());
        assert_eq!(loaded.reload, default.reload);
        assert_eq!(loaded.environment, default.environment);
    }

    #[test]
    fn variables_override_defaults() {
        let config = Config::from_vars(vars(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9090"),
            ("RELOAD", "false"),
            ("ENVIRONMENT", "Production"),
            ("DOCS_ENABLED", "false"),
        ]))
        .unwrap();

        assert_eq!(config.server_address(), "0.0.0.0:9090");
        assert!(!config.reload);
        assert!(!config.docs_enabled);
        assert!(config.is_production());
        assert!(!config.is_development());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::from_vars(vars(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().starts_with("Environment variable error"));
    }
}
