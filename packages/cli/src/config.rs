// ABOUTME: Server configuration loaded from environment variables
// ABOUTME: Falls back to defaults under ~/.folio when a variable is unset

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;

use folio_config::constants::{
    CORS_ORIGIN, DATABASE_PATH, DEFAULT_HOST, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT,
    DEFAULT_TOKEN_VALIDITY_SECS, HOST, IMAGES_STATIC_PATH, MAX_UPLOAD_BYTES, PORT,
    TOKEN_VALIDITY_TIME_SS,
};
use folio_core::{default_database_path, default_images_dir};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid token validity '{0}': expected a positive number of seconds")]
    InvalidTokenValidity(String),
    #[error("Invalid upload limit '{0}': expected a positive number of bytes")]
    InvalidUploadLimit(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub images_dir: PathBuf,
    pub token_validity_secs: i64,
    pub cors_origin: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT) {
            Some(raw) => raw.trim().parse::<u16>()?,
            None => DEFAULT_PORT,
        };

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let host = lookup(HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let database_path = lookup(DATABASE_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);

        let images_dir = lookup(IMAGES_STATIC_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(default_images_dir);

        let token_validity_secs = match lookup(TOKEN_VALIDITY_TIME_SS) {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTokenValidity(raw)),
            },
            None => DEFAULT_TOKEN_VALIDITY_SECS,
        };

        let cors_origin = lookup(CORS_ORIGIN).unwrap_or_else(|| "*".to_string());

        let max_upload_bytes = match lookup(MAX_UPLOAD_BYTES) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(bytes) if bytes > 0 => bytes,
                _ => return Err(ConfigError::InvalidUploadLimit(raw)),
            },
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Config {
            host,
            port,
            database_path,
            images_dir,
            token_validity_secs,
            cors_origin,
            max_upload_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.token_validity_secs, 3600);
        assert_eq!(config.cors_origin, "*");
        assert_eq!(config.max_upload_bytes, 20 * 1024 * 1024);
        assert!(config.database_path.ends_with(".folio/folio.db"));
        assert!(config.images_dir.ends_with(".folio/images"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("DATABASE_PATH", "/tmp/folio-test.db"),
            ("IMAGES_STATIC_PATH", "/tmp/folio-images"),
            ("TOKEN_VALIDITY_TIME_SS", "60"),
            ("CORS_ORIGIN", "https://example.com"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.database_path, PathBuf::from("/tmp/folio-test.db"));
        assert_eq!(config.images_dir, PathBuf::from("/tmp/folio-images"));
        assert_eq!(config.token_validity_secs, 60);
        assert_eq!(config.cors_origin, "https://example.com");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            config_from(&[("PORT", "0")]),
            Err(ConfigError::PortOutOfRange(0))
        ));
        assert!(matches!(
            config_from(&[("TOKEN_VALIDITY_TIME_SS", "-5")]),
            Err(ConfigError::InvalidTokenValidity(_))
        ));
        assert!(matches!(
            config_from(&[("MAX_UPLOAD_BYTES", "lots")]),
            Err(ConfigError::InvalidUploadLimit(_))
        ));
    }
}
