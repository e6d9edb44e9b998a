/// Server configuration
use crate::error::{Result, ServerError};
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_reload")]
    pub reload: ReloadSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origin allowed to call the API from a browser; `*` allows any
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReloadSettings {
    /// Size of the worker pool inserting seed albums
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Directory holding `albums.json` and `users.json`; bundled data if unset
    #[serde(default)]
    pub seed_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from an explicit file (required to exist) or the
    /// default `config.toml` (optional), then environment
    ///
    /// Environment variables use the `DIGGER_` prefix and `__` between
    /// section and key, e.g. `DIGGER_SERVER__PORT=3001`.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings =
                    settings.add_source(config::File::from(path.to_path_buf()).required(true));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("DIGGER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "Port must be non-zero (set DIGGER_SERVER__PORT)".to_string(),
            ));
        }

        if self.server.request_timeout_secs == 0 {
            return Err(ServerError::Config(
                "Request timeout must be at least one second".to_string(),
            ));
        }

        if self.server.cors_origin != "*"
            && HeaderValue::from_str(&self.server.cors_origin).is_err()
        {
            return Err(ServerError::Config(format!(
                "Invalid CORS origin: {:?}",
                self.server.cors_origin
            )));
        }

        if self.storage.max_connections == 0 {
            return Err(ServerError::Config(
                "Storage needs at least one connection".to_string(),
            ));
        }

        if self.reload.workers == 0 {
            return Err(ServerError::Config(
                "Reload needs at least one worker".to_string(),
            ));
        }

        if let Some(dir) = &self.reload.seed_dir {
            if !dir.is_dir() {
                return Err(ServerError::Config(format!(
                    "Seed directory not found at {:?}",
                    dir
                )));
            }
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        cors_origin: default_cors_origin(),
        request_timeout_secs: default_request_timeout_secs(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
        max_connections: default_max_connections(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/albums.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_reload() -> ReloadSettings {
    ReloadSettings {
        workers: default_workers(),
        seed_dir: None,
    }
}

fn default_workers() -> usize {
    4
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            reload: default_reload(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServerConfig::default();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.cors_origin, "http://localhost:3000");
        assert_eq!(config.reload.workers, 4);
        config.validate().unwrap();
    }

    #[test]
    fn test_load_from_file_fills_missing_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("digger.toml");
        std::fs::write(
            &path,
            "[server]\nport = 8080\n\n[storage]\ndatabase_url = \"sqlite://test.db\"\n",
        )
        .unwrap();

        let config = ServerConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.database_url, "sqlite://test.db");
        assert_eq!(config.storage.max_connections, 5);
        assert_eq!(config.reload.workers, 4);
        assert!(config.reload.seed_dir.is_none());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = ServerConfig::load_from(Some(Path::new("/nonexistent/digger.toml")));
        assert!(matches!(err, Err(ServerError::Config(_))));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut config = ServerConfig::default();
        config.reload.workers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_cors_origin_rejected() {
        let mut config = ServerConfig::default();
        config.server.cors_origin = "http://bad\norigin".to_string();
        assert!(config.validate().is_err());

        config.server.cors_origin = "*".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_seed_dir_rejected() {
        let mut config = ServerConfig::default();
        config.reload.seed_dir = Some(PathBuf::from("/nonexistent/seed"));
        assert!(config.validate().is_err());
    }
}
