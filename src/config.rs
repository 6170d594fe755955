//! Configuration manager.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::FromRef;
use serde::{Deserialize, Serialize};

use crate::AppState;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_ADDRESS: &str = "0.0.0.0:1111";
const DEFAULT_LOG_LEVEL: &str = "info";
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors raised while reading `config.yaml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot open configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration file is malformed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Instance name.
    pub name: String,
    /// Socket address to listen on.
    #[serde(skip_serializing)]
    pub address: String,
    /// Log filter used when `RUST_LOG` is unset.
    #[serde(skip_serializing)]
    pub log_level: String,
    #[serde(skip_deserializing)]
    pub(crate) version: String,
    #[serde(skip)]
    pub(crate) path: PathBuf,
    /// Related to PostgreSQL configuration.
    /// Accounts are kept in memory without it.
    #[serde(skip_serializing)]
    pub postgres: Option<Postgres>,
    /// Related to Argon2 configuration.
    #[serde(skip_serializing)]
    pub argon2: Option<Argon2>,
    /// Related to OTLP export and Prometheus metrics.
    #[serde(skip_serializing)]
    pub telemetry: Option<Telemetry>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").into(),
            address: DEFAULT_ADDRESS.into(),
            log_level: DEFAULT_LOG_LEVEL.into(),
            version: VERSION.into(),
            path: PathBuf::default(),
            postgres: None,
            argon2: None,
            telemetry: None,
        }
    }
}

/// PostgreSQL configuration.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Postgres {
    /// Hostname of PostgreSQL instance.
    pub host: String,
    #[serde(default = "default_postgres_port")]
    pub port: u16,
    /// Database name.
    pub database: Option<String>,
    /// Username credential to connect.
    pub username: Option<String>,
    /// Password credential to connect.
    pub password: Option<String>,
    /// Maximum pool connections.
    pub pool_size: Option<u32>,
}

fn default_postgres_port() -> u16 {
    5432
}

/// Argon2 configuration.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Argon2 {
    /// Memory used while hashing, in KiB.
    pub memory_cost: u32,
    /// Iterations of hash.
    pub iterations: u32,
    /// Parallelism degree.
    pub parallelism: u32,
    /// Output hash length.
    pub hash_length: usize,
}

impl Default for Argon2 {
    fn default() -> Self {
        Self {
            memory_cost: 1024 * 64, // 64 MiB.
            iterations: 4,
            parallelism: 2,
            hash_length: 32,
        }
    }
}

/// Telemetry configuration.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Telemetry {
    /// OTLP gRPC endpoint receiving spans.
    pub otlp: Option<String>,
    /// Expose Prometheus metrics on `/metrics`.
    pub metrics: bool,
}

impl FromRef<AppState> for Arc<Configuration> {
    fn from_ref(state: &AppState) -> Arc<Configuration> {
        Arc::clone(&state.config)
    }
}

impl Configuration {
    pub fn path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Application version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Reads the `config.yaml` file from the specified path or the default
    /// location.
    ///
    /// A missing file is not an error: defaults are used.
    pub fn read(self) -> Result<Arc<Self>, ConfigError> {
        let file_path = if self.path.is_file() {
            self.path.clone()
        } else {
            Path::new(DEFAULT_CONFIG_PATH).to_path_buf()
        };

        let file = match File::open(&file_path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Arc::new(self));
            },
            Err(err) => return Err(err.into()),
        };

        let mut config: Configuration = serde_yaml::from_reader(file)?;
        config.version = VERSION.to_owned();
        config.path = file_path;

        Ok(Arc::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = Configuration::default();
        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.version(), VERSION);
        assert!(config.postgres.is_none());
        assert_eq!(config.argon2.unwrap_or_default().memory_cost, 65536);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
name: acme
address: 127.0.0.1:8080
postgres:
  host: localhost
  username: postgres
  pool_size: 4
argon2:
  memory_cost: 19456
  iterations: 2
telemetry:
  metrics: true
"#;

        let config: Configuration = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name, "acme");
        assert_eq!(config.address, "127.0.0.1:8080");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);

        let postgres = config.postgres.unwrap();
        assert_eq!(postgres.host, "localhost");
        assert_eq!(postgres.port, 5432);
        assert_eq!(postgres.pool_size, Some(4));
        assert_eq!(postgres.database, None);

        let argon2 = config.argon2.unwrap();
        assert_eq!(argon2.memory_cost, 19456);
        assert_eq!(argon2.iterations, 2);
        assert_eq!(argon2.parallelism, 2);

        let telemetry = config.telemetry.unwrap();
        assert!(telemetry.metrics);
        assert!(telemetry.otlp.is_none());
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = Configuration::default()
            .path(PathBuf::from("does/not/exist.yaml"))
            .read()
            .unwrap();

        assert!(config.postgres.is_none());
        assert_eq!(config.version(), VERSION);
    }
}
