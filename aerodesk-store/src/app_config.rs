use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    #[serde(default = "default_seed")]
    pub seed_sample_data: bool,
}

fn default_seed() -> bool { true }

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

fn default_max_connections() -> u32 { 5 }
fn default_acquire_timeout() -> u64 { 3 }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local, unversioned overrides
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `AERODESK__STORE__BACKEND=postgres`
            .add_source(config::Environment::with_prefix("AERODESK").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Settings for tests and local runs without config files.
    pub fn in_memory() -> Self {
        Self {
            server: ServerConfig { port: 8080 },
            store: StoreConfig {
                backend: StoreBackend::Memory,
                seed_sample_data: true,
            },
            database: DatabaseConfig {
                url: String::new(),
                max_connections: default_max_connections(),
                acquire_timeout_secs: default_acquire_timeout(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_toml_sections() {
        let raw = r#"
            [server]
            port = 9000

            [store]
            backend = "postgres"

            [database]
            url = "postgres://localhost/aerodesk"
        "#;

        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.store.backend, StoreBackend::Postgres);
        assert!(config.store.seed_sample_data);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.database.acquire_timeout_secs, 3);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let raw = r#"
            [server]
            port = 9000
            [store]
            backend = "mongo"
            [database]
            url = ""
        "#;

        let result: Result<Config, _> = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize();

        assert!(result.is_err());
    }
}
