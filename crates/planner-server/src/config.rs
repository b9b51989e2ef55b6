use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use planner_core::lifecycle::DEFAULT_LIST_LIMIT;
use serde::Deserialize;
use std::path::Path;

use crate::cli::Cli;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "planner.toml";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Interface to bind
    pub host: String,
    /// TCP port of the HTTP API
    pub port: u16,
    /// SQLite database file
    pub database_path: String,
    /// Page size of the task list
    pub list_limit: u32,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7540,
            database_path: "scheduler.db".to_string(),
            list_limit: DEFAULT_LIST_LIMIT,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Reads `path` (if present) and then `PLANNER_*` environment variables.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("PLANNER_"))
            .extract()
    }

    /// Applies command-line flags on top of file and environment values.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(db) = &cli.database {
            self.database_path = db.clone();
        }
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use figment::Jail;

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config = Config::load(DEFAULT_CONFIG_FILE)?;
            assert_eq!(config, Config::default());
            assert_eq!(config.bind_address(), "0.0.0.0:7540");
            assert_eq!(config.list_limit, 50);
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                port = 8080
                database_path = "data/tasks.db"
                "#,
            )?;
            jail.set_env("PLANNER_PORT", "9090");
            jail.set_env("PLANNER_LIST_LIMIT", "10");

            let config = Config::load(DEFAULT_CONFIG_FILE)?;
            assert_eq!(config.port, 9090);
            assert_eq!(config.database_path, "data/tasks.db");
            assert_eq!(config.list_limit, 10);
            assert_eq!(config.host, "0.0.0.0");
            Ok(())
        });
    }

    #[test]
    fn test_cli_overrides_win() {
        let cli = Cli::parse_from(["planner", "--port", "1234", "--database", "other.db"]);
        let config = Config::default().with_overrides(&cli);

        assert_eq!(config.port, 1234);
        assert_eq!(config.database_path, "other.db");
        assert_eq!(config.host, "0.0.0.0");
    }
}
