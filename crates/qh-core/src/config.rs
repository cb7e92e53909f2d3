//! Configuration types and parsing for quizhive.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration from quizhive.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Deployment name, used in log output
    #[serde(default = "default_name")]
    pub name: String,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database connection configuration.
///
/// `type` is the single value that selects the active SQL dialect; every
/// dialect-sensitive statement in the engine is parametrized on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Database type (sqlite or postgres)
    #[serde(rename = "type", default)]
    pub db_type: DbType,

    /// Database path (for SQLite file-based or :memory:)
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Connection URL (for PostgreSQL)
    #[serde(default)]
    pub url: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: DbType::default(),
            path: default_db_path(),
            url: None,
        }
    }
}

/// Supported database backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    /// Embedded, file-based SQLite store
    #[default]
    Sqlite,
    /// Server-based PostgreSQL store
    Postgres,
}

fn default_name() -> String {
    "quizhive".to_string()
}

fn default_db_path() -> String {
    "quizhive.db".to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for quizhive.yml or quizhive.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("quizhive.yml");
        let yaml_path = dir.join("quizhive.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            })
        }
    }

    /// Validate cross-field constraints that serde cannot express
    pub fn validate(&self) -> CoreResult<()> {
        match self.database.db_type {
            DbType::Sqlite => {
                if self.database.path.trim().is_empty() {
                    return Err(CoreError::ConfigInvalid {
                        message: "database.path must not be empty for type: sqlite".to_string(),
                    });
                }
            }
            DbType::Postgres => {
                let url = self.database.url.as_deref().unwrap_or("");
                if url.trim().is_empty() {
                    return Err(CoreError::ConfigInvalid {
                        message: "database.url is required for type: postgres".to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            database: DatabaseConfig::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
