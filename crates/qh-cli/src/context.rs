//! Runtime context for CLI commands

use anyhow::{Context, Result};
use qh_core::{Config, CoreError, DbType};
use qh_db::{DatabaseAdapter, PostgresAdapter, SqliteAdapter};
use std::path::Path;

use crate::cli::GlobalArgs;

/// Runtime context containing loaded configuration and database connection
pub struct RuntimeContext {
    /// The loaded configuration
    pub config: Config,

    /// Database connection
    pub db: Box<dyn DatabaseAdapter>,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let config = if let Some(config_path) = &args.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else {
            match Config::load_from_dir(Path::new(&args.project_dir)) {
                Ok(config) => config,
                // A missing config file is fine when the target is explicit.
                Err(CoreError::ConfigNotFound { .. }) if args.target.is_some() => Config::default(),
                Err(e) => return Err(e).context("Failed to load project configuration"),
            }
        };

        let db = connect(&config, args.target.as_deref())
            .context("Failed to connect to database")?;

        Ok(Self {
            config,
            db,
            verbose: args.verbose,
        })
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }
}

/// Open the adapter selected by the config, or by the --target override.
fn connect(config: &Config, target: Option<&str>) -> Result<Box<dyn DatabaseAdapter>> {
    if let Some(target) = target {
        let db: Box<dyn DatabaseAdapter> =
            if target.starts_with("postgres://") || target.starts_with("postgresql://") {
                Box::new(PostgresAdapter::connect(target)?)
            } else {
                Box::new(SqliteAdapter::new(target)?)
            };
        log::debug!("connected to target override ({})", db.dialect());
        return Ok(db);
    }

    match config.database.db_type {
        DbType::Sqlite => {
            log::debug!("opening sqlite database at {}", config.database.path);
            Ok(Box::new(SqliteAdapter::new(&config.database.path)?))
        }
        DbType::Postgres => {
            let url = config.database.url.as_deref().unwrap_or_default();
            log::debug!("connecting to postgres server");
            Ok(Box::new(PostgresAdapter::connect(url)?))
        }
    }
}
