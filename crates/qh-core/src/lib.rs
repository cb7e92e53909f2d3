//! qh-core - Configuration for the QuizHive schema engine
//!
//! Provides the `quizhive.yml` configuration model, including the single
//! `database.type` value that selects the active SQL dialect before the
//! migration runner starts.

pub mod config;
pub mod error;

pub use config::{Config, DatabaseConfig, DbType};
pub use error::{CoreError, CoreResult};
