//! qh-schema - Schema migration engine for QuizHive
//!
//! Evolves the persistent schema of the quiz platform across both SQL
//! dialects without destructive resets and without double-applying changes.
//! The engine runs once per process start, before any request serving:
//! every unit is idempotent, seed data is inserted at most once, and a
//! faulted unit aborts startup rather than leaving the schema ambiguous.

pub mod error;
pub mod hasher;
pub mod introspect;
pub mod ledger;
pub mod runner;
pub mod seed;
pub mod seed_data;
pub mod units;

pub use error::{SchemaError, SchemaResult};
pub use hasher::SecretHasher;
pub use introspect::Introspector;
pub use runner::{MigrationRunner, RunReport, UnitStatus};
pub use units::MigrationUnit;
