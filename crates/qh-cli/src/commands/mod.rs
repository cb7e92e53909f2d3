//! CLI command implementations

pub mod migrate;
pub mod rollback;
pub mod status;

use crate::hasher::Argon2Hasher;
use qh_schema::MigrationRunner;
use std::sync::Arc;

/// Runner over the platform's full unit list with the real hasher.
pub(crate) fn default_runner() -> MigrationRunner {
    MigrationRunner::with_default_units(Arc::new(Argon2Hasher))
}
