//! Migration runner.
//!
//! Owns the ordered unit list. Runs once per process startup, strictly
//! sequentially, before any request serving; a faulted unit halts the
//! sequence so later units never run against a half-evolved schema.

use crate::error::{SchemaError, SchemaResult};
use crate::hasher::SecretHasher;
use crate::ledger;
use crate::units::{all_units, MigrationUnit};
use qh_db::DatabaseAdapter;
use std::sync::Arc;

/// Outcome of a `run_pending` pass.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Units applied by this run, in order.
    pub applied: Vec<&'static str>,
    /// Units that were already applied before this run.
    pub skipped: Vec<&'static str>,
}

/// Applied/pending state of one unit, for operator inspection.
#[derive(Debug)]
pub struct UnitStatus {
    pub name: &'static str,
    pub applied: bool,
    pub applied_at: Option<String>,
}

/// Applies pending units in registration order and reverses single units
/// on operator request.
pub struct MigrationRunner {
    units: Vec<Box<dyn MigrationUnit>>,
}

impl MigrationRunner {
    pub fn new(units: Vec<Box<dyn MigrationUnit>>) -> Self {
        Self { units }
    }

    /// Runner over the platform's full unit list.
    pub fn with_default_units(hasher: Arc<dyn SecretHasher>) -> Self {
        Self::new(all_units(hasher))
    }

    /// Registered unit names, in application order.
    pub fn unit_names(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.name()).collect()
    }

    /// Apply every not-yet-applied unit, in order.
    ///
    /// The ledger is the primary applied-check; a unit whose artifacts are
    /// observably present without a ledger row (store migrated before the
    /// ledger existed) is recorded and skipped. The first fault halts the
    /// sequence and propagates — the caller must treat that as a startup
    /// failure, not serve requests against an incomplete schema.
    pub fn run_pending(&self, db: &dyn DatabaseAdapter) -> SchemaResult<RunReport> {
        ledger::ensure_ledger(db)?;

        let mut report = RunReport::default();
        for unit in &self.units {
            let name = unit.name();
            if ledger::is_recorded(db, name)? {
                log::debug!("migration '{name}' already recorded, skipping");
                report.skipped.push(name);
                continue;
            }
            if unit.is_applied(db)? {
                log::info!("migration '{name}' detected as applied, backfilling ledger");
                ledger::record(db, name)?;
                report.skipped.push(name);
                continue;
            }

            log::info!("applying migration '{name}'");
            if let Err(err) = unit.apply(db) {
                log::error!("migration '{name}' failed: {err}");
                return Err(err);
            }
            ledger::record(db, name)?;
            report.applied.push(name);
        }
        Ok(report)
    }

    /// Reverse one named unit. Does not cascade: the operator must roll
    /// back dependent units first.
    pub fn rollback(&self, db: &dyn DatabaseAdapter, name: &str) -> SchemaResult<()> {
        let unit = self
            .units
            .iter()
            .find(|u| u.name() == name)
            .ok_or_else(|| SchemaError::UnknownUnit(name.to_string()))?;

        log::info!("reversing migration '{}'", unit.name());
        unit.reverse(db)?;
        ledger::ensure_ledger(db)?;
        ledger::erase(db, unit.name())?;
        Ok(())
    }

    /// Applied/pending state per unit, without mutating anything beyond
    /// ensuring the ledger table exists.
    pub fn status(&self, db: &dyn DatabaseAdapter) -> SchemaResult<Vec<UnitStatus>> {
        ledger::ensure_ledger(db)?;
        self.units
            .iter()
            .map(|unit| {
                let name = unit.name();
                let applied_at = ledger::applied_at(db, name)?;
                let applied = applied_at.is_some() || unit.is_applied(db)?;
                Ok(UnitStatus {
                    name,
                    applied,
                    applied_at,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
