//! Per-level reward table.
//!
//! One row per level 1..=10, seeded from the default curve. Reseeding
//! completes missing levels and never overwrites operator-edited values.

use super::{exec_ddl, MigrationUnit};
use crate::error::SchemaResult;
use crate::introspect::Introspector;
use crate::seed::seed_if_absent_by_key;
use crate::seed_data::DEFAULT_HONEY_CURVE;
use qh_db::{DatabaseAdapter, Value};

const UNIT: &str = "level-honey-config";

pub struct LevelHoneyConfig;

impl MigrationUnit for LevelHoneyConfig {
    fn name(&self) -> &'static str {
        UNIT
    }

    fn is_applied(&self, db: &dyn DatabaseAdapter) -> SchemaResult<bool> {
        Introspector::new(db).has_table("level_honey_config")
    }

    fn apply(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()> {
        let d = db.dialect();

        exec_ddl(
            UNIT,
            db,
            &format!(
                "CREATE TABLE IF NOT EXISTS level_honey_config (\
                    level INTEGER PRIMARY KEY CHECK (level BETWEEN 1 AND 10), \
                    honey_value INTEGER NOT NULL CHECK (honey_value >= 1), \
                    updated_at {ts} NOT NULL DEFAULT {now}, \
                    updated_by {id}\
                )",
                id = d.id_type(),
                ts = d.timestamp_type(),
                now = d.timestamp_default(),
            ),
        )?;

        let rows: Vec<Vec<Value>> = DEFAULT_HONEY_CURVE
            .iter()
            .map(|(level, honey)| vec![Value::from(*level), Value::from(*honey)])
            .collect();
        seed_if_absent_by_key(
            db,
            "level_honey_config",
            "level",
            &["level", "honey_value"],
            &rows,
        )?;
        Ok(())
    }

    fn reverse(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()> {
        exec_ddl(UNIT, db, "DROP TABLE IF EXISTS level_honey_config")
    }
}
