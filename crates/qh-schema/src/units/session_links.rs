//! Session/config linkage.
//!
//! A narrower unit than the multi-user bootstrap: it guarantees the
//! `game_sessions.user_id`/`config_id` columns exist (tolerating that the
//! bootstrap may already have added them) and, on the server dialect, ties
//! them to their targets with named foreign-key constraints.

use super::{
    add_column_if_missing, add_foreign_key, drop_column_if_present, drop_constraint_if_exists,
    MigrationUnit,
};
use crate::error::SchemaResult;
use crate::introspect::Introspector;
use qh_db::DatabaseAdapter;

const UNIT: &str = "session-config-links";

pub const FK_USER: &str = "fk_game_sessions_user";
pub const FK_CONFIG: &str = "fk_game_sessions_config";

pub struct SessionConfigLinks;

impl MigrationUnit for SessionConfigLinks {
    fn name(&self) -> &'static str {
        UNIT
    }

    fn is_applied(&self, db: &dyn DatabaseAdapter) -> SchemaResult<bool> {
        let introspector = Introspector::new(db);
        if db.dialect().supports_named_constraints() {
            // The constraints are this unit's own artifacts; the columns may
            // have been created by the multi-user bootstrap.
            Ok(introspector.has_constraint("game_sessions", FK_USER)?
                && introspector.has_constraint("game_sessions", FK_CONFIG)?)
        } else {
            Ok(introspector.has_column("game_sessions", "user_id")?
                && introspector.has_column("game_sessions", "config_id")?)
        }
    }

    fn apply(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()> {
        let id = db.dialect().id_type();
        add_column_if_missing(UNIT, db, "game_sessions", "user_id", id)?;
        add_column_if_missing(UNIT, db, "game_sessions", "config_id", id)?;

        add_foreign_key(
            UNIT,
            db,
            "game_sessions",
            FK_USER,
            "user_id",
            "users (id)",
            "SET NULL",
        )?;
        add_foreign_key(
            UNIT,
            db,
            "game_sessions",
            FK_CONFIG,
            "config_id",
            "user_game_configs (id)",
            "SET NULL",
        )
    }

    fn reverse(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()> {
        // Constraints before the columns they depend on.
        drop_constraint_if_exists(UNIT, db, "game_sessions", FK_CONFIG)?;
        drop_constraint_if_exists(UNIT, db, "game_sessions", FK_USER)?;
        drop_column_if_present(UNIT, db, "game_sessions", "config_id")?;
        drop_column_if_present(UNIT, db, "game_sessions", "user_id")
    }
}
