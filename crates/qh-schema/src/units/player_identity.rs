//! Player identity bootstrap.
//!
//! Introduces the cross-session `player_identities` aggregate and links
//! participants to it. Anonymous participants stay valid: the link column
//! is nullable and clears when the identity is deleted.

use super::{add_column_if_missing, drop_column_if_present, exec_ddl, MigrationUnit};
use crate::error::SchemaResult;
use crate::introspect::Introspector;
use qh_db::DatabaseAdapter;

const UNIT: &str = "player-identities";

pub struct PlayerIdentities;

impl MigrationUnit for PlayerIdentities {
    fn name(&self) -> &'static str {
        UNIT
    }

    fn is_applied(&self, db: &dyn DatabaseAdapter) -> SchemaResult<bool> {
        let introspector = Introspector::new(db);
        Ok(introspector.has_table("player_identities")?
            && introspector.has_column("participants", "player_identity_id")?)
    }

    fn apply(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()> {
        let d = db.dialect();

        exec_ddl(
            UNIT,
            db,
            &format!(
                "CREATE TABLE IF NOT EXISTS player_identities (\
                    id {pk}, \
                    handle VARCHAR(50) NOT NULL UNIQUE, \
                    display_name VARCHAR(100), \
                    total_honey INTEGER NOT NULL DEFAULT 0, \
                    sessions_played INTEGER NOT NULL DEFAULT 0, \
                    best_level INTEGER NOT NULL DEFAULT 0, \
                    win_count INTEGER NOT NULL DEFAULT 0, \
                    total_answers INTEGER NOT NULL DEFAULT 0, \
                    correct_answers INTEGER NOT NULL DEFAULT 0, \
                    created_by {id} REFERENCES users(id) ON DELETE SET NULL, \
                    first_seen {ts} NOT NULL DEFAULT {now}, \
                    last_seen {ts} NOT NULL DEFAULT {now}\
                )",
                pk = d.auto_increment_primary_key(),
                id = d.id_type(),
                ts = d.timestamp_type(),
                now = d.timestamp_default(),
            ),
        )?;

        add_column_if_missing(
            UNIT,
            db,
            "participants",
            "player_identity_id",
            &format!(
                "{} REFERENCES player_identities(id) ON DELETE SET NULL",
                d.id_type()
            ),
        )?;

        for sql in [
            "CREATE INDEX IF NOT EXISTS idx_player_identities_handle ON player_identities (handle)",
            "CREATE INDEX IF NOT EXISTS idx_participants_player_identity \
             ON participants (player_identity_id)",
        ] {
            exec_ddl(UNIT, db, sql)?;
        }
        Ok(())
    }

    fn reverse(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()> {
        exec_ddl(
            UNIT,
            db,
            "DROP INDEX IF EXISTS idx_participants_player_identity",
        )?;
        drop_column_if_present(UNIT, db, "participants", "player_identity_id")?;
        exec_ddl(
            UNIT,
            db,
            "DROP INDEX IF EXISTS idx_player_identities_handle",
        )?;
        exec_ddl(UNIT, db, "DROP TABLE IF EXISTS player_identities")
    }
}
