//! Base game schema: sessions, participants, answers.
//!
//! These tables predate every other unit; all later units only extend them
//! additively.

use super::{exec_ddl, MigrationUnit};
use crate::error::SchemaResult;
use crate::introspect::Introspector;
use qh_db::DatabaseAdapter;

const UNIT: &str = "core-game";

pub struct CoreGameSchema;

impl MigrationUnit for CoreGameSchema {
    fn name(&self) -> &'static str {
        UNIT
    }

    fn is_applied(&self, db: &dyn DatabaseAdapter) -> SchemaResult<bool> {
        Introspector::new(db).has_table("game_sessions")
    }

    fn apply(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()> {
        let d = db.dialect();

        exec_ddl(
            UNIT,
            db,
            &format!(
                "CREATE TABLE IF NOT EXISTS game_sessions (\
                    id {pk}, \
                    session_code VARCHAR(12) NOT NULL UNIQUE, \
                    status VARCHAR(20) NOT NULL DEFAULT 'lobby' \
                        CHECK (status IN ('lobby', 'active', 'finished')), \
                    current_level INTEGER NOT NULL DEFAULT 1, \
                    current_question_id VARCHAR(50), \
                    started_at {ts}, \
                    ended_at {ts}, \
                    created_at {ts} NOT NULL DEFAULT {now}\
                )",
                pk = d.auto_increment_primary_key(),
                ts = d.timestamp_type(),
                now = d.timestamp_default(),
            ),
        )?;

        exec_ddl(
            UNIT,
            db,
            &format!(
                "CREATE TABLE IF NOT EXISTS participants (\
                    id {pk}, \
                    session_id {id} NOT NULL REFERENCES game_sessions(id), \
                    nickname VARCHAR(50) NOT NULL, \
                    honey INTEGER NOT NULL DEFAULT 0, \
                    is_active {bool} NOT NULL DEFAULT {yes}, \
                    joined_at {ts} NOT NULL DEFAULT {now}\
                )",
                pk = d.auto_increment_primary_key(),
                id = d.id_type(),
                bool = d.boolean_type(),
                yes = d.boolean_literal(true),
                ts = d.timestamp_type(),
                now = d.timestamp_default(),
            ),
        )?;

        exec_ddl(
            UNIT,
            db,
            &format!(
                "CREATE TABLE IF NOT EXISTS answers (\
                    id {pk}, \
                    session_id {id} NOT NULL REFERENCES game_sessions(id), \
                    participant_id {id} NOT NULL REFERENCES participants(id), \
                    question_id VARCHAR(50) NOT NULL, \
                    answer_index INTEGER, \
                    is_correct {bool} NOT NULL DEFAULT {no}, \
                    honey_earned INTEGER NOT NULL DEFAULT 0, \
                    answered_at {ts} NOT NULL DEFAULT {now}\
                )",
                pk = d.auto_increment_primary_key(),
                id = d.id_type(),
                bool = d.boolean_type(),
                no = d.boolean_literal(false),
                ts = d.timestamp_type(),
                now = d.timestamp_default(),
            ),
        )?;

        for sql in [
            "CREATE INDEX IF NOT EXISTS idx_participants_session ON participants (session_id)",
            "CREATE INDEX IF NOT EXISTS idx_answers_session ON answers (session_id)",
            "CREATE INDEX IF NOT EXISTS idx_answers_participant ON answers (participant_id)",
        ] {
            exec_ddl(UNIT, db, sql)?;
        }
        Ok(())
    }

    fn reverse(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()> {
        // Children before parents.
        for sql in [
            "DROP TABLE IF EXISTS answers",
            "DROP TABLE IF EXISTS participants",
            "DROP TABLE IF EXISTS game_sessions",
        ] {
            exec_ddl(UNIT, db, sql)?;
        }
        Ok(())
    }
}
