//! Multi-user schema bootstrap.
//!
//! Creates the account, category, question and per-user config tables,
//! extends the base game tables additively, and seeds the default
//! categories and the admin account.

use super::{add_column_if_missing, drop_column_if_present, exec_ddl, MigrationUnit};
use crate::error::{SchemaError, SchemaResult};
use crate::hasher::SecretHasher;
use crate::introspect::Introspector;
use crate::seed::seed_if_empty;
use crate::seed_data::{DEFAULT_ADMIN, DEFAULT_ADMIN_SECRET, DEFAULT_CATEGORIES};
use qh_db::{DatabaseAdapter, Value};
use std::sync::Arc;

const UNIT: &str = "multi-user";

pub struct MultiUserSchema {
    hasher: Arc<dyn SecretHasher>,
}

impl MultiUserSchema {
    pub fn new(hasher: Arc<dyn SecretHasher>) -> Self {
        Self { hasher }
    }

    fn create_tables(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()> {
        let d = db.dialect();

        exec_ddl(
            UNIT,
            db,
            &format!(
                "CREATE TABLE IF NOT EXISTS users (\
                    id {pk}, \
                    email VARCHAR(255) NOT NULL UNIQUE, \
                    password_hash VARCHAR(255) NOT NULL, \
                    name VARCHAR(255) NOT NULL, \
                    role VARCHAR(20) NOT NULL DEFAULT 'host' \
                        CHECK (role IN ('admin', 'host')), \
                    status VARCHAR(20) NOT NULL DEFAULT 'pending' \
                        CHECK (status IN ('active', 'inactive', 'pending')), \
                    created_at {ts} NOT NULL DEFAULT {now}, \
                    approved_at {ts}, \
                    approved_by {id} REFERENCES users(id), \
                    last_login {ts}\
                )",
                pk = d.auto_increment_primary_key(),
                id = d.id_type(),
                ts = d.timestamp_type(),
                now = d.timestamp_default(),
            ),
        )?;

        exec_ddl(
            UNIT,
            db,
            &format!(
                "CREATE TABLE IF NOT EXISTS question_categories (\
                    id {pk}, \
                    name VARCHAR(100) NOT NULL UNIQUE, \
                    description TEXT, \
                    color VARCHAR(20), \
                    icon VARCHAR(50), \
                    is_active {bool} NOT NULL DEFAULT {yes}, \
                    created_by {id} REFERENCES users(id), \
                    created_at {ts} NOT NULL DEFAULT {now}\
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
                "CREATE TABLE IF NOT EXISTS questions (\
                    id {pk}, \
                    question_id VARCHAR(50) NOT NULL UNIQUE, \
                    category VARCHAR(100) NOT NULL, \
                    question TEXT NOT NULL, \
                    options {json} NOT NULL, \
                    correct_answer INTEGER NOT NULL, \
                    level INTEGER NOT NULL CHECK (level BETWEEN 1 AND 10), \
                    honey_value INTEGER NOT NULL DEFAULT 10 CHECK (honey_value >= 5), \
                    created_by {id} REFERENCES users(id), \
                    is_active {bool} NOT NULL DEFAULT {yes}, \
                    usage_count INTEGER NOT NULL DEFAULT 0, \
                    difficulty_rating REAL, \
                    explanation TEXT, \
                    created_at {ts} NOT NULL DEFAULT {now}\
                )",
                pk = d.auto_increment_primary_key(),
                id = d.id_type(),
                json = d.json_column_type(),
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
                "CREATE TABLE IF NOT EXISTS user_game_configs (\
                    id {pk}, \
                    user_id {id} NOT NULL REFERENCES users(id), \
                    config_name VARCHAR(100) NOT NULL, \
                    honey_multiplier REAL NOT NULL DEFAULT 1.0 \
                        CHECK (honey_multiplier BETWEEN 0.1 AND 5.0), \
                    time_limit INTEGER NOT NULL DEFAULT 30 \
                        CHECK (time_limit BETWEEN 10 AND 120), \
                    custom_questions_only {bool} NOT NULL DEFAULT {no}, \
                    allow_lifelines {bool} NOT NULL DEFAULT {yes}, \
                    max_participants INTEGER NOT NULL DEFAULT 50, \
                    auto_advance {bool} NOT NULL DEFAULT {no}, \
                    theme_color VARCHAR(20) NOT NULL DEFAULT '#FFD700', \
                    is_default {bool} NOT NULL DEFAULT {no}, \
                    created_at {ts} NOT NULL DEFAULT {now}, \
                    UNIQUE (user_id, config_name)\
                )",
                pk = d.auto_increment_primary_key(),
                id = d.id_type(),
                bool = d.boolean_type(),
                yes = d.boolean_literal(true),
                no = d.boolean_literal(false),
                ts = d.timestamp_type(),
                now = d.timestamp_default(),
            ),
        )?;

        for sql in [
            "CREATE INDEX IF NOT EXISTS idx_questions_category ON questions (category)",
            "CREATE INDEX IF NOT EXISTS idx_questions_level ON questions (level)",
            "CREATE INDEX IF NOT EXISTS idx_questions_created_by ON questions (created_by)",
            "CREATE INDEX IF NOT EXISTS idx_user_game_configs_user ON user_game_configs (user_id)",
        ] {
            exec_ddl(UNIT, db, sql)?;
        }
        Ok(())
    }

    fn extend_game_tables(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()> {
        let id = db.dialect().id_type();
        add_column_if_missing(UNIT, db, "game_sessions", "user_id", id)?;
        add_column_if_missing(UNIT, db, "game_sessions", "config_id", id)?;
        add_column_if_missing(
            UNIT,
            db,
            "answers",
            "question_source",
            "VARCHAR(20) NOT NULL DEFAULT 'default'",
        )?;
        add_column_if_missing(UNIT, db, "answers", "custom_question_id", id)?;
        Ok(())
    }

    fn seed_categories(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()> {
        let rows: Vec<Vec<Value>> = DEFAULT_CATEGORIES
            .iter()
            .map(|c| {
                vec![
                    Value::from(c.name),
                    Value::from(c.description),
                    Value::from(c.color),
                    Value::from(c.icon),
                ]
            })
            .collect();
        seed_if_empty(
            db,
            "question_categories",
            &["name", "description", "color", "icon"],
            &rows,
        )?;
        Ok(())
    }

    /// Seed the admin account when no user exists yet. The plaintext goes
    /// through the injected hasher and is never persisted or logged.
    fn seed_admin(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()> {
        let count = db
            .query_i64("SELECT COUNT(*) FROM users", &[])
            .map_err(|source| SchemaError::Seed {
                table: "users".to_string(),
                source,
            })?;
        if count > 0 {
            log::debug!("users table already populated, skipping admin seed");
            return Ok(());
        }

        let verifier = self.hasher.hash(DEFAULT_ADMIN_SECRET)?;
        let d = db.dialect();
        let sql = format!(
            "INSERT INTO users (email, password_hash, name, role, status, approved_at) \
             VALUES ({}, {})",
            d.placeholders(5),
            d.timestamp_default()
        );
        let params = [
            Value::from(DEFAULT_ADMIN.email),
            Value::from(verifier),
            Value::from(DEFAULT_ADMIN.name),
            Value::from(DEFAULT_ADMIN.role),
            Value::from(DEFAULT_ADMIN.status),
        ];
        match db.execute(&sql, &params) {
            Ok(_) => {
                log::info!("seeded default admin account {}", DEFAULT_ADMIN.email);
                Ok(())
            }
            Err(e) if e.is_unique_violation() => {
                log::warn!("admin account already present, treating as seeded");
                Ok(())
            }
            Err(source) => Err(SchemaError::Seed {
                table: "users".to_string(),
                source,
            }),
        }
    }
}

impl MigrationUnit for MultiUserSchema {
    fn name(&self) -> &'static str {
        UNIT
    }

    fn is_applied(&self, db: &dyn DatabaseAdapter) -> SchemaResult<bool> {
        Introspector::new(db).has_table("users")
    }

    fn apply(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()> {
        self.create_tables(db)?;
        self.extend_game_tables(db)?;
        self.seed_categories(db)?;
        self.seed_admin(db)
    }

    fn reverse(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()> {
        for sql in [
            "DROP INDEX IF EXISTS idx_user_game_configs_user",
            "DROP INDEX IF EXISTS idx_questions_created_by",
            "DROP INDEX IF EXISTS idx_questions_level",
            "DROP INDEX IF EXISTS idx_questions_category",
        ] {
            exec_ddl(UNIT, db, sql)?;
        }

        drop_column_if_present(UNIT, db, "answers", "custom_question_id")?;
        drop_column_if_present(UNIT, db, "answers", "question_source")?;
        drop_column_if_present(UNIT, db, "game_sessions", "config_id")?;
        drop_column_if_present(UNIT, db, "game_sessions", "user_id")?;

        // Children before the users table they reference.
        for sql in [
            "DROP TABLE IF EXISTS user_game_configs",
            "DROP TABLE IF EXISTS questions",
            "DROP TABLE IF EXISTS question_categories",
            "DROP TABLE IF EXISTS users",
        ] {
            exec_ddl(UNIT, db, sql)?;
        }
        Ok(())
    }
}
