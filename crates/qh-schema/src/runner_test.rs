//! End-to-end tests for the migration runner over the embedded dialect:
//! fresh-store bootstrap, idempotence, partial prior state, reversal,
//! ordering, and ledger backfill.

use crate::error::SchemaError;
use crate::hasher::SecretHasher;
use crate::introspect::Introspector;
use crate::runner::MigrationRunner;
use crate::seed_data::{DEFAULT_ADMIN_SECRET, DEFAULT_HONEY_CURVE};
use crate::units::{CoreGameSchema, LevelHoneyConfig, MigrationUnit, SessionConfigLinks};
use crate::SchemaResult;
use qh_db::{DatabaseAdapter, SqliteAdapter};
use std::sync::Arc;

/// Deterministic stand-in for the external hashing collaborator.
struct StubHasher;

impl SecretHasher for StubHasher {
    fn hash(&self, plaintext: &str) -> SchemaResult<String> {
        Ok(format!("stub${}", plaintext.len()))
    }
}

fn runner() -> MigrationRunner {
    MigrationRunner::with_default_units(Arc::new(StubHasher))
}

fn db() -> SqliteAdapter {
    SqliteAdapter::in_memory().unwrap()
}

fn count(db: &dyn DatabaseAdapter, sql: &str) -> i64 {
    db.query_i64(sql, &[]).unwrap()
}

fn has_column(db: &dyn DatabaseAdapter, table: &str, column: &str) -> bool {
    Introspector::new(db).has_column(table, column).unwrap()
}

// ── Fresh-store scenario ───────────────────────────────────────────────

#[test]
fn fresh_store_bootstraps_full_schema_and_seeds() {
    let db = db();
    let report = runner().run_pending(&db).unwrap();

    assert!(report.applied.contains(&"core-game"));
    assert!(report.applied.contains(&"multi-user"));
    assert!(report.applied.contains(&"player-identities"));
    assert!(report.applied.contains(&"level-honey-config"));

    // Exactly one admin, active.
    assert_eq!(count(&db, "SELECT COUNT(*) FROM users"), 1);
    assert_eq!(
        count(
            &db,
            "SELECT COUNT(*) FROM users WHERE role = 'admin' AND status = 'active'"
        ),
        1
    );

    // Five default categories, ten curve rows.
    assert_eq!(count(&db, "SELECT COUNT(*) FROM question_categories"), 5);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM level_honey_config"), 10);
    let curve = db
        .query("SELECT level, honey_value FROM level_honey_config ORDER BY level", &[])
        .unwrap();
    for (row, (level, honey)) in curve.iter().zip(DEFAULT_HONEY_CURVE) {
        assert_eq!(row.get(0).unwrap().as_i64(), Some(level));
        assert_eq!(row.get(1).unwrap().as_i64(), Some(honey));
    }

    // The four additive columns.
    assert!(has_column(&db, "game_sessions", "user_id"));
    assert!(has_column(&db, "game_sessions", "config_id"));
    assert!(has_column(&db, "answers", "question_source"));
    assert!(has_column(&db, "answers", "custom_question_id"));

    // Player identity linkage.
    assert!(Introspector::new(&db).has_table("player_identities").unwrap());
    assert!(has_column(&db, "participants", "player_identity_id"));

    // Every unit ends up recorded, whichever path satisfied it.
    assert_eq!(count(&db, "SELECT COUNT(*) FROM schema_migrations"), 5);
}

#[test]
fn second_run_is_idempotent() {
    let db = db();
    runner().run_pending(&db).unwrap();
    let report = runner().run_pending(&db).unwrap();

    assert!(report.applied.is_empty());
    assert_eq!(report.skipped.len(), 5);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM users"), 1);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM question_categories"), 5);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM level_honey_config"), 10);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM schema_migrations"), 5);
}

#[test]
fn admin_verifier_is_not_the_plaintext() {
    let db = db();
    runner().run_pending(&db).unwrap();
    let rows = db.query("SELECT password_hash FROM users", &[]).unwrap();
    let stored = rows[0].get(0).unwrap().as_str().unwrap().to_string();
    assert_ne!(stored, DEFAULT_ADMIN_SECRET);
    assert!(stored.starts_with("stub$"));
}

// ── Partial prior state ────────────────────────────────────────────────

#[test]
fn linkage_unit_adds_only_the_missing_column() {
    let db = db();
    CoreGameSchema.apply(&db).unwrap();
    // Simulate a prior manual patch that added user_id but not config_id.
    db.execute_batch("ALTER TABLE game_sessions ADD COLUMN user_id INTEGER")
        .unwrap();

    SessionConfigLinks.apply(&db).unwrap();
    assert!(has_column(&db, "game_sessions", "user_id"));
    assert!(has_column(&db, "game_sessions", "config_id"));
}

#[test]
fn curve_reseed_fills_gaps_without_overwriting_edits() {
    let db = db();
    LevelHoneyConfig.apply(&db).unwrap();
    db.execute_batch(
        "UPDATE level_honey_config SET honey_value = 999 WHERE level <= 5;
         DELETE FROM level_honey_config WHERE level > 5;",
    )
    .unwrap();

    LevelHoneyConfig.apply(&db).unwrap();
    assert_eq!(count(&db, "SELECT COUNT(*) FROM level_honey_config"), 10);
    assert_eq!(
        count(
            &db,
            "SELECT COUNT(*) FROM level_honey_config WHERE level <= 5 AND honey_value = 999"
        ),
        5
    );
    assert_eq!(
        count(
            &db,
            "SELECT honey_value FROM level_honey_config WHERE level = 10"
        ),
        500
    );
}

// ── Ordering ───────────────────────────────────────────────────────────

#[test]
fn linkage_unit_faults_without_its_dependencies() {
    let db = db();
    let err = SessionConfigLinks.apply(&db).unwrap_err();
    assert!(matches!(err, SchemaError::UnitFailed { unit, .. } if unit == "session-config-links"));
}

// ── Reversal ───────────────────────────────────────────────────────────

#[test]
fn reversing_player_identities_removes_its_artifacts() {
    let db = db();
    let runner = runner();
    runner.run_pending(&db).unwrap();

    runner.rollback(&db, "player-identities").unwrap();

    let introspector = Introspector::new(&db);
    assert!(!introspector.has_table("player_identities").unwrap());
    assert!(!has_column(&db, "participants", "player_identity_id"));

    let status = runner.status(&db).unwrap();
    let entry = status.iter().find(|s| s.name == "player-identities").unwrap();
    assert!(!entry.applied);
}

#[test]
fn reversed_unit_reapplies_on_next_run() {
    let db = db();
    let runner = runner();
    runner.run_pending(&db).unwrap();
    runner.rollback(&db, "player-identities").unwrap();

    let report = runner.run_pending(&db).unwrap();
    assert_eq!(report.applied, vec!["player-identities"]);
    assert!(Introspector::new(&db).has_table("player_identities").unwrap());
}

#[test]
fn rollback_of_unknown_unit_is_rejected() {
    let db = db();
    let err = runner().rollback(&db, "no-such-unit").unwrap_err();
    assert!(matches!(err, SchemaError::UnknownUnit(name) if name == "no-such-unit"));
}

// ── Ledger ─────────────────────────────────────────────────────────────

#[test]
fn preexisting_schema_is_backfilled_into_the_ledger() {
    let db = db();
    // A store migrated before the ledger existed: artifacts present, no
    // schema_migrations rows.
    let hasher: Arc<dyn SecretHasher> = Arc::new(StubHasher);
    for unit in crate::units::all_units(hasher) {
        unit.apply(&db).unwrap();
    }
    assert!(!Introspector::new(&db).has_table("schema_migrations").unwrap());

    let report = runner().run_pending(&db).unwrap();
    assert!(report.applied.is_empty());
    assert_eq!(report.skipped.len(), 5);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM schema_migrations"), 5);
}

#[test]
fn status_tracks_pending_and_applied() {
    let db = db();
    let runner = runner();

    let before = runner.status(&db).unwrap();
    assert_eq!(before.len(), 5);
    assert!(before.iter().all(|s| !s.applied));

    runner.run_pending(&db).unwrap();
    let after = runner.status(&db).unwrap();
    assert!(after.iter().all(|s| s.applied));
}
