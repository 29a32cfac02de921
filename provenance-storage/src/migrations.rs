//! Schema migrations, tracked via `PRAGMA user_version`.

use provenance_core::errors::StorageError;
use rusqlite::Connection;

/// Ordered migration scripts; index + 1 is the schema version.
const MIGRATIONS: &[&str] = &[
    // v1 — framework catalog + trained models
    r#"
    CREATE TABLE IF NOT EXISTS frameworks (
        id          INTEGER PRIMARY KEY,
        name        TEXT NOT NULL,
        pattern     TEXT NOT NULL,
        is_regex    INTEGER NOT NULL DEFAULT 0,
        language    TEXT NOT NULL,
        is_root     INTEGER NOT NULL DEFAULT 0,
        level1      TEXT,
        level2      TEXT,
        level3      TEXT,
        level4      TEXT,
        level5      TEXT,
        description TEXT,
        location    TEXT
    );
    CREATE UNIQUE INDEX IF NOT EXISTS idx_frameworks_key
        ON frameworks (pattern, language);
    CREATE INDEX IF NOT EXISTS idx_frameworks_language
        ON frameworks (language);

    CREATE TABLE IF NOT EXISTS nlp_models (
        language   TEXT PRIMARY KEY,
        model_json TEXT NOT NULL,
        trained_at INTEGER NOT NULL
    );
    "#,
];

/// Apply any pending migrations.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current: u32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    for (idx, script) in MIGRATIONS.iter().enumerate().skip(current as usize) {
        let version = (idx + 1) as u32;
        conn.execute_batch(script)
            .map_err(|e| StorageError::MigrationFailed {
                version,
                message: e.to_string(),
            })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| StorageError::MigrationFailed {
                version,
                message: e.to_string(),
            })?;
        tracing::debug!(version, "applied migration");
    }

    Ok(())
}
