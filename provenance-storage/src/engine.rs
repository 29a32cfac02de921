//! `SqliteStorage` — unified storage engine.
//!
//! Owns the single write-serialized connection plus a read cache, and
//! implements the `KnowledgeBase` trait from `provenance-core`. The
//! `(pattern, language)` unique index plus `INSERT .. ON CONFLICT DO
//! UPDATE .. RETURNING` makes find-or-create atomic from the oracle's
//! perspective, so concurrent minting can never register a duplicate.

use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use moka::sync::Cache;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use provenance_core::errors::{ClassifyError, StorageError};
use provenance_core::traits::KnowledgeBase;
use provenance_core::types::framework::{FrameworkRecord, Taxonomy};
use provenance_core::types::language::Language;

const FIND_CACHE_CAPACITY: u64 = 4_096;

/// SQLite-backed knowledge base and model store.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
    /// Read cache for exact pattern lookups, keyed by `pattern \x1f language`.
    find_cache: Cache<String, FrameworkRecord>,
}

impl SqliteStorage {
    /// Open a file-backed store. Applies pragmas and runs migrations.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(sqlite_err)?;
        Self::init(conn)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(sqlite_err)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(sqlite_err)?;
        conn.pragma_update(None, "synchronous", "NORMAL")
            .map_err(sqlite_err)?;
        crate::migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            find_cache: Cache::new(FIND_CACHE_CAPACITY),
        })
    }

    /// Persist a trained model's JSON for a language, replacing any
    /// previous one wholesale.
    pub fn save_model(&self, language: Language, model_json: &str) -> Result<(), StorageError> {
        let trained_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO nlp_models (language, model_json, trained_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (language) DO UPDATE SET
                model_json = excluded.model_json,
                trained_at = excluded.trained_at",
            params![language.key(), model_json, trained_at],
        )
        .map_err(sqlite_err)?;
        Ok(())
    }

    /// Load a previously persisted model's JSON, if any.
    pub fn load_model(&self, language: Language) -> Result<Option<String>, StorageError> {
        let conn = self.lock_conn()?;
        conn.query_row(
            "SELECT model_json FROM nlp_models WHERE language = ?1",
            params![language.key()],
            |row| row.get(0),
        )
        .optional()
        .map_err(sqlite_err)
    }

    /// Number of catalog records, for diagnostics.
    pub fn record_count(&self) -> Result<usize, StorageError> {
        let conn = self.lock_conn()?;
        conn.query_row("SELECT COUNT(*) FROM frameworks", [], |row| row.get(0))
            .map(|n: i64| n as usize)
            .map_err(sqlite_err)
    }

    fn lock_conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::DbBusy)
    }

    fn cache_key(pattern: &str, language: Language) -> String {
        format!("{}\u{1f}{}", pattern, language.key())
    }
}

impl KnowledgeBase for SqliteStorage {
    /// Exact `(pattern, language)` lookup first; on a miss, regex records
    /// for the language are matched against the path so regex boundaries
    /// minted in earlier runs still resolve.
    fn find_by_pattern(
        &self,
        pattern: &str,
        language: Language,
    ) -> Result<Option<FrameworkRecord>, ClassifyError> {
        let key = Self::cache_key(pattern, language);
        if let Some(hit) = self.find_cache.get(&key) {
            return Ok(Some(hit));
        }

        let conn = self.lock_conn()?;
        let exact = conn
            .query_row(
                "SELECT name, pattern, is_regex, language, is_root,
                        level1, level2, level3, level4, level5,
                        description, location
                 FROM frameworks WHERE pattern = ?1 AND language = ?2",
                params![pattern, language.key()],
                row_to_record,
            )
            .optional()
            .map_err(sqlite_err)?;

        if let Some(record) = exact {
            self.find_cache.insert(key, record.clone());
            return Ok(Some(record));
        }

        // Regex records are few; scan and match client-side of the table.
        let mut stmt = conn
            .prepare(
                "SELECT name, pattern, is_regex, language, is_root,
                        level1, level2, level3, level4, level5,
                        description, location
                 FROM frameworks WHERE language = ?1 AND is_regex = 1
                 ORDER BY id",
            )
            .map_err(sqlite_err)?;
        let rows = stmt
            .query_map(params![language.key()], row_to_record)
            .map_err(sqlite_err)?;
        for row in rows {
            let record = row.map_err(sqlite_err)?;
            if record.matches(pattern) {
                self.find_cache.insert(key, record.clone());
                return Ok(Some(record));
            }
        }

        Ok(None)
    }

    fn upsert(&self, record: FrameworkRecord) -> Result<FrameworkRecord, ClassifyError> {
        let conn = self.lock_conn()?;
        let stored = conn
            .query_row(
                "INSERT INTO frameworks
                    (name, pattern, is_regex, language, is_root,
                     level1, level2, level3, level4, level5,
                     description, location)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
                 ON CONFLICT (pattern, language) DO UPDATE SET
                    name = excluded.name,
                    is_regex = excluded.is_regex,
                    is_root = excluded.is_root,
                    level1 = excluded.level1,
                    level2 = excluded.level2,
                    level3 = excluded.level3,
                    level4 = excluded.level4,
                    level5 = excluded.level5,
                    description = excluded.description,
                    location = excluded.location
                 RETURNING name, pattern, is_regex, language, is_root,
                           level1, level2, level3, level4, level5,
                           description, location",
                params![
                    record.name,
                    record.pattern,
                    record.is_regex as i64,
                    record.language.key(),
                    record.is_root as i64,
                    record.taxonomy.level1,
                    record.taxonomy.level2,
                    record.taxonomy.level3,
                    record.taxonomy.level4,
                    record.taxonomy.level5,
                    record.description,
                    record.location,
                ],
                row_to_record,
            )
            .map_err(sqlite_err)?;

        debug!(pattern = %stored.pattern, language = %stored.language, "upserted framework record");
        self.find_cache.insert(
            Self::cache_key(&stored.pattern, stored.language),
            stored.clone(),
        );
        Ok(stored)
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<FrameworkRecord> {
    let language_key: String = row.get(3)?;
    let language = Language::from_key(&language_key).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(3, "language".to_string(), rusqlite::types::Type::Text)
    })?;
    Ok(FrameworkRecord {
        name: row.get(0)?,
        pattern: row.get(1)?,
        is_regex: row.get::<_, i64>(2)? != 0,
        language,
        is_root: row.get::<_, i64>(4)? != 0,
        taxonomy: Taxonomy {
            level1: row.get(5)?,
            level2: row.get(6)?,
            level3: row.get(7)?,
            level4: row.get(8)?,
            level5: row.get(9)?,
        },
        description: row.get(10)?,
        location: row.get(11)?,
    })
}

fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}
