//! The output SQLite store: creation, bulk inserts, indexes and finalization.

use rusqlite::{params_from_iter, Connection};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::error::StoreError;
use crate::schema::{TableSchema, TABLES};
use crate::types::TypedRecord;

/// Single-writer handle on the output database.
pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    /// Delete whatever sits at `path`, then create and configure a fresh store.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn create(path: &Path) -> Result<Self, StoreError> {
        remove_store_files(path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        store.configure(true)?;
        Ok(store)
    }

    /// Private in-memory store with the same pragmas, minus the WAL journal
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn, path: None };
        store.configure(false)?;
        Ok(store)
    }

    fn configure(&self, wal: bool) -> Result<(), StoreError> {
        info!("Enabling foreign keys");
        self.conn.pragma_update(None, "foreign_keys", "ON")?;
        let enforced: i64 = self
            .conn
            .pragma_query_value(None, "foreign_keys", |row| row.get(0))?;
        if enforced != 1 {
            return Err(StoreError::ForeignKeysDisabled);
        }

        if wal {
            let mode: String =
                self.conn
                    .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
            if !mode.eq_ignore_ascii_case("wal") {
                warn!("Journal mode is {} instead of WAL", mode);
            }
            self.conn.pragma_update(None, "synchronous", "NORMAL")?;
        }
        Ok(())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Create every table, parents first
    pub fn create_tables(&self) -> Result<(), StoreError> {
        for schema in TABLES.iter() {
            info!("Creating {} table", schema.table);
            self.conn
                .execute(&schema.create_table_sql(), [])
                .map_err(|source| StoreError::CreateTable {
                    table: schema.table,
                    source,
                })?;
        }
        Ok(())
    }

    /// Open a write batch for one table. Nothing is visible until [`TableWriter::commit`].
    pub fn writer(&mut self, schema: &'static TableSchema) -> Result<TableWriter<'_>, StoreError> {
        let tx = self.conn.transaction()?;
        Ok(TableWriter {
            tx,
            schema,
            sql: schema.insert_sql(),
            rows: 0,
        })
    }

    /// Create the lookup and foreign-key indexes. Returns how many were created.
    pub fn create_indexes(&self) -> Result<usize, StoreError> {
        let mut created = 0;
        for schema in TABLES.iter() {
            for index in schema.indexes {
                debug!("Creating index {} on {}({})", index.name, schema.table, index.column);
                self.conn
                    .execute(&schema.create_index_sql(index), [])
                    .map_err(|source| StoreError::CreateIndex {
                        index: index.name,
                        source,
                    })?;
                created += 1;
            }
        }
        info!("Created {} indexes", created);
        Ok(created)
    }

    /// Rows reported by `PRAGMA foreign_key_check`, as (table, rowid) pairs
    pub fn foreign_key_violations(&self) -> Result<Vec<(String, Option<i64>)>, StoreError> {
        let mut stmt = self.conn.prepare("PRAGMA foreign_key_check")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, Option<i64>>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn row_count(&self, table: &str) -> Result<u64, StoreError> {
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Verify integrity, fold the WAL back into the main file and close.
    ///
    /// The store ends up in rollback-journal mode so the output is one
    /// self-contained file that read-only consumers can open.
    pub fn finalize(self) -> Result<(), StoreError> {
        let violations = self.foreign_key_violations()?;
        if let Some((table, _)) = violations.first() {
            return Err(StoreError::ForeignKeyViolations {
                count: violations.len(),
                table: table.clone(),
            });
        }

        if self.path.is_some() {
            let busy: i64 =
                self.conn
                    .query_row("PRAGMA wal_checkpoint(TRUNCATE)", [], |row| row.get(0))?;
            if busy != 0 {
                warn!("WAL checkpoint reported a busy database");
            }
            let mode: String =
                self.conn
                    .pragma_update_and_check(None, "journal_mode", "DELETE", |row| row.get(0))?;
            debug!("Journal mode is now {}", mode);
        }

        self.conn.close().map_err(|(_, e)| StoreError::Sqlite(e))
    }
}

/// Inserts for one table inside a single transaction
pub struct TableWriter<'a> {
    tx: rusqlite::Transaction<'a>,
    schema: &'static TableSchema,
    sql: String,
    rows: u64,
}

impl TableWriter<'_> {
    pub fn insert(&mut self, record: &TypedRecord) -> Result<(), StoreError> {
        let mut stmt = self
            .tx
            .prepare_cached(&self.sql)
            .map_err(|source| self.insert_error(record.line, source))?;
        stmt.execute(params_from_iter(record.values.iter()))
            .map_err(|source| self.insert_error(record.line, source))?;
        self.rows += 1;
        Ok(())
    }

    fn insert_error(&self, line: u64, source: rusqlite::Error) -> StoreError {
        StoreError::Insert {
            table: self.schema.table,
            line,
            source,
        }
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn commit(self) -> Result<u64, StoreError> {
        self.tx.commit()?;
        Ok(self.rows)
    }
}

/// Remove a store file together with its `-wal` and `-shm` companions.
pub fn remove_store_files(path: &Path) -> Result<(), StoreError> {
    for candidate in store_files(path) {
        match fs::remove_file(&candidate) {
            Ok(()) => info!("Deleted existing {}", candidate.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(StoreError::Remove {
                    path: candidate,
                    source,
                })
            }
        }
    }
    Ok(())
}

fn store_files(path: &Path) -> [PathBuf; 3] {
    let with_suffix = |suffix: &str| {
        let mut os = path.as_os_str().to_owned();
        os.push(suffix);
        PathBuf::from(os)
    };
    [path.to_path_buf(), with_suffix("-wal"), with_suffix("-shm")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Entity;
    use crate::types::FieldValue;
    use tempfile::tempdir;

    fn season(year: i64) -> TypedRecord {
        TypedRecord {
            entity: Entity::Season,
            line: 2,
            values: vec![
                FieldValue::Integer(year),
                FieldValue::Text(format!("http://example.com/{year}")),
            ],
        }
    }

    #[test]
    fn test_create_replaces_existing_file() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out").join("f1.sqlite");
        fs::create_dir_all(path.parent().unwrap())?;
        fs::write(&path, b"not a database")?;
        fs::write(dir.path().join("out").join("f1.sqlite-wal"), b"stale")?;

        let store = Store::create(&path)?;
        store.create_tables()?;
        assert_eq!(store.row_count("seasons")?, 0);
        Ok(())
    }

    #[test]
    fn test_foreign_keys_are_enforced() -> anyhow::Result<()> {
        let mut store = Store::in_memory()?;
        store.create_tables()?;

        let race = TypedRecord {
            entity: Entity::Race,
            line: 2,
            values: Entity::Race
                .schema()
                .fields
                .iter()
                .map(|f| match f.column {
                    "id" => FieldValue::Integer(1),
                    "year" => FieldValue::Integer(2021),
                    "round" => FieldValue::Integer(1),
                    "circuit" => FieldValue::Integer(7),
                    _ if f.nullable => FieldValue::Null,
                    _ => FieldValue::Text("x".to_string()),
                })
                .collect(),
        };

        let mut writer = store.writer(Entity::Race.schema())?;
        let err = writer.insert(&race).unwrap_err();
        assert!(matches!(err, StoreError::Insert { table: "races", line: 2, .. }));
        Ok(())
    }

    #[test]
    fn test_uncommitted_writer_leaves_table_empty() -> anyhow::Result<()> {
        let mut store = Store::in_memory()?;
        store.create_tables()?;
        {
            let mut writer = store.writer(Entity::Season.schema())?;
            writer.insert(&season(2021))?;
            assert_eq!(writer.rows(), 1);
        }
        assert_eq!(store.row_count("seasons")?, 0);

        let mut writer = store.writer(Entity::Season.schema())?;
        writer.insert(&season(2021))?;
        assert_eq!(writer.commit()?, 1);
        assert_eq!(store.row_count("seasons")?, 1);
        Ok(())
    }

    #[test]
    fn test_indexes_are_created_once_per_definition() -> anyhow::Result<()> {
        let store = Store::in_memory()?;
        store.create_tables()?;
        assert_eq!(store.create_indexes()?, 24);

        let count: i64 = store.connection().query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name NOT LIKE 'sqlite_%'",
            [],
            |row| row.get(0),
        )?;
        assert_eq!(count, 24);
        Ok(())
    }

    #[test]
    fn test_finalize_leaves_single_file() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("f1.sqlite");

        let mut store = Store::create(&path)?;
        store.create_tables()?;
        let mut writer = store.writer(Entity::Season.schema())?;
        writer.insert(&season(2021))?;
        writer.commit()?;
        store.finalize()?;

        assert!(path.exists());
        assert!(!dir.path().join("f1.sqlite-wal").exists());
        let conn = Connection::open(&path)?;
        let mode: String = conn.pragma_query_value(None, "journal_mode", |row| row.get(0))?;
        assert_eq!(mode, "delete");
        Ok(())
    }

    #[test]
    fn test_remove_store_files_ignores_missing() -> anyhow::Result<()> {
        let dir = tempdir()?;
        remove_store_files(&dir.path().join("nothing.sqlite"))?;
        Ok(())
    }
}
