// SQLite entry store.
//
// Purpose
// - Durable relational backend: one row per entry, scoped by owning user.
//
// Responsibilities
// - Bootstrap the schema on open.
// - Assign ids and timestamps on insert.
//
// Timestamps are stored as fixed-width RFC 3339 text (microseconds, Z
// suffix) so lexicographic ORDER BY is chronological; uuids as text.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use std::fmt::Display;
use std::path::Path;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::modules::entries::core::entry::Entry;
use crate::modules::entries::store::{EntryChanges, EntryStore, NewEntry, StoreError};

pub struct SqliteEntryStore {
    conn: Mutex<Connection>,
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

impl SqliteEntryStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        create_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

fn create_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS entries (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            name TEXT NOT NULL,
            notes TEXT NOT NULL DEFAULT '',
            category TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_entries_user_id ON entries(user_id)",
        [],
    )?;
    Ok(())
}

const ENTRY_COLUMNS: &str = "id, user_id, name, notes, category, created_at, updated_at";

type EntryRow = (String, String, String, String, String, String, String);

fn backend(err: impl Display) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn encode_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(backend)
}

fn decode(row: EntryRow) -> Result<Entry, StoreError> {
    let (id, user_id, name, notes, category, created_at, updated_at) = row;
    Ok(Entry {
        id: Uuid::parse_str(&id).map_err(backend)?,
        user_id,
        name,
        notes,
        category: category.parse().map_err(backend)?,
        created_at: decode_timestamp(&created_at)?,
        updated_at: decode_timestamp(&updated_at)?,
    })
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<EntryRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
    ))
}

fn fetch_by_id(conn: &Connection, id: Uuid) -> Result<Option<Entry>, StoreError> {
    conn.query_row(
        &format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1"),
        params![id.to_string()],
        read_row,
    )
    .optional()?
    .map(decode)
    .transpose()
}

#[async_trait]
impl EntryStore for SqliteEntryStore {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Entry>, StoreError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries
             WHERE user_id = ?1
             ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt
            .query_map(params![user_id], read_row)?
            .collect::<Result<Vec<EntryRow>, _>>()?;
        rows.into_iter().map(decode).collect()
    }

    async fn insert(&self, new: NewEntry) -> Result<Entry, StoreError> {
        // Truncate to stored precision so the returned record round-trips.
        let now = Utc::now().trunc_subsecs(6);
        let entry = Entry {
            id: Uuid::now_v7(),
            user_id: new.user_id,
            name: new.name,
            notes: new.notes,
            category: new.category,
            created_at: now,
            updated_at: now,
        };

        let conn = self.conn.lock().await;
        conn.execute(
            &format!("INSERT INTO entries ({ENTRY_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
            params![
                entry.id.to_string(),
                entry.user_id,
                entry.name,
                entry.notes,
                entry.category.label(),
                encode_timestamp(entry.created_at),
                encode_timestamp(entry.updated_at),
            ],
        )?;
        Ok(entry)
    }

    async fn update(
        &self,
        user_id: &str,
        changes: EntryChanges,
    ) -> Result<Option<Entry>, StoreError> {
        let conn = self.conn.lock().await;
        let matched = conn.execute(
            "UPDATE entries
             SET name = ?1, notes = ?2, category = ?3, updated_at = ?4
             WHERE id = ?5 AND user_id = ?6",
            params![
                changes.name,
                changes.notes,
                changes.category.label(),
                encode_timestamp(Utc::now().trunc_subsecs(6)),
                changes.id.to_string(),
                user_id,
            ],
        )?;
        if matched == 0 {
            return Ok(None);
        }
        fetch_by_id(&conn, changes.id)
    }

    async fn delete(&self, user_id: &str, id: Uuid) -> Result<u64, StoreError> {
        let conn = self.conn.lock().await;
        let deleted = conn.execute(
            "DELETE FROM entries WHERE id = ?1 AND user_id = ?2",
            params![id.to_string(), user_id],
        )?;
        Ok(deleted as u64)
    }
}
