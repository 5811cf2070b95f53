//! SQLite implementation of [`QueueStore`] and [`ScoreStore`].
//!
//! [`SqliteStore`] persists the queue and scoreboard in a SQLite database
//! with WAL mode, atomic transactions on every mutation, and automatic
//! schema migrations. The dense-position invariant is maintained inside the
//! transaction that performs the removal, so no reader can observe a gap.

use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::StorageError;
use crate::name::normalize_name;
use crate::traits::{QueueStore, ScoreStore};
use crate::types::{AdvanceOutcome, QueueEntry, Scoreboard};

/// SQLite-backed implementation of the queue and scoreboard stores.
///
/// Every mutation is wrapped in a transaction for atomicity. The database
/// uses WAL mode; name uniqueness is enforced case-insensitively by a
/// `NOCASE` unique index.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Reads the ordered name list through any connection-like handle
    /// (plain connection or open transaction).
    fn list_names(conn: &Connection) -> Result<Vec<String>, StorageError> {
        let mut stmt = conn.prepare("SELECT name FROM queue ORDER BY position ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut names = Vec::new();
        for name in rows {
            names.push(name?);
        }
        Ok(names)
    }

    /// Ensures the single scoreboard row exists.
    fn ensure_scoreboard_row(conn: &Connection) -> Result<(), StorageError> {
        conn.execute(
            "INSERT OR IGNORE INTO scoreboard (id, good, bad) VALUES (1, 0, 0)",
            [],
        )?;
        Ok(())
    }

    fn read_scoreboard(conn: &Connection) -> Result<Scoreboard, StorageError> {
        let board = conn.query_row(
            "SELECT good, bad FROM scoreboard WHERE id = 1",
            [],
            |row| {
                Ok(Scoreboard {
                    good: row.get(0)?,
                    bad: row.get(1)?,
                })
            },
        )?;
        Ok(board)
    }
}

/// Current wall-clock time in unix milliseconds.
fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as i64)
}

impl QueueStore for SqliteStore {
    fn list(&self) -> Result<Vec<String>, StorageError> {
        Self::list_names(&self.conn)
    }

    fn entries(&self) -> Result<Vec<QueueEntry>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, position, created_at FROM queue ORDER BY position ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(QueueEntry {
                name: row.get(0)?,
                position: row.get(1)?,
                created_at: row.get(2)?,
            })
        })?;
        let mut entries = Vec::new();
        for entry in rows {
            entries.push(entry?);
        }
        Ok(entries)
    }

    fn join(&mut self, name: &str) -> Result<Vec<String>, StorageError> {
        let name = normalize_name(name)?;
        let tx = self.conn.transaction()?;

        let exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM queue WHERE name = ?1 COLLATE NOCASE)",
            params![name],
            |row| row.get(0),
        )?;
        if exists {
            return Err(StorageError::AlreadyQueued { name });
        }

        // Max-then-insert is safe: the transaction holds the write lock, so
        // two concurrent joins can never compute the same next position.
        let next_pos: i64 = tx.query_row(
            "SELECT COALESCE(MAX(position), 0) + 1 FROM queue",
            [],
            |row| row.get(0),
        )?;
        tx.execute(
            "INSERT INTO queue (name, position, created_at) VALUES (?1, ?2, ?3)",
            params![name, next_pos, now_millis()],
        )?;

        let queue = Self::list_names(&tx)?;
        tx.commit()?;
        Ok(queue)
    }

    fn leave(&mut self, name: &str) -> Result<Vec<String>, StorageError> {
        let name = normalize_name(name)?;
        let tx = self.conn.transaction()?;

        let removed_pos: i64 = match tx
            .query_row(
                "SELECT position FROM queue WHERE name = ?1 COLLATE NOCASE",
                params![name],
                |row| row.get(0),
            )
            .optional()?
        {
            Some(pos) => pos,
            None => return Err(StorageError::NotInQueue { name }),
        };

        tx.execute(
            "DELETE FROM queue WHERE name = ?1 COLLATE NOCASE",
            params![name],
        )?;
        // Compaction: close the gap left by the removed entry.
        tx.execute(
            "UPDATE queue SET position = position - 1 WHERE position > ?1",
            params![removed_pos],
        )?;

        let queue = Self::list_names(&tx)?;
        tx.commit()?;
        Ok(queue)
    }

    fn advance(&mut self) -> Result<AdvanceOutcome, StorageError> {
        let tx = self.conn.transaction()?;

        let front: Option<(i64, String, i64)> = tx
            .query_row(
                "SELECT id, name, position FROM queue ORDER BY position ASC LIMIT 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        let (id, next_name, front_pos) = match front {
            Some(row) => row,
            // Empty queue is not an error condition.
            None => {
                return Ok(AdvanceOutcome {
                    next: None,
                    queue: Vec::new(),
                })
            }
        };

        tx.execute("DELETE FROM queue WHERE id = ?1", params![id])?;
        tx.execute(
            "UPDATE queue SET position = position - 1 WHERE position > ?1",
            params![front_pos],
        )?;

        let queue = Self::list_names(&tx)?;
        tx.commit()?;
        Ok(AdvanceOutcome {
            next: Some(next_name),
            queue,
        })
    }
}

impl ScoreStore for SqliteStore {
    fn scoreboard(&self) -> Result<Scoreboard, StorageError> {
        Self::ensure_scoreboard_row(&self.conn)?;
        Self::read_scoreboard(&self.conn)
    }

    fn set_scoreboard(
        &mut self,
        good: Option<i64>,
        bad: Option<i64>,
    ) -> Result<Scoreboard, StorageError> {
        let tx = self.conn.transaction()?;
        Self::ensure_scoreboard_row(&tx)?;
        // COALESCE keeps the stored value for omitted fields; the whole
        // read-modify-write happens inside SQLite, never from client state.
        tx.execute(
            "UPDATE scoreboard SET good = COALESCE(?1, good), bad = COALESCE(?2, bad) WHERE id = 1",
            params![good, bad],
        )?;
        let board = Self::read_scoreboard(&tx)?;
        tx.commit()?;
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteStore {
        SqliteStore::in_memory().unwrap()
    }

    /// Positions must be exactly {1..N} after every mutation.
    fn assert_dense(store: &SqliteStore) {
        let entries = store.entries().unwrap();
        let positions: Vec<i64> = entries.iter().map(|e| e.position).collect();
        let expected: Vec<i64> = (1..=entries.len() as i64).collect();
        assert_eq!(positions, expected, "positions not dense: {positions:?}");
    }

    #[test]
    fn join_assigns_sequential_positions() {
        let mut s = store();
        assert_eq!(s.join("Alice").unwrap(), vec!["Alice"]);
        assert_eq!(s.join("Bob").unwrap(), vec!["Alice", "Bob"]);
        assert_eq!(s.join("Cara").unwrap(), vec!["Alice", "Bob", "Cara"]);
        assert_dense(&s);
    }

    #[test]
    fn join_normalizes_whitespace() {
        let mut s = store();
        assert_eq!(s.join("  Bob   Lee  ").unwrap(), vec!["Bob Lee"]);
        // The normalized form collides with itself.
        assert!(matches!(
            s.join("Bob Lee"),
            Err(StorageError::AlreadyQueued { .. })
        ));
    }

    #[test]
    fn join_rejects_empty_name() {
        let mut s = store();
        assert!(matches!(s.join("   "), Err(StorageError::EmptyName)));
        assert!(s.list().unwrap().is_empty());
    }

    #[test]
    fn join_rejects_case_insensitive_duplicate() {
        let mut s = store();
        s.join("Alice").unwrap();
        assert!(matches!(
            s.join("alice"),
            Err(StorageError::AlreadyQueued { .. })
        ));
        assert!(matches!(
            s.join("ALICE"),
            Err(StorageError::AlreadyQueued { .. })
        ));
        // The stored queue still contains exactly one entry, untouched.
        assert_eq!(s.list().unwrap(), vec!["Alice"]);
        assert_dense(&s);
    }

    #[test]
    fn leave_compacts_positions() {
        let mut s = store();
        s.join("A").unwrap();
        s.join("B").unwrap();
        s.join("C").unwrap();
        assert_eq!(s.leave("B").unwrap(), vec!["A", "C"]);
        assert_dense(&s);
        // Joining after a removal lands at the freed end position.
        assert_eq!(s.join("D").unwrap(), vec!["A", "C", "D"]);
        assert_dense(&s);
    }

    #[test]
    fn leave_is_case_insensitive() {
        let mut s = store();
        s.join("Alice").unwrap();
        assert_eq!(s.leave("aLiCe").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn leave_unknown_name_fails_and_changes_nothing() {
        let mut s = store();
        s.join("A").unwrap();
        assert!(matches!(
            s.leave("B"),
            Err(StorageError::NotInQueue { .. })
        ));
        assert_eq!(s.list().unwrap(), vec!["A"]);
        assert_dense(&s);
    }

    #[test]
    fn advance_serves_fifo() {
        let mut s = store();
        s.join("A").unwrap();
        s.join("B").unwrap();
        s.join("C").unwrap();

        let out = s.advance().unwrap();
        assert_eq!(out.next.as_deref(), Some("A"));
        assert_eq!(out.queue, vec!["B", "C"]);
        assert_dense(&s);

        assert_eq!(s.advance().unwrap().next.as_deref(), Some("B"));
        assert_eq!(s.advance().unwrap().next.as_deref(), Some("C"));

        let out = s.advance().unwrap();
        assert_eq!(out.next, None);
        assert!(out.queue.is_empty());
    }

    #[test]
    fn advance_on_empty_queue_is_not_an_error() {
        let mut s = store();
        let out = s.advance().unwrap();
        assert_eq!(out, AdvanceOutcome { next: None, queue: vec![] });
    }

    #[test]
    fn interleaved_mutations_keep_positions_dense() {
        let mut s = store();
        for name in ["A", "B", "C", "D", "E"] {
            s.join(name).unwrap();
            assert_dense(&s);
        }
        s.leave("C").unwrap();
        assert_dense(&s);
        s.advance().unwrap();
        assert_dense(&s);
        s.join("F").unwrap();
        assert_dense(&s);
        s.leave("E").unwrap();
        assert_dense(&s);
        assert_eq!(s.list().unwrap(), vec!["B", "D", "F"]);
    }

    #[test]
    fn scoreboard_initializes_to_zero() {
        let s = store();
        assert_eq!(s.scoreboard().unwrap(), Scoreboard { good: 0, bad: 0 });
    }

    #[test]
    fn scoreboard_partial_updates_preserve_other_field() {
        let mut s = store();
        assert_eq!(
            s.set_scoreboard(Some(5), None).unwrap(),
            Scoreboard { good: 5, bad: 0 }
        );
        assert_eq!(
            s.set_scoreboard(None, Some(2)).unwrap(),
            Scoreboard { good: 5, bad: 2 }
        );
        assert_eq!(
            s.set_scoreboard(None, None).unwrap(),
            Scoreboard { good: 5, bad: 2 }
        );
    }

    #[test]
    fn scoreboard_accepts_negative_values() {
        // Clamping is the caller's concern.
        let mut s = store();
        assert_eq!(
            s.set_scoreboard(Some(-3), None).unwrap(),
            Scoreboard { good: -3, bad: 0 }
        );
    }

    #[test]
    fn state_survives_reopen() {
        let dir = std::env::temp_dir().join(format!(
            "ballerup-test-{}-{}",
            std::process::id(),
            now_millis()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("queue.db");
        let path = path.to_str().unwrap();

        {
            let mut s = SqliteStore::new(path).unwrap();
            s.join("Alice").unwrap();
            s.join("Bob").unwrap();
            s.set_scoreboard(Some(7), Some(1)).unwrap();
        }

        let s = SqliteStore::new(path).unwrap();
        assert_eq!(s.list().unwrap(), vec!["Alice", "Bob"]);
        assert_eq!(s.scoreboard().unwrap(), Scoreboard { good: 7, bad: 1 });

        std::fs::remove_dir_all(&dir).ok();
    }
}
