use crate::core::store::{EventStore, check_next_seq};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::event::AttendanceEvent;
use chrono::{DateTime, Local};
use rusqlite::ErrorCode;

/// `EventStore` over the local SQLite database.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::open_initialized(path)?))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl EventStore for SqliteStore {
    fn last_event(&self, staff_id: &str) -> AppResult<Option<AttendanceEvent>> {
        queries::load_last_event(&self.pool.conn, staff_id)
    }

    /// The seq check and the insert share one IMMEDIATE transaction, so a
    /// second writer on the same file waits and then sees the new seq.
    fn append(&mut self, event: &AttendanceEvent) -> AppResult<()> {
        let tx = self
            .pool
            .conn
            .transaction_with_behavior(rusqlite::TransactionBehavior::Immediate)?;

        let current = queries::max_seq(&tx, &event.actor_id)?;
        check_next_seq(event, current)?;

        match queries::insert_event(&tx, event) {
            // UNIQUE(staff_id, seq) caught a writer that slipped past the check
            Err(AppError::Db(rusqlite::Error::SqliteFailure(e, _)))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                return Err(AppError::Conflict {
                    staff_id: event.actor_id.clone(),
                    expected_seq: event.seq,
                    found_seq: current,
                });
            }
            other => other?,
        }

        tx.commit()?;
        Ok(())
    }

    fn events_between(
        &self,
        staff_id: &str,
        from: DateTime<Local>,
        to: DateTime<Local>,
    ) -> AppResult<Vec<AttendanceEvent>> {
        queries::load_events_between(&self.pool.conn, staff_id, from, to)
    }

    fn events(&self, staff_id: Option<&str>) -> AppResult<Vec<AttendanceEvent>> {
        queries::load_events(&self.pool.conn, staff_id)
    }
}
