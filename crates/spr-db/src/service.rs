//! Service layer owning the store handle.
//!
//! `SprService` wraps `SprDb` and serialises access to its single connection.
//! All repo methods are implemented as `impl SprService` blocks.

use tokio::sync::{Mutex, MutexGuard};

use crate::SprDb;
use crate::error::DatabaseError;

/// Owns the database handle and orders access to it.
///
/// Every public repo method follows this protocol:
/// 1. Take the gate (one operation on the connection at a time)
/// 2. Begin a transaction (writes only)
/// 3. Execute SQL, re-reading the affected rows
/// 4. Commit, or roll back on any error
pub struct SprService {
    db: SprDb,
    gate: Mutex<()>,
}

impl SprService {
    /// Open a local database and wrap it.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = SprDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    /// Create from an existing `SprDb`.
    #[must_use]
    pub fn from_db(db: SprDb) -> Self {
        Self {
            db,
            gate: Mutex::new(()),
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &SprDb {
        &self.db
    }

    /// Take exclusive use of the connection for one operation.
    pub(crate) async fn exclusive(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().await
    }

    /// Begin a transaction on the shared connection. Call with the gate held.
    pub(crate) async fn begin(&self) -> Result<libsql::Transaction, DatabaseError> {
        Ok(self.db.conn().transaction().await?)
    }
}

/// Commit `tx` if `result` is `Ok`, otherwise roll it back and return the error.
pub(crate) async fn finish<T>(
    tx: libsql::Transaction,
    result: Result<T, DatabaseError>,
) -> Result<T, DatabaseError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!(error = %rollback, "rollback failed");
            }
            Err(err)
        }
    }
}
