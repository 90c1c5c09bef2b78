//! Shared store handle.

use super::{DbError, DbResult};
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle to one open document-store connection.
///
/// Clones share the same connection. Concurrent queries take turns on it.
#[derive(Clone)]
pub struct PetStore {
    conn: Arc<Mutex<Connection>>,
}

impl PetStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Borrows the underlying connection for one query.
    pub fn lock(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| DbError::Poisoned)
    }
}

impl std::fmt::Debug for PetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PetStore").finish_non_exhaustive()
    }
}
