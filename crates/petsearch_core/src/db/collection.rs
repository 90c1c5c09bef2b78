//! Layout of the `pets` collection.
//!
//! Records live as JSON documents keyed by their store-assigned id. The
//! external data-management process owns the contents; core only reads.

use super::{DbError, DbResult};
use rusqlite::{Connection, OptionalExtension};

/// Name of the collection table holding pet documents.
pub const PETS_COLLECTION: &str = "pets";

const CREATE_PETS_COLLECTION_SQL: &str = "CREATE TABLE IF NOT EXISTS pets (
    id TEXT PRIMARY KEY NOT NULL,
    document TEXT NOT NULL CHECK (json_valid(document))
);";

/// Creates the `pets` collection when it does not exist yet.
///
/// Used for in-memory stores and fixtures. Production stores are provisioned
/// by the process that owns the records.
pub fn create_pets_collection(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_PETS_COLLECTION_SQL)?;
    Ok(())
}

pub(super) fn ensure_pets_collection(conn: &Connection) -> DbResult<()> {
    let found = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [PETS_COLLECTION],
            |_| Ok(()),
        )
        .optional()?;

    match found {
        Some(()) => Ok(()),
        None => Err(DbError::MissingCollection(PETS_COLLECTION)),
    }
}
