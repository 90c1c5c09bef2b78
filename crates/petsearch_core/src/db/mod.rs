//! Document store access for the `pets` collection.
//!
//! # Responsibility
//! - Open and configure SQLite connections for PetSearch core.
//! - Hand out a shared [`PetStore`] handle usable from concurrent queries.
//!
//! # Invariants
//! - Every returned connection has the case-insensitive `regexp` matcher
//!   registered.
//! - File-backed stores are opened read-only and must already hold the
//!   `pets` collection.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod collection;
mod open;
mod store;

pub use collection::{create_pets_collection, PETS_COLLECTION};
pub use open::{open_db, open_db_in_memory};
pub use store::PetStore;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    MissingCollection(&'static str),
    /// A query panicked while holding the connection.
    Poisoned,
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::MissingCollection(name) => {
                write!(f, "document store has no `{name}` collection")
            }
            Self::Poisoned => write!(f, "store connection is unavailable after a failed query"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::MissingCollection(_) | Self::Poisoned => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
