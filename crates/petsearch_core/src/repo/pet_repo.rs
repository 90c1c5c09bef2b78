//! Pet repository contract and SQLite document-store implementation.
//!
//! # Responsibility
//! - Run field filters against the `pets` collection.
//! - Decode stored JSON documents into [`Pet`] records.
//!
//! # Invariants
//! - Every failure is a store failure; none is swallowed.
//! - Results keep the collection's natural order.

use crate::db::{DbError, PetStore};
use crate::model::pet::{Pet, PetId};
use crate::search::filter::{FieldFilter, PetField};
use log::{debug, error};
use rusqlite::Row;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for pet lookups.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid stored pet document: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Read access to the pet collection.
///
/// Inputs are passed to the matcher as-is, including empty strings.
pub trait PetRepository: Send + Sync {
    fn find_by_breed(&self, breed: &str) -> RepoResult<Vec<Pet>>;
    fn find_by_location(&self, location: &str) -> RepoResult<Vec<Pet>>;
}

impl<R: PetRepository + ?Sized> PetRepository for Box<R> {
    fn find_by_breed(&self, breed: &str) -> RepoResult<Vec<Pet>> {
        (**self).find_by_breed(breed)
    }

    fn find_by_location(&self, location: &str) -> RepoResult<Vec<Pet>> {
        (**self).find_by_location(location)
    }
}

/// Pet repository backed by the SQLite document store.
#[derive(Debug, Clone)]
pub struct SqlitePetRepository {
    store: PetStore,
}

impl SqlitePetRepository {
    pub fn new(store: PetStore) -> Self {
        Self { store }
    }

    fn find_matching(&self, filter: FieldFilter<'_>) -> RepoResult<Vec<Pet>> {
        let started_at = Instant::now();
        let result = self.run_filter(filter);

        match &result {
            Ok(pets) => debug!(
                "event=pet_find module=repo status=ok field={} hits={} duration_ms={}",
                filter.field.name(),
                pets.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=pet_find module=repo status=error field={} duration_ms={} error={}",
                filter.field.name(),
                started_at.elapsed().as_millis(),
                err
            ),
        }

        result
    }

    fn run_filter(&self, filter: FieldFilter<'_>) -> RepoResult<Vec<Pet>> {
        let conn = self.store.lock()?;
        let mut stmt = conn.prepare(&filter.select_sql())?;
        let mut rows = stmt.query(filter.params())?;
        let mut pets = Vec::new();

        while let Some(row) = rows.next()? {
            pets.push(parse_pet_row(row)?);
        }

        Ok(pets)
    }
}

impl PetRepository for SqlitePetRepository {
    fn find_by_breed(&self, breed: &str) -> RepoResult<Vec<Pet>> {
        self.find_matching(FieldFilter::contains(PetField::Breed, breed))
    }

    fn find_by_location(&self, location: &str) -> RepoResult<Vec<Pet>> {
        self.find_matching(FieldFilter::contains(PetField::Location, location))
    }
}

fn parse_pet_row(row: &Row<'_>) -> RepoResult<Pet> {
    let id: PetId = row.get("id")?;
    let document: String = row.get("document")?;

    let mut pet: Pet = serde_json::from_str(&document).map_err(|err| {
        RepoError::InvalidData(format!("pets.document for id `{id}`: {err}"))
    })?;
    pet.id = id;
    Ok(pet)
}
