//! Pet lookup use-case service.
//!
//! # Responsibility
//! - Reject missing search criteria with a named reason.
//! - Delegate accepted criteria to the repository unchanged.
//!
//! # Invariants
//! - This is the only place search input is validated.
//! - Repository results and errors pass through without modification.

use crate::model::pet::Pet;
use crate::repo::pet_repo::{PetRepository, RepoError};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

const BREED_REQUIRED: &str = "Breed is required";
const LOCATION_REQUIRED: &str = "Location is required";

/// Coarse error category callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    InvalidArgument,
    StoreFailure,
}

/// Service error for pet lookups.
#[derive(Debug)]
pub enum PetServiceError {
    /// Required search criterion is missing or empty.
    InvalidArgument(String),
    /// The store failed; message is the store's own.
    StoreFailure(RepoError),
}

impl PetServiceError {
    pub fn kind(&self) -> ServiceErrorKind {
        match self {
            Self::InvalidArgument(_) => ServiceErrorKind::InvalidArgument,
            Self::StoreFailure(_) => ServiceErrorKind::StoreFailure,
        }
    }
}

impl Display for PetServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "{message}"),
            Self::StoreFailure(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PetServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::StoreFailure(err) => Some(err),
        }
    }
}

impl From<RepoError> for PetServiceError {
    fn from(value: RepoError) -> Self {
        Self::StoreFailure(value)
    }
}

/// Pet lookup facade over a repository implementation.
pub struct PetService<R: PetRepository> {
    repo: R,
}

impl<R: PetRepository> PetService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Finds pets whose breed contains `breed`, ignoring case.
    ///
    /// # Errors
    /// - `InvalidArgument("Breed is required")` for `None` or `""`; the
    ///   repository is not called.
    /// - `StoreFailure` with the repository error unchanged.
    pub fn get_pets_by_breed(&self, breed: Option<&str>) -> Result<Vec<Pet>, PetServiceError> {
        let breed = require(breed, "breed", BREED_REQUIRED)?;
        Ok(self.repo.find_by_breed(breed)?)
    }

    /// Finds pets whose location contains `location`, ignoring case.
    ///
    /// Same contract as [`Self::get_pets_by_breed`] with
    /// "Location is required".
    pub fn get_pets_by_location(
        &self,
        location: Option<&str>,
    ) -> Result<Vec<Pet>, PetServiceError> {
        let location = require(location, "location", LOCATION_REQUIRED)?;
        Ok(self.repo.find_by_location(location)?)
    }
}

// Whitespace-only input is present and passes.
fn require<'a>(
    value: Option<&'a str>,
    field: &str,
    message: &str,
) -> Result<&'a str, PetServiceError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            warn!("event=pet_query module=service status=rejected field={field} reason=missing_criterion");
            Err(PetServiceError::InvalidArgument(message.to_string()))
        }
    }
}
