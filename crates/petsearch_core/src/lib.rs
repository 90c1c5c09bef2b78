//! Core domain logic for PetSearch.
//! This crate owns the pet record shape, the store filter and the single
//! validation boundary for pet lookups.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult, PetStore};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::pet::{Pet, PetId, PetValidationError};
pub use repo::pet_repo::{PetRepository, RepoError, RepoResult, SqlitePetRepository};
pub use search::filter::{FieldFilter, PetField};
pub use service::pet_service::{PetService, PetServiceError, ServiceErrorKind};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
