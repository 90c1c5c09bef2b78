//! GraphQL query surface for pet lookups.
//!
//! # Responsibility
//! - Declare the `Pet` type and the two lookup queries.
//! - Bind each query to the matching [`PetService`] operation.
//! - Encode service errors with a machine-readable `code` extension.
//!
//! # Invariants
//! - Resolvers hold no validation of their own.
//! - Service results and error messages reach the response unmodified.

pub mod error;
pub mod schema;

use petsearch_core::{PetRepository, PetService};
use std::sync::Arc;

pub use error::{error_code, service_error};
pub use schema::{build_schema, schema_sdl, PetObject, PetSchema, QueryRoot};

/// Path the query endpoint is mounted at by HTTP transports.
pub const GRAPHQL_PATH: &str = "/graphql/search/pets";

/// Port HTTP transports listen on when none is configured.
pub const DEFAULT_PORT: u16 = 3011;

/// Service instance shared by every resolver invocation.
pub type SharedPetService = Arc<PetService<Box<dyn PetRepository>>>;

/// Wraps a repository into the shared service the schema expects.
pub fn shared_service(repo: impl PetRepository + 'static) -> SharedPetService {
    let repo: Box<dyn PetRepository> = Box::new(repo);
    Arc::new(PetService::new(repo))
}
