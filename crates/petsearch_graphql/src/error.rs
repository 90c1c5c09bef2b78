//! Service error encoding for GraphQL responses.

use async_graphql::ErrorExtensions;
use petsearch_core::{PetServiceError, ServiceErrorKind};

/// Stable `extensions.code` value for each service error kind.
pub fn error_code(kind: ServiceErrorKind) -> &'static str {
    match kind {
        ServiceErrorKind::InvalidArgument => "INVALID_ARGUMENT",
        ServiceErrorKind::StoreFailure => "STORE_FAILURE",
    }
}

/// Converts a service error into a GraphQL error.
///
/// The message is the service error's own text.
pub fn service_error(err: PetServiceError) -> async_graphql::Error {
    let code = error_code(err.kind());
    async_graphql::Error::new(err.to_string()).extend_with(|_, extensions| {
        extensions.set("code", code);
    })
}
