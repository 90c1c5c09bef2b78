//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the read contract services depend on.
//! - Isolate document-store query details from service orchestration.
//!
//! # Invariants
//! - Repositories never write to the store.
//! - Repositories trust their callers; input validation lives in services.

pub mod pet_repo;
