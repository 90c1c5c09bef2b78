//! Domain model for pet lookups.
//!
//! # Responsibility
//! - Define the pet record returned by every search path.
//!
//! # Invariants
//! - Records are identified by a store-assigned `PetId`.
//! - Core code never mutates a record it has read.

pub mod pet;
