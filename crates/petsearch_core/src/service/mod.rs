//! Core use-case services.
//!
//! # Responsibility
//! - Validate caller input once, before any repository call.
//! - Keep API layers decoupled from storage details.

pub mod pet_service;
