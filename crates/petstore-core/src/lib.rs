#![deny(missing_docs)]

//! # petstore-core — Domain Types for the Petstore Sample API
//!
//! This crate defines the types the API service is built on. It has no
//! internal crate dependencies — only `serde`, `thiserror`, `parking_lot`,
//! and `utoipa` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`PetId`] is a distinct
//!    type, not a bare `i64`; [`Tag`] is a validated string wrapper.
//!
//! 2. **Closed status vocabulary.** [`PetStatus`] is an enum with string
//!    serialization. Defective status strings are unrepresentable once a
//!    value has been parsed.
//!
//! 3. **Generic storage.** [`MapRepository`] is a thread-safe in-memory
//!    key-value store, generic over key and record type. The API layer
//!    wraps it with pet-specific queries.
//!
//! 4. **Structured errors with `thiserror`.** No `Box<dyn Error>`, no
//!    `.unwrap()` outside tests.

pub mod error;
pub mod pet;
pub mod repository;

// Re-export primary types at crate root for ergonomic imports.
pub use error::ValidationError;
pub use pet::{Pet, PetId, PetStatus, Pets, Tag};
pub use repository::MapRepository;
