//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define index-addressed collection contracts used by services.
//! - Keep storage details out of service orchestration.
//!
//! # Invariants
//! - Entities are addressed by list position; deleting shifts later entries.
//! - Out-of-range positions are reported as `RepoError::NotFound`.

pub mod memory_repo;
