//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the outer CRUD layer decoupled from storage details.

pub mod error;
pub mod field_service;
pub mod installation_service;
pub mod review_service;
