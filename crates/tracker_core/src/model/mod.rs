//! Domain model for installation tracking.
//!
//! # Responsibility
//! - Define the typed field model (kinds, payloads, fields, columns).
//! - Define the installation aggregate and its weekly reviews.
//!
//! # Invariants
//! - A field's payload always satisfies its kind; failed mutations are no-ops.
//! - Tracked columns only ever hold fields whose payload fits the column kind.

pub mod column;
pub mod field;
pub mod installation;
pub mod kind;
pub mod request;
pub mod tracked;
pub mod value;
pub mod weekly_review;
