//! Field model errors.
//!
//! # Invariants
//! - `TypeMismatch` is a data conflict: a payload does not fit a kind and no
//!   conversion path exists.
//! - `InvalidArgument` is a caller contract violation (missing kind or title
//!   in structured input) and is never reported as a mismatch.

use crate::model::kind::ColumnKind;
use crate::model::value::FieldValue;
use thiserror::Error;

pub type FieldResult<T> = Result<T, FieldError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Payload does not satisfy `expected`.
    #[error(
        "value [{observed}:{}] does not match the expected kind [{expected}]",
        .value.as_deref().unwrap_or("null")
    )]
    TypeMismatch {
        expected: ColumnKind,
        /// Observed payload type (`text|number|date|null`).
        observed: &'static str,
        /// Canonical textual form of the rejected payload.
        value: Option<String>,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FieldError {
    pub(crate) fn mismatch(expected: ColumnKind, value: Option<&FieldValue>) -> Self {
        Self::TypeMismatch {
            expected,
            observed: value.map_or("null", FieldValue::type_name),
            value: value.map(ToString::to_string),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns whether this error is a kind/payload conflict.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}
