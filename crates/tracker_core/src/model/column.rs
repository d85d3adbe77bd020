//! Column definitions for tracked fields.
//!
//! # Invariants
//! - A definition is immutable once built; it is used as a map key.
//! - Equality, hashing and ordering cover `(title, kind)` only.

use crate::error::{FieldError, FieldResult};
use crate::model::kind::ColumnKind;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Named, kind-tagged column against which a sequence of fields is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ColumnDefinition {
    title: String,
    #[serde(rename = "type")]
    kind: ColumnKind,
}

impl ColumnDefinition {
    pub fn new(title: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            title: title.into(),
            kind,
        }
    }

    /// Builds a definition from optional structured input.
    ///
    /// # Errors
    /// - `FieldError::InvalidArgument` when `title` or `kind` is absent.
    pub fn try_from_parts(title: Option<String>, kind: Option<ColumnKind>) -> FieldResult<Self> {
        let title =
            title.ok_or_else(|| FieldError::invalid_argument("column title cannot be null"))?;
        let kind = kind.ok_or_else(|| FieldError::invalid_argument("column type cannot be null"))?;
        Ok(Self::new(title, kind))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }
}

#[derive(Deserialize)]
struct ColumnWire {
    #[serde(default)]
    title: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<ColumnKind>,
}

impl<'de> Deserialize<'de> for ColumnDefinition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = ColumnWire::deserialize(deserializer)?;
        Self::try_from_parts(wire.title, wire.kind).map_err(D::Error::custom)
    }
}
