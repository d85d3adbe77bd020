//! Typed field model.
//!
//! # Responsibility
//! - Hold one spreadsheet-like cell: a declared kind plus an optional payload.
//! - Keep kind and payload consistent across every mutation.
//!
//! # Invariants
//! - `value` is `None` or satisfies `kind.accepts_value`.
//! - Failed mutations leave both `kind` and `value` untouched.
//! - Deserialization runs the same validation as `Field::new`.
//! - Serialization is lossless: reading back what was written yields an
//!   equal field for every valid kind and payload.

use crate::error::{FieldError, FieldResult};
use crate::model::kind::{parse_iso_date, ColumnKind};
use crate::model::value::{FieldValue, TaggedDate};
use log::debug;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A kind-checked value, analogous to one cell in a typed table column.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    kind: ColumnKind,
    value: Option<FieldValue>,
}

impl Field {
    /// Creates a field after validating `value` against `kind`.
    ///
    /// # Errors
    /// - `FieldError::TypeMismatch` when `value` is present and not valid for
    ///   `kind`.
    pub fn new(kind: ColumnKind, value: Option<FieldValue>) -> FieldResult<Self> {
        if !kind.accepts(value.as_ref()) {
            return Err(FieldError::mismatch(kind, value.as_ref()));
        }
        Ok(Self { kind, value })
    }

    /// Creates a field holding `value`.
    pub fn with_value(kind: ColumnKind, value: impl Into<FieldValue>) -> FieldResult<Self> {
        Self::new(kind, Some(value.into()))
    }

    /// Creates a null-valued field. Null is valid for every kind.
    pub fn empty(kind: ColumnKind) -> Self {
        Self { kind, value: None }
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<FieldValue> {
        self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    /// Replaces the payload, keeping the current kind.
    ///
    /// # Errors
    /// - `FieldError::TypeMismatch` when `value` is not valid for the current
    ///   kind. The field is unchanged.
    pub fn set_value(&mut self, value: Option<FieldValue>) -> FieldResult<()> {
        if !self.kind.accepts(value.as_ref()) {
            return Err(FieldError::mismatch(self.kind, value.as_ref()));
        }
        self.value = value;
        Ok(())
    }

    /// Switches the kind, converting the payload when it is not already valid
    /// for `kind`.
    ///
    /// # Contract
    /// - Payload valid for `kind`: only the kind changes.
    /// - Otherwise the payload is coerced; kind and coerced payload are adopted
    ///   together.
    ///
    /// # Errors
    /// - `FieldError::TypeMismatch` when no conversion path exists. The field
    ///   is unchanged.
    pub fn set_kind(&mut self, kind: ColumnKind) -> FieldResult<()> {
        let Some(current) = self.value.as_ref() else {
            self.kind = kind;
            return Ok(());
        };
        if kind.accepts_value(current) {
            self.kind = kind;
            return Ok(());
        }

        let coerced = kind.coerce(current).map_err(|err| {
            debug!(
                "event=field_retype module=model status=rejected from={} to={} observed={}",
                self.kind,
                kind,
                current.type_name()
            );
            err
        })?;
        self.kind = kind;
        self.value = Some(coerced);
        Ok(())
    }

    /// Returns whether this field's payload may be stored in a `kind` column.
    pub fn fits(&self, kind: ColumnKind) -> bool {
        kind.accepts(self.value.as_ref())
    }

    fn from_wire(kind: Option<ColumnKind>, value: Option<FieldValue>) -> FieldResult<Self> {
        let kind = kind.ok_or_else(|| FieldError::invalid_argument("field type cannot be null"))?;
        let value = match (kind, value) {
            (ColumnKind::Date, Some(FieldValue::Text(raw))) => match parse_iso_date(&raw) {
                Some(date) => Some(FieldValue::Date(date)),
                None => return Err(FieldError::mismatch(kind, Some(&FieldValue::Text(raw)))),
            },
            (_, other) => other,
        };
        Self::new(kind, value)
    }
}

#[derive(Serialize)]
struct FieldWireRef<'a> {
    #[serde(rename = "type")]
    kind: ColumnKind,
    value: Option<WireValueRef<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum WireValueRef<'a> {
    Plain(&'a FieldValue),
    Tagged(TaggedDate),
}

#[derive(Deserialize)]
struct FieldWire {
    #[serde(rename = "type", default)]
    kind: Option<ColumnKind>,
    #[serde(default)]
    value: Option<FieldValue>,
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Only a DATE field tells the reader that a bare string is a date.
        let value = self.value.as_ref().map(|value| match (self.kind, value) {
            (ColumnKind::Date, _) => WireValueRef::Plain(value),
            (_, FieldValue::Date(date)) => WireValueRef::Tagged(TaggedDate { date: *date }),
            _ => WireValueRef::Plain(value),
        });
        FieldWireRef {
            kind: self.kind,
            value,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = FieldWire::deserialize(deserializer)?;
        Self::from_wire(wire.kind, wire.value).map_err(D::Error::custom)
    }
}
