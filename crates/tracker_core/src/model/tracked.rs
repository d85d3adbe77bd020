//! Tracked field columns for one installation.
//!
//! # Responsibility
//! - Map column definitions to the ordered fields recorded under them.
//! - Reject fields whose payload does not fit the column kind.
//!
//! # Invariants
//! - Every stored field's payload is valid for its column's kind.
//! - Field order inside a column is insertion order.
//! - Failed appends leave the whole set unchanged.
//! - Wire form is a list of `{column, values}` entries in column order.

use crate::error::{FieldError, FieldResult};
use crate::model::column::ColumnDefinition;
use crate::model::field::Field;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Column-to-fields mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackedFields {
    columns: BTreeMap<ColumnDefinition, Vec<Field>>,
}

impl TrackedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `field` under `column`, creating the column entry when new.
    ///
    /// The field's payload is re-validated against the column kind, so a
    /// `Number` field may be tracked in a `Currency` column, while a
    /// `Percentage` column rejects a `Number` field holding `150.0`.
    ///
    /// # Errors
    /// - `FieldError::TypeMismatch` when the payload does not fit. Nothing is
    ///   inserted, not even an empty column entry.
    pub fn add_value(&mut self, column: ColumnDefinition, field: Field) -> FieldResult<()> {
        if !field.fits(column.kind()) {
            return Err(FieldError::mismatch(column.kind(), field.value()));
        }
        self.columns.entry(column).or_default().push(field);
        Ok(())
    }

    /// Appends every field under `column`, or none of them.
    ///
    /// An empty `fields` still registers the column.
    ///
    /// # Errors
    /// - `FieldError::TypeMismatch` for the first field that does not fit.
    pub fn add_values(
        &mut self,
        column: ColumnDefinition,
        fields: impl IntoIterator<Item = Field>,
    ) -> FieldResult<()> {
        let fields = fields.into_iter().collect::<Vec<_>>();
        if let Some(rejected) = fields.iter().find(|field| !field.fits(column.kind())) {
            return Err(FieldError::mismatch(column.kind(), rejected.value()));
        }
        self.columns.entry(column).or_default().extend(fields);
        Ok(())
    }

    pub fn values(&self, column: &ColumnDefinition) -> Option<&[Field]> {
        self.columns.get(column).map(Vec::as_slice)
    }

    pub fn contains_column(&self, column: &ColumnDefinition) -> bool {
        self.columns.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.columns.keys()
    }

    /// Removes a column together with its recorded fields.
    pub fn remove_column(&mut self, column: &ColumnDefinition) -> Option<Vec<Field>> {
        self.columns.remove(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColumnDefinition, &[Field])> {
        self.columns
            .iter()
            .map(|(column, fields)| (column, fields.as_slice()))
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[derive(Serialize)]
struct ColumnEntryRef<'a> {
    column: &'a ColumnDefinition,
    values: &'a [Field],
}

#[derive(Deserialize)]
struct ColumnEntry {
    column: ColumnDefinition,
    #[serde(default)]
    values: Vec<Field>,
}

impl Serialize for TrackedFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.iter()
                .map(|(column, values)| ColumnEntryRef { column, values }),
        )
    }
}

impl<'de> Deserialize<'de> for TrackedFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<ColumnEntry>::deserialize(deserializer)?;
        let mut tracked = Self::new();
        for entry in entries {
            tracked
                .add_values(entry.column, entry.values)
                .map_err(D::Error::custom)?;
        }
        Ok(tracked)
    }
}
