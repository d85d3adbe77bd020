//! Raw field input carried by the outer CRUD layer.
//!
//! Form-style callers send the column title, the column type and the cell as
//! plain text. The text is read as a `Text` field and retyped to the column
//! type, so the regular coercion rules decide what is acceptable.

use crate::error::FieldResult;
use crate::model::column::ColumnDefinition;
use crate::model::field::Field;
use crate::model::kind::ColumnKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub column_type: Option<ColumnKind>,
    #[serde(default)]
    pub value: Option<String>,
}

impl FieldRequest {
    pub fn new(title: impl Into<String>, column_type: ColumnKind, value: Option<String>) -> Self {
        Self {
            title: Some(title.into()),
            column_type: Some(column_type),
            value,
        }
    }

    /// Builds the target column and a field converted to its kind.
    ///
    /// # Errors
    /// - `FieldError::InvalidArgument` when title or column type is missing.
    /// - `FieldError::TypeMismatch` when the text cannot be converted.
    pub fn into_parts(self) -> FieldResult<(ColumnDefinition, Field)> {
        let column = ColumnDefinition::try_from_parts(self.title, self.column_type)?;
        let mut field = match self.value {
            Some(raw) => Field::with_value(ColumnKind::Text, raw)?,
            None => Field::empty(ColumnKind::Text),
        };
        field.set_kind(column.kind())?;
        Ok((column, field))
    }
}
