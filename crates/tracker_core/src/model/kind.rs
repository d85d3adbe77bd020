//! Column kinds and the per-kind value rules.
//!
//! # Responsibility
//! - Define the closed set of spreadsheet-like column kinds.
//! - Decide whether a payload is valid for a kind (`accepts`).
//! - Convert a payload that is not valid for a kind into one that is
//!   (`coerce`), when a conversion path exists.
//!
//! # Invariants
//! - A null payload is valid for every kind.
//! - `coerce` only ever returns payloads that `accepts` the same kind.
//! - Numbers must be finite under every kind, whether stored directly or
//!   parsed from text; `NaN`/`inf` are never valid payloads.

use crate::error::{FieldError, FieldResult};
use crate::model::value::FieldValue;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

const PERCENTAGE_MIN: f64 = 0.0;
const PERCENTAGE_MAX: f64 = 100.0;

/// Declared category of a tracked column and of every value stored in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnKind {
    /// Free text.
    Text,
    /// Any float.
    Number,
    /// Float within `0..=100`.
    Percentage,
    /// Float amount. No currency-specific bounds are applied.
    Currency,
    /// Calendar date.
    Date,
    /// Accepts any payload without conversion.
    Uncategorized,
}

impl ColumnKind {
    /// Every kind, in declaration order.
    pub const ALL: [ColumnKind; 6] = [
        ColumnKind::Text,
        ColumnKind::Number,
        ColumnKind::Percentage,
        ColumnKind::Currency,
        ColumnKind::Date,
        ColumnKind::Uncategorized,
    ];

    /// Returns the stable wire name (`TEXT`, `NUMBER`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Number => "NUMBER",
            Self::Percentage => "PERCENTAGE",
            Self::Currency => "CURRENCY",
            Self::Date => "DATE",
            Self::Uncategorized => "UNCATEGORIZED",
        }
    }

    /// Returns whether `value` may be stored under this kind as-is.
    ///
    /// `None` (null) is accepted by every kind.
    pub fn accepts(self, value: Option<&FieldValue>) -> bool {
        value.map_or(true, |value| self.accepts_value(value))
    }

    /// Returns whether a present payload may be stored under this kind as-is.
    pub fn accepts_value(self, value: &FieldValue) -> bool {
        match (self, value) {
            (_, FieldValue::Number(number)) if !number.is_finite() => false,
            (Self::Text, FieldValue::Text(_)) => true,
            (Self::Number | Self::Currency, FieldValue::Number(_)) => true,
            (Self::Percentage, FieldValue::Number(number)) => is_percentage(*number),
            (Self::Date, FieldValue::Date(_)) => true,
            (Self::Uncategorized, _) => true,
            _ => false,
        }
    }

    /// Converts `value` into a payload valid for this kind.
    ///
    /// Conversion paths:
    /// - `Text`: any payload, via its canonical textual form.
    /// - `Number` / `Currency`: text holding a float.
    /// - `Percentage`: text holding a float within `0..=100`.
    /// - `Date`: text in `YYYY-MM-DD` form.
    /// - `Uncategorized`: any valid payload, unchanged.
    ///
    /// Callers only need this for payloads that `accepts_value` rejects, but
    /// already-valid payloads are returned unchanged for the identity paths.
    ///
    /// # Errors
    /// - `FieldError::TypeMismatch` when no conversion path exists.
    pub fn coerce(self, value: &FieldValue) -> FieldResult<FieldValue> {
        let converted = match (self, value) {
            (Self::Text, other) => Some(FieldValue::Text(other.to_string())),
            (Self::Number | Self::Currency, FieldValue::Text(raw)) => {
                parse_number(raw).map(FieldValue::Number)
            }
            (Self::Percentage, FieldValue::Text(raw)) => parse_number(raw)
                .filter(|number| is_percentage(*number))
                .map(FieldValue::Number),
            (Self::Date, FieldValue::Text(raw)) => parse_iso_date(raw).map(FieldValue::Date),
            (kind, other) if kind.accepts_value(other) => Some(other.clone()),
            _ => None,
        };

        converted.ok_or_else(|| FieldError::mismatch(self, Some(value)))
    }
}

impl Display for ColumnKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_percentage(number: f64) -> bool {
    (PERCENTAGE_MIN..=PERCENTAGE_MAX).contains(&number)
}

/// Parses user text as a finite float, ignoring surrounding whitespace.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Parses strict ISO calendar dates (`YYYY-MM-DD`, zero padded).
pub(crate) fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    if !ISO_DATE_RE.is_match(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
