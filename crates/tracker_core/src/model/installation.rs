//! Installation aggregate.
//!
//! # Responsibility
//! - Track one repair/improvement process: its plan, outcomes, weekly
//!   reviews and typed tracking fields.
//! - Keep the derived day count in sync with the repair dates.
//!
//! # Invariants
//! - `days_between_start_and_end` equals `end - start` in whole days when
//!   both dates are set, otherwise `0`. An end date before the start date
//!   yields a negative count; it is not clamped.
//! - The day count is never read from input; it is recomputed on
//!   construction, deserialization and every date update.

use crate::error::FieldResult;
use crate::model::column::ColumnDefinition;
use crate::model::field::Field;
use crate::model::tracked::TrackedFields;
use crate::model::weekly_review::WeeklyReview;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One tracked repair process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Installation {
    repair: String,
    repair_start_date: Option<NaiveDate>,
    repair_end_date: Option<NaiveDate>,
    days_between_start_and_end: i64,
    plan: Vec<String>,
    outcome: Vec<String>,
    weekly_reviews: Vec<WeeklyReview>,
    fields_for_tracking: TrackedFields,
}

impl Installation {
    /// Creates an installation with empty plan, outcomes, reviews and fields.
    pub fn new(
        repair: impl Into<String>,
        repair_start_date: Option<NaiveDate>,
        repair_end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            repair: repair.into(),
            repair_start_date,
            repair_end_date,
            days_between_start_and_end: days_between(repair_start_date, repair_end_date),
            plan: Vec::new(),
            outcome: Vec::new(),
            weekly_reviews: Vec::new(),
            fields_for_tracking: TrackedFields::new(),
        }
    }

    pub fn repair(&self) -> &str {
        &self.repair
    }

    pub fn set_repair(&mut self, repair: impl Into<String>) {
        self.repair = repair.into();
    }

    pub fn repair_start_date(&self) -> Option<NaiveDate> {
        self.repair_start_date
    }

    pub fn repair_end_date(&self) -> Option<NaiveDate> {
        self.repair_end_date
    }

    /// Whole days from start to end; may be negative.
    pub fn days_between_start_and_end(&self) -> i64 {
        self.days_between_start_and_end
    }

    pub fn plan(&self) -> &[String] {
        &self.plan
    }

    pub fn outcome(&self) -> &[String] {
        &self.outcome
    }

    pub fn weekly_reviews(&self) -> &[WeeklyReview] {
        &self.weekly_reviews
    }

    /// Mutable access for in-place review edits (text, `updated_at`).
    pub fn weekly_review_mut(&mut self, index: usize) -> Option<&mut WeeklyReview> {
        self.weekly_reviews.get_mut(index)
    }

    pub fn fields_for_tracking(&self) -> &TrackedFields {
        &self.fields_for_tracking
    }

    pub fn add_plan_item(&mut self, plan_item: impl Into<String>) {
        self.plan.push(plan_item.into());
    }

    pub fn add_outcome(&mut self, outcome: impl Into<String>) {
        self.outcome.push(outcome.into());
    }

    pub fn add_weekly_review(&mut self, weekly_review: WeeklyReview) {
        self.weekly_reviews.push(weekly_review);
    }

    /// Tracks `field` under `column`.
    ///
    /// # Errors
    /// - `FieldError::TypeMismatch` when the field payload does not fit the
    ///   column kind. The installation is unchanged.
    pub fn add_field_for_tracking(
        &mut self,
        column: ColumnDefinition,
        field: Field,
    ) -> FieldResult<()> {
        self.fields_for_tracking.add_value(column, field)
    }

    /// Removes a tracked column and returns its fields.
    pub fn remove_tracked_column(&mut self, column: &ColumnDefinition) -> Option<Vec<Field>> {
        self.fields_for_tracking.remove_column(column)
    }

    /// Replaces both repair dates and recomputes the day count.
    pub fn update_dates(
        &mut self,
        repair_start_date: Option<NaiveDate>,
        repair_end_date: Option<NaiveDate>,
    ) {
        self.repair_start_date = repair_start_date;
        self.repair_end_date = repair_end_date;
        self.days_between_start_and_end = days_between(repair_start_date, repair_end_date);
    }
}

fn days_between(start: Option<NaiveDate>, end: Option<NaiveDate>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => end.signed_duration_since(start).num_days(),
        _ => 0,
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InstallationWire {
    #[serde(default)]
    repair: String,
    #[serde(default)]
    repair_start_date: Option<NaiveDate>,
    #[serde(default)]
    repair_end_date: Option<NaiveDate>,
    #[serde(default)]
    plan: Option<Vec<String>>,
    #[serde(default)]
    outcome: Option<Vec<String>>,
    #[serde(default)]
    weekly_reviews: Option<Vec<WeeklyReview>>,
    #[serde(default)]
    fields_for_tracking: Option<TrackedFields>,
}

impl<'de> Deserialize<'de> for Installation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = InstallationWire::deserialize(deserializer)?;
        let mut installation = Self::new(wire.repair, wire.repair_start_date, wire.repair_end_date);
        installation.plan = wire.plan.unwrap_or_default();
        installation.outcome = wire.outcome.unwrap_or_default();
        installation.weekly_reviews = wire.weekly_reviews.unwrap_or_default();
        installation.fields_for_tracking = wire.fields_for_tracking.unwrap_or_default();
        Ok(installation)
    }
}
