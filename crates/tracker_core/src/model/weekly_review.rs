//! Weekly review records attached to installations.
//!
//! # Invariants
//! - `created_at` is stamped once at construction and has no setter.
//! - Missing review text defaults to [`DEFAULT_REVIEW_TEXT`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder text for reviews created without content.
pub const DEFAULT_REVIEW_TEXT: &str = "This is the start of your weekly review.";

/// One periodic free-text review of an installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReview {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    review: String,
}

impl WeeklyReview {
    /// Creates a review stamped with the current time.
    pub fn new(review: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            review: review.into(),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn review(&self) -> &str {
        &self.review
    }

    /// Replaces the text without touching `updated_at`.
    pub fn set_review(&mut self, review: impl Into<String>) {
        self.review = review.into();
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    /// Replaces the text and stamps `updated_at` with the current time.
    pub fn revise(&mut self, review: impl Into<String>) {
        self.review = review.into();
        self.updated_at = Utc::now();
    }
}

impl Default for WeeklyReview {
    fn default() -> Self {
        Self::new(DEFAULT_REVIEW_TEXT)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeeklyReviewWire {
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    review: Option<String>,
}

impl<'de> Deserialize<'de> for WeeklyReview {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WeeklyReviewWire::deserialize(deserializer)?;
        let created_at = wire.created_at.unwrap_or_else(Utc::now);
        Ok(Self {
            created_at,
            updated_at: wire.updated_at.unwrap_or(created_at),
            review: wire
                .review
                .unwrap_or_else(|| DEFAULT_REVIEW_TEXT.to_string()),
        })
    }
}
