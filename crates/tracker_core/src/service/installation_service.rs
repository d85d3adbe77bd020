//! Installation use-case service.
//!
//! # Responsibility
//! - Provide CRUD entry points over installations addressed by index.
//! - Provide sub-resource appends (plan item, outcome, weekly review,
//!   tracked field) and repair date updates.
//!
//! # Invariants
//! - Service APIs never bypass `Installation` validation.
//! - A rejected append leaves the stored installation unchanged.
//! - Log events carry indexes and kinds only, never user text.

use crate::model::column::ColumnDefinition;
use crate::model::field::Field;
use crate::model::installation::Installation;
use crate::model::request::FieldRequest;
use crate::model::weekly_review::WeeklyReview;
use crate::repo::memory_repo::Repository;
use crate::service::error::ServiceResult;
use chrono::NaiveDate;
use log::{info, warn};

/// Use-case service wrapper for installation operations.
pub struct InstallationService<R: Repository<Installation>> {
    repo: R,
}

impl<R: Repository<Installation>> InstallationService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores a new installation and returns its index.
    pub fn create(&mut self, installation: Installation) -> usize {
        let index = self.repo.create(installation);
        info!("event=installation_create module=service status=ok index={index}");
        index
    }

    pub fn list(&self) -> &[Installation] {
        self.repo.list()
    }

    pub fn get(&self, index: usize) -> ServiceResult<&Installation> {
        Ok(self.repo.get(index)?)
    }

    /// Replaces the installation at `index`, returning the previous one.
    pub fn replace(
        &mut self,
        index: usize,
        installation: Installation,
    ) -> ServiceResult<Installation> {
        let previous = self.repo.replace(index, installation)?;
        info!("event=installation_replace module=service status=ok index={index}");
        Ok(previous)
    }

    pub fn delete(&mut self, index: usize) -> ServiceResult<Installation> {
        let removed = self.repo.delete(index)?;
        info!("event=installation_delete module=service status=ok index={index}");
        Ok(removed)
    }

    pub fn add_plan_item(
        &mut self,
        index: usize,
        plan_item: impl Into<String>,
    ) -> ServiceResult<&Installation> {
        let installation = self.repo.get_mut(index)?;
        installation.add_plan_item(plan_item);
        info!(
            "event=installation_add_plan module=service status=ok index={index} plan_len={}",
            installation.plan().len()
        );
        Ok(&*installation)
    }

    pub fn add_outcome(
        &mut self,
        index: usize,
        outcome: impl Into<String>,
    ) -> ServiceResult<&Installation> {
        let installation = self.repo.get_mut(index)?;
        installation.add_outcome(outcome);
        info!(
            "event=installation_add_outcome module=service status=ok index={index} outcome_len={}",
            installation.outcome().len()
        );
        Ok(&*installation)
    }

    pub fn add_weekly_review(
        &mut self,
        index: usize,
        weekly_review: WeeklyReview,
    ) -> ServiceResult<&Installation> {
        let installation = self.repo.get_mut(index)?;
        installation.add_weekly_review(weekly_review);
        info!(
            "event=installation_add_review module=service status=ok index={index} review_len={}",
            installation.weekly_reviews().len()
        );
        Ok(&*installation)
    }

    /// Tracks `field` under `column` on the installation at `index`.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` for an unknown index.
    /// - `ServiceError::Field` when the field payload does not fit the column.
    pub fn add_field_for_tracking(
        &mut self,
        index: usize,
        column: ColumnDefinition,
        field: Field,
    ) -> ServiceResult<&Installation> {
        let installation = self.repo.get_mut(index)?;
        let column_kind = column.kind();
        let field_kind = field.kind();
        if let Err(err) = installation.add_field_for_tracking(column, field) {
            warn!(
                "event=installation_add_field module=service status=rejected index={index} column_kind={column_kind} field_kind={field_kind}"
            );
            return Err(err.into());
        }
        info!(
            "event=installation_add_field module=service status=ok index={index} column_kind={column_kind}"
        );
        Ok(&*installation)
    }

    /// Builds column and field from raw request input, then tracks it.
    ///
    /// The installation is looked up first, so an unknown index is reported
    /// even when the request itself is malformed.
    pub fn add_field_from_request(
        &mut self,
        index: usize,
        request: FieldRequest,
    ) -> ServiceResult<&Installation> {
        self.ensure_exists(index)?;
        let (column, field) = request.into_parts().map_err(|err| {
            warn!(
                "event=installation_add_field module=service status=invalid_request index={index}"
            );
            err
        })?;
        self.add_field_for_tracking(index, column, field)
    }

    fn ensure_exists(&self, index: usize) -> ServiceResult<()> {
        self.repo.get(index).map(|_| ()).map_err(Into::into)
    }

    /// Replaces the repair dates and recomputes the day count.
    pub fn update_dates(
        &mut self,
        index: usize,
        repair_start_date: Option<NaiveDate>,
        repair_end_date: Option<NaiveDate>,
    ) -> ServiceResult<&Installation> {
        let installation = self.repo.get_mut(index)?;
        installation.update_dates(repair_start_date, repair_end_date);
        info!(
            "event=installation_update_dates module=service status=ok index={index} days={}",
            installation.days_between_start_and_end()
        );
        Ok(&*installation)
    }
}
