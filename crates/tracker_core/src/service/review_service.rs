//! Weekly review use-case service.

use crate::model::weekly_review::WeeklyReview;
use crate::repo::memory_repo::Repository;
use crate::service::error::ServiceResult;
use log::info;

/// Use-case service wrapper for standalone weekly reviews.
pub struct ReviewService<R: Repository<WeeklyReview>> {
    repo: R,
}

impl<R: Repository<WeeklyReview>> ReviewService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create(&mut self, review: WeeklyReview) -> usize {
        let index = self.repo.create(review);
        info!("event=review_create module=service status=ok index={index}");
        index
    }

    pub fn list(&self) -> &[WeeklyReview] {
        self.repo.list()
    }

    pub fn get(&self, index: usize) -> ServiceResult<&WeeklyReview> {
        Ok(self.repo.get(index)?)
    }

    pub fn replace(&mut self, index: usize, review: WeeklyReview) -> ServiceResult<WeeklyReview> {
        Ok(self.repo.replace(index, review)?)
    }

    pub fn delete(&mut self, index: usize) -> ServiceResult<WeeklyReview> {
        let removed = self.repo.delete(index)?;
        info!("event=review_delete module=service status=ok index={index}");
        Ok(removed)
    }

    /// Replaces the review text and stamps `updated_at`.
    pub fn revise(
        &mut self,
        index: usize,
        review: impl Into<String>,
    ) -> ServiceResult<&WeeklyReview> {
        let stored = self.repo.get_mut(index)?;
        stored.revise(review);
        info!("event=review_revise module=service status=ok index={index}");
        Ok(&*stored)
    }
}
