//! Index-addressed repository contract and `Vec`-backed implementation.
//!
//! # Responsibility
//! - Provide create/list/get/replace/delete over one entity collection.
//!
//! # Invariants
//! - `create` appends; the returned index is the new last position.
//! - Failed calls never modify the collection.

use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for index-addressed collections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("{entity} not found at index {index}")]
    NotFound { entity: &'static str, index: usize },
}

/// Repository interface for one entity collection.
pub trait Repository<T> {
    /// Appends `item` and returns its index.
    fn create(&mut self, item: T) -> usize;
    fn list(&self) -> &[T];
    fn get(&self, index: usize) -> RepoResult<&T>;
    fn get_mut(&mut self, index: usize) -> RepoResult<&mut T>;
    /// Replaces the entity at `index` and returns the previous one.
    fn replace(&mut self, index: usize, item: T) -> RepoResult<T>;
    /// Removes the entity at `index`; later entities move down by one.
    fn delete(&mut self, index: usize) -> RepoResult<T>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// In-process, non-persistent repository.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    entity: &'static str,
    items: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    /// Creates an empty repository; `entity` names items in error messages.
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            items: Vec::new(),
        }
    }

    fn not_found(&self, index: usize) -> RepoError {
        RepoError::NotFound {
            entity: self.entity,
            index,
        }
    }
}

impl<T> Repository<T> for InMemoryRepository<T> {
    fn create(&mut self, item: T) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    fn list(&self) -> &[T] {
        &self.items
    }

    fn get(&self, index: usize) -> RepoResult<&T> {
        self.items.get(index).ok_or_else(|| self.not_found(index))
    }

    fn get_mut(&mut self, index: usize) -> RepoResult<&mut T> {
        let entity = self.entity;
        self.items
            .get_mut(index)
            .ok_or(RepoError::NotFound { entity, index })
    }

    fn replace(&mut self, index: usize, item: T) -> RepoResult<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    fn delete(&mut self, index: usize) -> RepoResult<T> {
        if index >= self.items.len() {
            return Err(self.not_found(index));
        }
        Ok(self.items.remove(index))
    }
}
