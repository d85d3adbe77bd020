//! Standalone field use-case service.
//!
//! # Invariants
//! - Value and kind changes go through `Field` validation; a rejected change
//!   leaves the stored field unchanged.

use crate::model::field::Field;
use crate::model::kind::ColumnKind;
use crate::model::value::FieldValue;
use crate::repo::memory_repo::Repository;
use crate::service::error::ServiceResult;
use log::{info, warn};

/// Use-case service wrapper for stored fields.
pub struct FieldService<R: Repository<Field>> {
    repo: R,
}

impl<R: Repository<Field>> FieldService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create(&mut self, field: Field) -> usize {
        let index = self.repo.create(field);
        info!("event=field_create module=service status=ok index={index}");
        index
    }

    pub fn list(&self) -> &[Field] {
        self.repo.list()
    }

    pub fn get(&self, index: usize) -> ServiceResult<&Field> {
        Ok(self.repo.get(index)?)
    }

    pub fn replace(&mut self, index: usize, field: Field) -> ServiceResult<Field> {
        Ok(self.repo.replace(index, field)?)
    }

    pub fn delete(&mut self, index: usize) -> ServiceResult<Field> {
        let removed = self.repo.delete(index)?;
        info!("event=field_delete module=service status=ok index={index}");
        Ok(removed)
    }

    /// Replaces the payload of the stored field, keeping its kind.
    pub fn set_value(
        &mut self,
        index: usize,
        value: Option<FieldValue>,
    ) -> ServiceResult<&Field> {
        let field = self.repo.get_mut(index)?;
        if let Err(err) = field.set_value(value) {
            warn!(
                "event=field_set_value module=service status=rejected index={index} kind={}",
                field.kind()
            );
            return Err(err.into());
        }
        Ok(&*field)
    }

    /// Retypes the stored field, coercing its payload when needed.
    pub fn set_kind(&mut self, index: usize, kind: ColumnKind) -> ServiceResult<&Field> {
        let field = self.repo.get_mut(index)?;
        let from = field.kind();
        if let Err(err) = field.set_kind(kind) {
            warn!(
                "event=field_set_kind module=service status=rejected index={index} from={from} to={kind}"
            );
            return Err(err.into());
        }
        info!("event=field_set_kind module=service status=ok index={index} from={from} to={kind}");
        Ok(&*field)
    }
}
