use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::employee::{Employee, NewEmployee};

#[cfg(test)]
pub mod memory;
pub mod pg;

/// Single-table persistence contract for employee rows.
///
/// `insert` and `update` together cover save semantics: insert assigns the
/// id, update overwrites the row matching it. `delete_by_id` does not
/// report a missing row; callers check existence first.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn insert(&self, employee: NewEmployee) -> Result<Employee, ApiError>;
    async fn update(&self, employee: &Employee) -> Result<Employee, ApiError>;
    async fn find_all(&self) -> Result<Vec<Employee>, ApiError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, ApiError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ApiError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError>;
}
