use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use crate::errors::ApiError;
use crate::models::employee::{Employee, NewEmployee};
use crate::store::EmployeeStore;

/// In-memory store used by tests. Ids are assigned sequentially from 1,
/// mirroring the BIGSERIAL column behind the Postgres store.
#[derive(Default)]
pub struct MemoryEmployeeStore {
    rows: Mutex<Vec<Employee>>,
    next_id: AtomicI64,
    broken: bool,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        MemoryEmployeeStore::default()
    }

    /// A store whose every operation fails, for exercising the 500 path.
    pub fn broken() -> Self {
        MemoryEmployeeStore {
            broken: true,
            ..MemoryEmployeeStore::default()
        }
    }

    fn check(&self) -> Result<(), ApiError> {
        if self.broken {
            return Err(ApiError::Database("store is offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn insert(&self, employee: NewEmployee) -> Result<Employee, ApiError> {
        self.check()?;
        let saved = Employee {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            first_name: employee.first_name,
            second_name: employee.second_name,
            last_name: employee.last_name,
            maternal_surname: employee.maternal_surname,
            age: employee.age,
            gender: employee.gender,
            birth_date: employee.birth_date,
            position: employee.position,
        };
        self.rows.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, ApiError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        // Matches the Postgres store, whose UPDATE .. RETURNING fails when
        // no row carries the id.
        let row = rows
            .iter_mut()
            .find(|row| row.id == employee.id)
            .ok_or_else(|| {
                ApiError::Database(format!("no employee row with id {}", employee.id))
            })?;
        *row = employee.clone();
        Ok(employee.clone())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, ApiError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, ApiError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ApiError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().iter().any(|row| row.id == id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        self.check()?;
        self.rows.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i64) -> Employee {
        Employee {
            id,
            first_name: "Fernando".to_string(),
            second_name: None,
            last_name: "Hueso".to_string(),
            maternal_surname: "Rivera".to_string(),
            age: Some(30),
            gender: Some("MALE".to_string()),
            birth_date: None,
            position: "Dev".to_string(),
        }
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_an_error() {
        let store = MemoryEmployeeStore::new();

        let err = store.update(&sample(7)).await.unwrap_err();

        assert!(matches!(err, ApiError::Database(_)));
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_the_matching_row() {
        let store = MemoryEmployeeStore::new();

        let inserted = store
            .insert(NewEmployee {
                first_name: "Fernando".to_string(),
                second_name: None,
                last_name: "Hueso".to_string(),
                maternal_surname: "Rivera".to_string(),
                age: Some(30),
                gender: Some("MALE".to_string()),
                birth_date: None,
                position: "Dev".to_string(),
            })
            .await
            .unwrap();

        let mut changed = inserted.clone();
        changed.position = "Lead".to_string();
        store.update(&changed).await.unwrap();

        assert_eq!(store.find_by_id(inserted.id).await.unwrap(), Some(changed));
    }
}
