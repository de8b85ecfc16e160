use std::sync::Arc;

use crate::errors::ApiError;
use crate::models::employee::{
    CreateEmployeeRequest, EmployeeResponse, NewEmployee, UpdateEmployeeRequest,
};
use crate::store::EmployeeStore;

/// Application service for employee records. Owns the not-found contract
/// and the partial-update merge; persistence is injected behind
/// [`EmployeeStore`].
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        EmployeeService { store }
    }

    pub async fn create(
        &self,
        request: CreateEmployeeRequest,
    ) -> Result<EmployeeResponse, ApiError> {
        let saved = self
            .store
            .insert(NewEmployee {
                first_name: request.first_name,
                second_name: request.second_name,
                last_name: request.last_name,
                maternal_surname: request.maternal_surname,
                age: request.age,
                gender: request.gender,
                birth_date: request.birth_date,
                position: request.position,
            })
            .await?;
        Ok(saved.into())
    }

    /// Creates employees one by one, in input order. Not transactional: a
    /// failure partway through leaves the earlier creations persisted.
    pub async fn create_many(
        &self,
        requests: Vec<CreateEmployeeRequest>,
    ) -> Result<Vec<EmployeeResponse>, ApiError> {
        let mut responses = Vec::with_capacity(requests.len());
        for request in requests {
            responses.push(self.create(request).await?);
        }
        Ok(responses)
    }

    pub async fn find_all(&self) -> Result<Vec<EmployeeResponse>, ApiError> {
        let employees = self.store.find_all().await?;
        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    /// Field-by-field merge: only fields carrying a value in the request
    /// overwrite the stored employee; the rest are left untouched.
    pub async fn update(
        &self,
        id: i64,
        request: UpdateEmployeeRequest,
    ) -> Result<EmployeeResponse, ApiError> {
        let mut employee = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if let Some(first_name) = request.first_name {
            employee.first_name = first_name;
        }
        if let Some(second_name) = request.second_name {
            employee.second_name = Some(second_name);
        }
        if let Some(last_name) = request.last_name {
            employee.last_name = last_name;
        }
        if let Some(maternal_surname) = request.maternal_surname {
            employee.maternal_surname = maternal_surname;
        }
        if let Some(age) = request.age {
            employee.age = Some(age);
        }
        if let Some(gender) = request.gender {
            employee.gender = Some(gender);
        }
        if let Some(birth_date) = request.birth_date {
            employee.birth_date = Some(birth_date);
        }
        if let Some(position) = request.position {
            employee.position = position;
        }

        let updated = self.store.update(&employee).await?;
        Ok(updated.into())
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        if !self.store.exists_by_id(id).await? {
            return Err(not_found(id));
        }
        self.store.delete_by_id(id).await
    }
}

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("Employee not found with ID: {}", id))
}
