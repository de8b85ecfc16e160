use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::models::employee::{Employee, NewEmployee};
use crate::store::EmployeeStore;

// "position" stays quoted: POSITION is a keyword in Postgres.
const COLUMNS: &str =
    "id, first_name, second_name, last_name, maternal_surname, age, gender, birth_date, \"position\"";

pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        PgEmployeeStore { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn insert(&self, employee: NewEmployee) -> Result<Employee, ApiError> {
        sqlx::query_as::<_, Employee>(&format!(
            "INSERT INTO employees \
             (first_name, second_name, last_name, maternal_surname, age, gender, birth_date, \"position\") \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {}",
            COLUMNS
        ))
        .bind(&employee.first_name)
        .bind(&employee.second_name)
        .bind(&employee.last_name)
        .bind(&employee.maternal_surname)
        .bind(employee.age)
        .bind(&employee.gender)
        .bind(employee.birth_date)
        .bind(&employee.position)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| ApiError::Database(err.to_string()))
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, ApiError> {
        sqlx::query_as::<_, Employee>(&format!(
            "UPDATE employees SET \
             first_name = $1, second_name = $2, last_name = $3, maternal_surname = $4, \
             age = $5, gender = $6, birth_date = $7, \"position\" = $8 \
             WHERE id = $9 \
             RETURNING {}",
            COLUMNS
        ))
        .bind(&employee.first_name)
        .bind(&employee.second_name)
        .bind(&employee.last_name)
        .bind(&employee.maternal_surname)
        .bind(employee.age)
        .bind(&employee.gender)
        .bind(employee.birth_date)
        .bind(&employee.position)
        .bind(employee.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| ApiError::Database(err.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, ApiError> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees ORDER BY id",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|err| ApiError::Database(err.to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, ApiError> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| ApiError::Database(err.to_string()))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ApiError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM employees WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| ApiError::Database(err.to_string()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| ApiError::Database(err.to_string()))?;
        Ok(())
    }
}
