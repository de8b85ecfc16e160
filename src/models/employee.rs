use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{not_blank, past_date};

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub second_name: Option<String>,
    pub last_name: String,
    pub maternal_surname: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub position: String,
}

/// An employee that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub second_name: Option<String>,
    pub last_name: String,
    pub maternal_surname: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub position: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(custom = "not_blank", length(max = 50, message = "size must be between 0 and 50"))]
    pub first_name: String,
    #[validate(length(max = 50, message = "size must be between 0 and 50"))]
    pub second_name: Option<String>,
    #[validate(custom = "not_blank", length(max = 50, message = "size must be between 0 and 50"))]
    pub last_name: String,
    #[validate(custom = "not_blank", length(max = 50, message = "size must be between 0 and 50"))]
    pub maternal_surname: String,
    pub age: Option<i32>,
    #[validate(length(max = 10, message = "size must be between 0 and 10"))]
    pub gender: Option<String>,
    #[validate(custom = "past_date")]
    pub birth_date: Option<NaiveDate>,
    #[validate(custom = "not_blank", length(max = 100, message = "size must be between 0 and 100"))]
    pub position: String,
}

/// Every field is optional; absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[validate(length(max = 50, message = "size must be between 0 and 50"))]
    pub first_name: Option<String>,
    #[validate(length(max = 50, message = "size must be between 0 and 50"))]
    pub second_name: Option<String>,
    #[validate(length(max = 50, message = "size must be between 0 and 50"))]
    pub last_name: Option<String>,
    #[validate(length(max = 50, message = "size must be between 0 and 50"))]
    pub maternal_surname: Option<String>,
    pub age: Option<i32>,
    #[validate(length(max = 10, message = "size must be between 0 and 10"))]
    pub gender: Option<String>,
    #[validate(custom = "past_date")]
    pub birth_date: Option<NaiveDate>,
    #[validate(length(max = 100, message = "size must be between 0 and 100"))]
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: i64,
    pub first_name: String,
    pub second_name: Option<String>,
    pub last_name: String,
    pub maternal_surname: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub position: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        EmployeeResponse {
            id: employee.id,
            first_name: employee.first_name,
            second_name: employee.second_name,
            last_name: employee.last_name,
            maternal_surname: employee.maternal_surname,
            age: employee.age,
            gender: employee.gender,
            birth_date: employee.birth_date,
            position: employee.position,
        }
    }
}
