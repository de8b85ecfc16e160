use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Validation(HashMap<String, String>),
    NotFound(String),
    Database(String),
    Internal(String),
}

/// Body of every error response: `{timestamp, status, error, message, errors?}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, String>>,
}

impl ErrorBody {
    fn new(status: StatusCode, message: &str, errors: Option<HashMap<String, String>>) -> Self {
        ErrorBody {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.to_string(),
            errors,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::Validation(fields) => write!(f, "Validation failed: {:?}", fields),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::Database(msg) => write!(f, "Database Error: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            ApiError::BadRequest(msg) => ErrorBody::new(status, msg, None),
            ApiError::Validation(fields) => {
                ErrorBody::new(status, "Validation failed", Some(fields.clone()))
            }
            ApiError::NotFound(msg) => ErrorBody::new(status, msg, None),
            ApiError::Database(detail) | ApiError::Internal(detail) => {
                log::error!("Unhandled error: {}", detail);
                ErrorBody::new(status, "Internal server error", None)
            }
        };
        HttpResponse::build(status).json(body)
    }
}
