use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::ApiError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload
        .validate()
        .map_err(|err| ApiError::Validation(field_messages(&err)))
}

/// Folds validator output into the field -> message map exposed to clients.
/// Field keys match the JSON wire names, so snake_case becomes camelCase.
/// A field can violate several constraints at once; the map holds one
/// message per field, chosen by constraint code so the pick does not
/// depend on validator's internal ordering.
fn field_messages(errors: &ValidationErrors) -> HashMap<String, String> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let message = errs
                .iter()
                .min_by_key(|e| e.code.as_ref())
                .and_then(|e| e.message.as_deref())
                .unwrap_or("invalid value")
                .to_string();
            (camel_case(field), message)
        })
        .collect()
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

pub fn past_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date >= Utc::now().date_naive() {
        let mut err = ValidationError::new("past");
        err.message = Some("must be a past date".into());
        return Err(err);
    }
    Ok(())
}
