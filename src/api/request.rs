//! Request types for the person service API.
//!
//! This module defines the JSON request structures for the person endpoints
//! and the validation applied to incoming person payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};
use crate::models::Person;

/// Request body for `POST /person`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePersonRequest {
    /// The person's display name.
    pub name: String,
    /// The person's date of birth.
    pub birth_date: NaiveDate,
    /// The date the person was hired.
    pub hire_date: NaiveDate,
}

impl CreatePersonRequest {
    /// Validates the payload against `today`.
    pub fn validate(&self, today: NaiveDate) -> ServiceResult<()> {
        validate_person_fields(&self.name, self.birth_date, self.hire_date, today)
    }
}

/// Request body for `PUT /person/{id}`, replacing every mutable field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacePersonRequest {
    /// The person's display name.
    pub name: String,
    /// The person's date of birth.
    pub birth_date: NaiveDate,
    /// The date the person was hired.
    pub hire_date: NaiveDate,
}

impl ReplacePersonRequest {
    /// Validates the payload against `today`.
    pub fn validate(&self, today: NaiveDate) -> ServiceResult<()> {
        validate_person_fields(&self.name, self.birth_date, self.hire_date, today)
    }
}

/// Request body for `PATCH /person/{id}`.
///
/// Every field is optional; omitted fields keep their stored values. A
/// blank name is treated the same as an omitted one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchPersonRequest {
    /// Replacement name, if any.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement birth date, if any.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Replacement hire date, if any.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}

impl PatchPersonRequest {
    /// Merges this patch over an existing record.
    ///
    /// Returns the merged `(name, birth_date, hire_date)` triple; the caller
    /// validates the merged result as a whole before storing it.
    pub fn merge_into(&self, person: &Person) -> (String, NaiveDate, NaiveDate) {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| person.name.clone());
        let birth_date = self.birth_date.unwrap_or(person.birth_date);
        let hire_date = self.hire_date.unwrap_or(person.hire_date);
        (name, birth_date, hire_date)
    }
}

/// Query parameters for the derived-value endpoints.
///
/// The selector arrives as a plain string so that unrecognized values can be
/// rejected by the calculators with the same failure as an absent one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputQuery {
    /// The requested output selector (age unit or salary mode).
    #[serde(default)]
    pub output: Option<String>,
}

/// Validates a person payload: non-blank name, no future dates, and the
/// birth date strictly before the hire date.
pub(super) fn validate_person_fields(
    name: &str,
    birth_date: NaiveDate,
    hire_date: NaiveDate,
    today: NaiveDate,
) -> ServiceResult<()> {
    if name.trim().is_empty() {
        return Err(ServiceError::InvalidPerson {
            field: "name".to_string(),
            message: "must not be blank".to_string(),
        });
    }
    if birth_date > today {
        return Err(ServiceError::InvalidPerson {
            field: "birth_date".to_string(),
            message: "must not be in the future".to_string(),
        });
    }
    if hire_date > today {
        return Err(ServiceError::InvalidPerson {
            field: "hire_date".to_string(),
            message: "must not be in the future".to_string(),
        });
    }
    if birth_date >= hire_date {
        return Err(ServiceError::InvalidPerson {
            field: "birth_date".to_string(),
            message: "must be before hire_date".to_string(),
        });
    }
    Ok(())
}
