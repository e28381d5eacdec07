//! Response types for the person service API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a person not found error response.
    pub fn person_not_found(id: u64) -> Self {
        Self::new("PERSON_NOT_FOUND", format!("Person not found: {}", id))
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ServiceError> for ApiErrorResponse {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::MissingDate => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("MISSING_DATE", error.to_string()),
            },
            ServiceError::FutureDate { date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "FUTURE_DATE",
                    format!("Date {} is in the future", date),
                    "Dates used for derived values must not be after today",
                ),
            },
            ServiceError::InvalidAgeUnit => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_AGE_UNIT",
                    error.to_string(),
                    "Pass the unit in the 'output' query parameter",
                ),
            },
            ServiceError::InvalidSalaryMode => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SALARY_MODE",
                    error.to_string(),
                    "Pass the mode in the 'output' query parameter",
                ),
            },
            ServiceError::InvalidPerson { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PERSON",
                    format!("Invalid person field '{}': {}", field, message),
                    "The person payload contains invalid information",
                ),
            },
            ServiceError::PersonNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::person_not_found(id),
            },
            ServiceError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_person_not_found_maps_to_404() {
        let api_error: ApiErrorResponse = ServiceError::PersonNotFound { id: 9 }.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "PERSON_NOT_FOUND");
        assert!(api_error.error.message.contains('9'));
    }

    #[test]
    fn test_validation_failures_map_to_400() {
        let errors = [
            ServiceError::MissingDate,
            ServiceError::FutureDate {
                date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            },
            ServiceError::InvalidAgeUnit,
            ServiceError::InvalidSalaryMode,
            ServiceError::InvalidPerson {
                field: "name".to_string(),
                message: "must not be blank".to_string(),
            },
        ];

        for error in errors {
            let api_error: ApiErrorResponse = error.into();
            assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_calculation_error_maps_to_500() {
        let api_error: ApiErrorResponse = ServiceError::CalculationError {
            message: "overflow".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CALCULATION_ERROR");
        assert_eq!(api_error.error.details.as_deref(), Some("overflow"));
    }

    #[test]
    fn test_invalid_age_unit_code() {
        let api_error: ApiErrorResponse = ServiceError::InvalidAgeUnit.into();
        assert_eq!(api_error.error.code, "INVALID_AGE_UNIT");
    }

    #[test]
    fn test_invalid_salary_mode_code() {
        let api_error: ApiErrorResponse = ServiceError::InvalidSalaryMode.into();
        assert_eq!(api_error.error.code, "INVALID_SALARY_MODE");
    }
}
