//! Error types for the person service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating input, resolving
//! persons, or deriving values from their dates.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the person service.
///
/// All operations in the service return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use person_service::error::ServiceError;
///
/// let error = ServiceError::PersonNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Person not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required date was not provided.
    #[error("Date is required but was not provided")]
    MissingDate,

    /// A date lies strictly after the current calendar date.
    #[error("Date {date} is in the future")]
    FutureDate {
        /// The offending date.
        date: NaiveDate,
    },

    /// The age unit selector was absent or not one of days, months, years.
    #[error("Age unit must be one of: days, months, years")]
    InvalidAgeUnit,

    /// The salary mode selector was absent or not one of full, min.
    #[error("Salary mode must be one of: full, min")]
    InvalidSalaryMode,

    /// A person payload contained invalid or inconsistent data.
    #[error("Invalid person field '{field}': {message}")]
    InvalidPerson {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No person exists with the requested identifier.
    #[error("Person not found: {id}")]
    PersonNotFound {
        /// The identifier that was not found.
        id: u64,
    },

    /// An unexpected failure during a derived-value computation.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_date_display() {
        let error = ServiceError::MissingDate;
        assert_eq!(error.to_string(), "Date is required but was not provided");
    }

    #[test]
    fn test_future_date_displays_date() {
        let error = ServiceError::FutureDate {
            date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
        };
        assert_eq!(error.to_string(), "Date 2099-01-01 is in the future");
    }

    #[test]
    fn test_invalid_age_unit_lists_accepted_values() {
        let error = ServiceError::InvalidAgeUnit;
        assert_eq!(error.to_string(), "Age unit must be one of: days, months, years");
    }

    #[test]
    fn test_invalid_salary_mode_lists_accepted_values() {
        let error = ServiceError::InvalidSalaryMode;
        assert_eq!(error.to_string(), "Salary mode must be one of: full, min");
    }

    #[test]
    fn test_invalid_person_displays_field_and_message() {
        let error = ServiceError::InvalidPerson {
            field: "birth_date".to_string(),
            message: "cannot be in the future".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid person field 'birth_date': cannot be in the future"
        );
    }

    #[test]
    fn test_person_not_found_displays_id() {
        let error = ServiceError::PersonNotFound { id: 7 };
        assert_eq!(error.to_string(), "Person not found: 7");
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = ServiceError::CalculationError {
            message: "salary overflow".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: salary overflow");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ServiceError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> ServiceResult<()> {
            Err(ServiceError::PersonNotFound { id: 1 })
        }

        fn propagates_error() -> ServiceResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
