//! Age calculation functionality.
//!
//! This module derives a person's age from their birth date as a whole
//! number of elapsed calendar units.

use chrono::NaiveDate;

use crate::error::{ServiceError, ServiceResult};

use super::dates::{elapsed_days, elapsed_months, elapsed_years, validate_date};

/// The calendar unit an age is expressed in.
///
/// The set is closed: a selector outside it (or no selector at all) is
/// rejected with [`ServiceError::InvalidAgeUnit`] rather than falling back
/// to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeUnit {
    /// Whole elapsed days.
    Days,
    /// Whole elapsed calendar months.
    Months,
    /// Whole elapsed calendar years.
    Years,
}

impl AgeUnit {
    /// Parses an age unit from its lowercase wire form.
    ///
    /// Returns `None` for anything outside the closed set, which callers
    /// treat identically to an absent selector.
    ///
    /// # Examples
    ///
    /// ```
    /// use person_service::calculation::AgeUnit;
    ///
    /// assert_eq!(AgeUnit::parse("years"), Some(AgeUnit::Years));
    /// assert_eq!(AgeUnit::parse("decades"), None);
    /// ```
    pub fn parse(value: &str) -> Option<AgeUnit> {
        match value {
            "days" => Some(AgeUnit::Days),
            "months" => Some(AgeUnit::Months),
            "years" => Some(AgeUnit::Years),
            _ => None,
        }
    }
}

/// Calculates the whole-unit age for a birth date as of `today`.
///
/// The birth date is validated first (present, not after `today`), then the
/// unit selector. The result is the truncated calendar-unit difference
/// between the birth date and `today`, so it is non-negative for any
/// accepted input.
///
/// `today` is captured once by the caller and passed in explicitly, keeping
/// the calculation deterministic and testable against a fixed date.
///
/// # Errors
///
/// - [`ServiceError::MissingDate`] when `birth_date` is `None`
/// - [`ServiceError::FutureDate`] when `birth_date` is after `today`
/// - [`ServiceError::InvalidAgeUnit`] when `unit` is `None`
/// - [`ServiceError::CalculationError`] when the unit arithmetic fails
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use person_service::calculation::{calculate_age, AgeUnit};
///
/// let birth = NaiveDate::from_ymd_opt(1990, 1, 15).unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
///
/// let age = calculate_age(Some(birth), Some(AgeUnit::Years), today).unwrap();
/// assert_eq!(age, 36);
/// ```
pub fn calculate_age(
    birth_date: Option<NaiveDate>,
    unit: Option<AgeUnit>,
    today: NaiveDate,
) -> ServiceResult<i64> {
    let birth_date = validate_date(birth_date, today)?;
    let unit = unit.ok_or(ServiceError::InvalidAgeUnit)?;
    match unit {
        AgeUnit::Days => Ok(elapsed_days(birth_date, today)),
        AgeUnit::Months => elapsed_months(birth_date, today),
        AgeUnit::Years => elapsed_years(birth_date, today),
    }
}
