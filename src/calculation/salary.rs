//! Salary calculation functionality.
//!
//! This module derives a person's salary from their hire date. The full
//! salary starts from a fixed initial amount and compounds once per
//! completed year of tenure; the minimum salary is the full salary divided
//! by a fixed divisor.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ServiceError, ServiceResult};

use super::dates::{elapsed_years, validate_date};

/// The salary variant to compute.
///
/// The set is closed: a selector outside it (or no selector at all) is
/// rejected with [`ServiceError::InvalidSalaryMode`] rather than falling
/// back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryMode {
    /// The full salary after yearly raises.
    Full,
    /// The full salary divided by the minimum-salary divisor.
    Min,
}

impl SalaryMode {
    /// Parses a salary mode from its lowercase wire form.
    ///
    /// Returns `None` for anything outside the closed set, which callers
    /// treat identically to an absent selector.
    ///
    /// # Examples
    ///
    /// ```
    /// use person_service::calculation::SalaryMode;
    ///
    /// assert_eq!(SalaryMode::parse("full"), Some(SalaryMode::Full));
    /// assert_eq!(SalaryMode::parse("gross"), None);
    /// ```
    pub fn parse(value: &str) -> Option<SalaryMode> {
        match value {
            "full" => Some(SalaryMode::Full),
            "min" => Some(SalaryMode::Min),
            _ => None,
        }
    }
}

/// Returns the salary at hire, before any yearly raise.
pub fn initial_salary() -> Decimal {
    Decimal::new(1558_00, 2)
}

/// Returns the fraction of the current salary added by each yearly raise.
pub fn percent_increase() -> Decimal {
    Decimal::new(18, 2)
}

/// Returns the flat amount added by each yearly raise.
pub fn fixed_increase() -> Decimal {
    Decimal::new(500_00, 2)
}

/// Returns the divisor relating the full salary to the minimum salary.
pub fn min_salary_divisor() -> Decimal {
    Decimal::new(1302_00, 2)
}

/// Calculates the salary for a hire date as of `today`.
///
/// The mode selector is checked first; the hire date is then validated
/// exactly once, inside the hire-years computation. The full salary applies
/// one raise of 18% plus 500.00 per completed year of tenure, carrying full
/// decimal precision between iterations and rounding only the final result
/// to two fractional digits. The minimum salary divides the full-precision
/// full salary by 1302.00 and rounds the quotient up (away from zero) at
/// the second digit.
///
/// `today` is captured once by the caller and passed in explicitly, keeping
/// the calculation deterministic and testable against a fixed date.
///
/// # Errors
///
/// - [`ServiceError::InvalidSalaryMode`] when `mode` is `None`
/// - [`ServiceError::MissingDate`] when `hire_date` is `None`
/// - [`ServiceError::FutureDate`] when `hire_date` is after `today`
/// - [`ServiceError::CalculationError`] when the compounding or division
///   arithmetic fails
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use person_service::calculation::{calculate_salary, SalaryMode};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hire = NaiveDate::from_ymd_opt(2023, 8, 4).unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
///
/// let salary = calculate_salary(Some(hire), Some(SalaryMode::Full), today).unwrap();
/// assert_eq!(salary, Decimal::from_str("4346.04").unwrap());
/// ```
pub fn calculate_salary(
    hire_date: Option<NaiveDate>,
    mode: Option<SalaryMode>,
    today: NaiveDate,
) -> ServiceResult<Decimal> {
    let mode = mode.ok_or(ServiceError::InvalidSalaryMode)?;
    match mode {
        SalaryMode::Full => {
            let salary = full_salary(hire_date, today)?;
            Ok(salary.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        }
        SalaryMode::Min => {
            let salary = full_salary(hire_date, today)?;
            let quotient = salary.checked_div(min_salary_divisor()).ok_or_else(|| {
                ServiceError::CalculationError {
                    message: format!("failed to divide salary {salary} by minimum divisor"),
                }
            })?;
            Ok(quotient.round_dp_with_strategy(2, RoundingStrategy::AwayFromZero))
        }
    }
}

/// Whole calendar years of tenure for a hire date as of `today`.
///
/// This is the single validation point for the hire date: presence and
/// not-in-the-future are checked here before the year count is taken.
pub fn hire_years(hire_date: Option<NaiveDate>, today: NaiveDate) -> ServiceResult<i64> {
    let hire_date = validate_date(hire_date, today)?;
    elapsed_years(hire_date, today)
}

/// The full salary at carried precision, rounded only by the caller.
fn full_salary(hire_date: Option<NaiveDate>, today: NaiveDate) -> ServiceResult<Decimal> {
    let years = hire_years(hire_date, today)?;
    let mut salary = initial_salary();
    for _ in 0..years {
        salary = salary
            .checked_mul(percent_increase())
            .and_then(|raise| raise.checked_add(fixed_increase()))
            .and_then(|raise| salary.checked_add(raise))
            .ok_or_else(|| ServiceError::CalculationError {
                message: format!("salary overflow after {years} years of raises"),
            })?;
    }
    Ok(salary)
}
