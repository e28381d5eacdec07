//! Date validation and elapsed-unit arithmetic shared by the calculators.
//!
//! Elapsed counts are whole calendar units, truncating: the number of
//! complete unit boundaries crossed between the start date and the
//! reference date, never a fractional division of day counts.

use chrono::{Datelike, NaiveDate};

use crate::error::{ServiceError, ServiceResult};

/// Validates that a date is present and not after the reference date.
///
/// Returns the unwrapped date on success. Fails with
/// [`ServiceError::MissingDate`] when `date` is `None` and with
/// [`ServiceError::FutureDate`] when it lies strictly after `today`.
pub(super) fn validate_date(date: Option<NaiveDate>, today: NaiveDate) -> ServiceResult<NaiveDate> {
    let date = date.ok_or(ServiceError::MissingDate)?;
    if date > today {
        return Err(ServiceError::FutureDate { date });
    }
    Ok(date)
}

/// Whole days elapsed between `start` and `end`.
pub(super) fn elapsed_days(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Whole calendar months elapsed between `start` and `end`.
///
/// Uses the packed proleptic-month encoding (`month_index * 32 + day`), so
/// the count truncates at month boundaries: the 14th of one month to the
/// 13th of the next is zero whole months. End-of-month clamping follows the
/// same encoding, so Jan 31 to Feb 28 is also zero.
pub(super) fn elapsed_months(start: NaiveDate, end: NaiveDate) -> ServiceResult<i64> {
    let (start_packed, end_packed) = packed(start)
        .zip(packed(end))
        .ok_or_else(|| ServiceError::CalculationError {
            message: format!("date out of range computing months between {start} and {end}"),
        })?;
    Ok((end_packed - start_packed) / 32)
}

/// Whole calendar years elapsed between `start` and `end`.
pub(super) fn elapsed_years(start: NaiveDate, end: NaiveDate) -> ServiceResult<i64> {
    Ok(elapsed_months(start, end)? / 12)
}

fn packed(date: NaiveDate) -> Option<i64> {
    let months = i64::from(date.year())
        .checked_mul(12)?
        .checked_add(i64::from(date.month0()))?;
    months.checked_mul(32)?.checked_add(i64::from(date.day()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_date_accepts_past_date() {
        let today = date(2026, 8, 4);
        let result = validate_date(Some(date(1990, 1, 15)), today).unwrap();
        assert_eq!(result, date(1990, 1, 15));
    }

    #[test]
    fn test_validate_date_accepts_today() {
        let today = date(2026, 8, 4);
        assert_eq!(validate_date(Some(today), today).unwrap(), today);
    }

    #[test]
    fn test_validate_date_rejects_missing_date() {
        let today = date(2026, 8, 4);
        assert!(matches!(
            validate_date(None, today),
            Err(ServiceError::MissingDate)
        ));
    }

    #[test]
    fn test_validate_date_rejects_future_date() {
        let today = date(2026, 8, 4);
        let tomorrow = date(2026, 8, 5);
        match validate_date(Some(tomorrow), today) {
            Err(ServiceError::FutureDate { date }) => assert_eq!(date, tomorrow),
            other => panic!("Expected FutureDate, got {:?}", other),
        }
    }

    #[test]
    fn test_elapsed_days_counts_across_leap_day() {
        // 2024 is a leap year
        assert_eq!(elapsed_days(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(elapsed_days(date(2023, 2, 28), date(2023, 3, 1)), 1);
    }

    #[test]
    fn test_elapsed_days_same_day_is_zero() {
        assert_eq!(elapsed_days(date(2026, 8, 4), date(2026, 8, 4)), 0);
    }

    #[test]
    fn test_elapsed_months_truncates_before_boundary() {
        assert_eq!(
            elapsed_months(date(2025, 6, 15), date(2025, 7, 14)).unwrap(),
            0
        );
        assert_eq!(
            elapsed_months(date(2025, 6, 15), date(2025, 7, 15)).unwrap(),
            1
        );
    }

    #[test]
    fn test_elapsed_months_end_of_month_clamp() {
        // Jan 31 to Feb 28 does not complete a month under the packed encoding
        assert_eq!(
            elapsed_months(date(2025, 1, 31), date(2025, 2, 28)).unwrap(),
            0
        );
        assert_eq!(
            elapsed_months(date(2025, 1, 31), date(2025, 3, 1)).unwrap(),
            1
        );
    }

    #[test]
    fn test_elapsed_months_across_year_boundary() {
        assert_eq!(
            elapsed_months(date(2024, 11, 10), date(2025, 2, 10)).unwrap(),
            3
        );
    }

    #[test]
    fn test_elapsed_years_truncates_before_anniversary() {
        assert_eq!(
            elapsed_years(date(1990, 8, 5), date(2026, 8, 4)).unwrap(),
            35
        );
        assert_eq!(
            elapsed_years(date(1990, 8, 4), date(2026, 8, 4)).unwrap(),
            36
        );
    }

    #[test]
    fn test_elapsed_years_same_day_is_zero() {
        assert_eq!(elapsed_years(date(2026, 8, 4), date(2026, 8, 4)).unwrap(), 0);
    }
}
