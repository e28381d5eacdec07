//! Derived-value calculations for the person service.
//!
//! This module contains the pure calculators that derive a person's age and
//! salary from their recorded dates. Both are stateless functions over a
//! date, a selector, and an explicit reference date, so concurrent callers
//! need no coordination and tests can pin "today" to a known value.

mod age;
mod dates;
mod salary;

pub use age::{AgeUnit, calculate_age};
pub use salary::{
    SalaryMode, calculate_salary, fixed_increase, hire_years, initial_salary, min_salary_divisor,
    percent_increase,
};
