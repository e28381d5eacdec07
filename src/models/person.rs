//! Person model.
//!
//! This module defines the Person struct representing a stored person
//! record, including the dates the derived-value calculators consume.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A stored person record.
///
/// The calculators never receive a full record; callers extract
/// `birth_date` or `hire_date` and pass the plain date in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier, assigned by the store.
    pub id: u64,
    /// The person's display name.
    pub name: String,
    /// The person's date of birth.
    pub birth_date: NaiveDate,
    /// The date the person was hired.
    pub hire_date: NaiveDate,
    /// When the record was created.
    pub create_date: DateTime<Utc>,
    /// When the record was last modified.
    pub update_date: DateTime<Utc>,
}
