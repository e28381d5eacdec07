//! In-memory person store.
//!
//! This module provides the record storage the request handlers resolve
//! persons from. Records live in a map behind a read-write lock; identifiers
//! are assigned sequentially starting at 1.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};

use crate::error::{ServiceError, ServiceResult};
use crate::models::Person;

#[derive(Debug, Default)]
struct Records {
    next_id: u64,
    persons: BTreeMap<u64, Person>,
}

/// Thread-safe in-memory storage for person records.
///
/// All operations take a snapshot or mutate under the lock and return owned
/// records, so callers never hold the lock across a calculation.
#[derive(Debug, Default)]
pub struct PersonStore {
    inner: RwLock<Records>,
}

impl PersonStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new person and returns the stored record.
    ///
    /// Assigns the next sequential identifier and stamps both timestamps
    /// with the current time.
    pub fn insert(&self, name: String, birth_date: NaiveDate, hire_date: NaiveDate) -> Person {
        let now = Utc::now();
        let mut records = self.write();
        records.next_id += 1;
        let person = Person {
            id: records.next_id,
            name,
            birth_date,
            hire_date,
            create_date: now,
            update_date: now,
        };
        records.persons.insert(person.id, person.clone());
        person
    }

    /// Returns the person with the given identifier, if any.
    pub fn get(&self, id: u64) -> Option<Person> {
        self.read().persons.get(&id).cloned()
    }

    /// Returns all persons ordered by name ascending, ties by identifier.
    pub fn list_by_name(&self) -> Vec<Person> {
        let mut persons: Vec<Person> = self.read().persons.values().cloned().collect();
        persons.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        persons
    }

    /// Replaces every mutable field of an existing person.
    ///
    /// Preserves `create_date`, bumps `update_date`, and returns the updated
    /// record. Fails with [`ServiceError::PersonNotFound`] when no record has
    /// the given identifier.
    pub fn replace(
        &self,
        id: u64,
        name: String,
        birth_date: NaiveDate,
        hire_date: NaiveDate,
    ) -> ServiceResult<Person> {
        let mut records = self.write();
        let person = records
            .persons
            .get_mut(&id)
            .ok_or(ServiceError::PersonNotFound { id })?;
        person.name = name;
        person.birth_date = birth_date;
        person.hire_date = hire_date;
        person.update_date = Utc::now();
        Ok(person.clone())
    }

    /// Removes a person and returns the removed record.
    ///
    /// Fails with [`ServiceError::PersonNotFound`] when no record has the
    /// given identifier.
    pub fn remove(&self, id: u64) -> ServiceResult<Person> {
        self.write()
            .persons
            .remove(&id)
            .ok_or(ServiceError::PersonNotFound { id })
    }

    fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
