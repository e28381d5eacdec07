//! Application state for the person service API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::PersonStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the person store.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<PersonStore>,
}

impl AppState {
    /// Creates a new application state with an empty person store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the person store.
    pub fn store(&self) -> &PersonStore {
        &self.store
    }
}
