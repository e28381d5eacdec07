//! HTTP API module for the person service.
//!
//! This module provides the REST endpoints for managing person records and
//! reading the values derived from them.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreatePersonRequest, PatchPersonRequest, ReplacePersonRequest};
pub use response::ApiError;
pub use state::AppState;
