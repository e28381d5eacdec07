//! HTTP request handlers for the person service API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{AgeUnit, SalaryMode, calculate_age, calculate_salary};
use crate::error::ServiceError;

use super::request::{
    CreatePersonRequest, OutputQuery, PatchPersonRequest, ReplacePersonRequest,
    validate_person_fields,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/person", get(list_persons).post(create_person))
        .route(
            "/person/:id",
            get(get_person)
                .put(replace_person)
                .patch(patch_person)
                .delete(delete_person),
        )
        .route("/person/:id/age", get(get_person_age))
        .route("/person/:id/salary", get(get_person_salary))
        .with_state(state)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}

fn service_error_response(correlation_id: Uuid, error: ServiceError) -> Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    ApiErrorResponse::from(error).into_response()
}

/// Handler for GET /person.
///
/// Returns all persons ordered by name. An empty store is reported as not
/// found, matching the record-per-resource semantics of the other routes.
async fn list_persons(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let persons = state.store().list_by_name();
    if persons.is_empty() {
        warn!(correlation_id = %correlation_id, "No persons stored");
        return ApiErrorResponse {
            status: StatusCode::NOT_FOUND,
            error: ApiError::new("PERSON_NOT_FOUND", "No persons stored"),
        }
        .into_response();
    }
    info!(correlation_id = %correlation_id, count = persons.len(), "Listing persons");
    (StatusCode::OK, Json(persons)).into_response()
}

/// Handler for POST /person.
async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<CreatePersonRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let today = Utc::now().date_naive();
    if let Err(err) = request.validate(today) {
        return service_error_response(correlation_id, err);
    }

    let person = state
        .store()
        .insert(request.name, request.birth_date, request.hire_date);
    info!(correlation_id = %correlation_id, person_id = person.id, "Created person");
    (StatusCode::CREATED, Json(person)).into_response()
}

/// Handler for GET /person/{id}.
async fn get_person(State(state): State<AppState>, Path(id): Path<u64>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    match state.store().get(id) {
        Some(person) => {
            info!(correlation_id = %correlation_id, person_id = id, "Found person");
            (StatusCode::OK, Json(person)).into_response()
        }
        None => service_error_response(correlation_id, ServiceError::PersonNotFound { id }),
    }
}

/// Handler for PUT /person/{id}.
async fn replace_person(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<ReplacePersonRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if state.store().get(id).is_none() {
        return service_error_response(correlation_id, ServiceError::PersonNotFound { id });
    }

    let today = Utc::now().date_naive();
    if let Err(err) = request.validate(today) {
        return service_error_response(correlation_id, err);
    }

    match state
        .store()
        .replace(id, request.name, request.birth_date, request.hire_date)
    {
        Ok(person) => {
            info!(correlation_id = %correlation_id, person_id = id, "Replaced person");
            (StatusCode::OK, Json(person)).into_response()
        }
        Err(err) => service_error_response(correlation_id, err),
    }
}

/// Handler for PATCH /person/{id}.
///
/// Omitted or blank fields keep their stored values; the merged record is
/// validated as a whole before it is stored.
async fn patch_person(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<PatchPersonRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let patch = match payload {
        Ok(Json(patch)) => patch,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let Some(person) = state.store().get(id) else {
        return service_error_response(correlation_id, ServiceError::PersonNotFound { id });
    };

    let (name, birth_date, hire_date) = patch.merge_into(&person);
    let today = Utc::now().date_naive();
    if let Err(err) = validate_person_fields(&name, birth_date, hire_date, today) {
        return service_error_response(correlation_id, err);
    }

    match state.store().replace(id, name, birth_date, hire_date) {
        Ok(person) => {
            info!(correlation_id = %correlation_id, person_id = id, "Patched person");
            (StatusCode::OK, Json(person)).into_response()
        }
        Err(err) => service_error_response(correlation_id, err),
    }
}

/// Handler for DELETE /person/{id}.
async fn delete_person(State(state): State<AppState>, Path(id): Path<u64>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    match state.store().remove(id) {
        Ok(_) => {
            info!(correlation_id = %correlation_id, person_id = id, "Deleted person");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => service_error_response(correlation_id, err),
    }
}

/// Handler for GET /person/{id}/age.
///
/// Resolves the person, snapshots today once, and hands the birth date and
/// unit selector to the age calculator. The response body is the bare
/// integer age.
async fn get_person_age(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<OutputQuery>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        person_id = id,
        output = ?query.output,
        "Processing age request"
    );

    let Some(person) = state.store().get(id) else {
        return service_error_response(correlation_id, ServiceError::PersonNotFound { id });
    };

    let unit = query.output.as_deref().and_then(AgeUnit::parse);
    let today = Utc::now().date_naive();
    match calculate_age(Some(person.birth_date), unit, today) {
        Ok(age) => {
            info!(correlation_id = %correlation_id, person_id = id, age, "Calculated age");
            (StatusCode::OK, Json(age)).into_response()
        }
        Err(err) => service_error_response(correlation_id, err),
    }
}

/// Handler for GET /person/{id}/salary.
///
/// Same shape as the age endpoint; the response body is the bare two-digit
/// decimal amount.
async fn get_person_salary(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<OutputQuery>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        person_id = id,
        output = ?query.output,
        "Processing salary request"
    );

    let Some(person) = state.store().get(id) else {
        return service_error_response(correlation_id, ServiceError::PersonNotFound { id });
    };

    let mode = query.output.as_deref().and_then(SalaryMode::parse);
    let today = Utc::now().date_naive();
    match calculate_salary(Some(person.hire_date), mode, today) {
        Ok(salary) => {
            info!(
                correlation_id = %correlation_id,
                person_id = id,
                salary = %salary,
                "Calculated salary"
            );
            (StatusCode::OK, Json(salary)).into_response()
        }
        Err(err) => service_error_response(correlation_id, err),
    }
}
