//! # Pet Routes — Operations About Pets
//!
//! ## Endpoints
//!
//! - `GET /api/pet/{petId}` — fetch a pet by identifier
//! - `POST /api/pet` — add a pet (insert or wholesale replace)
//! - `PUT /api/pet` — update a pet (same semantics as POST in this sample)
//! - `GET /api/pet/findByStatus?status=...` — filter by status value(s)
//! - `GET /api/pet/findByTags?tags=...` — filter by tag value(s)
//!
//! Every handler carries a `#[utoipa::path]` block — route, parameter, and
//! response-code metadata for the generated OpenAPI document.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::IntoParams;

use petstore_core::{Pet, PetId, PetStatus, Tag};

use crate::error::{ApiError, ErrorBody};
use crate::extractors::{extract_validated_json, Validate};
use crate::respond::{self, ResponseFormat};
use crate::state::AppState;

impl Validate for Pet {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if self.tags.iter().any(|t| t.as_str().trim().is_empty()) {
            return Err("tags must not contain empty values".to_string());
        }
        Ok(())
    }
}

// -- Query parameters ---------------------------------------------------------

/// Query parameters for `findByStatus`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindByStatusParams {
    /// Status values that need to be considered for filter (comma separated:
    /// `available`, `pending`, `sold`).
    pub status: String,
}

/// Query parameters for `findByTags`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindByTagsParams {
    /// Tags to filter by (comma separated).
    pub tags: String,
}

// -- Router -------------------------------------------------------------------

/// Build the pet router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pet", post(add_pet).put(update_pet))
        .route("/api/pet/findByStatus", get(find_pets_by_status))
        .route("/api/pet/findByTags", get(find_pets_by_tags))
        .route("/api/pet/:pet_id", get(get_pet_by_id))
}

// -- Handlers -----------------------------------------------------------------

/// GET /api/pet/{petId} — Find pet by ID.
#[utoipa::path(
    get,
    path = "/api/pet/{petId}",
    params(("petId" = i64, Path, description = "ID of pet that needs to be fetched")),
    responses(
        (status = 200, description = "Pet found", body = Pet),
        (status = 400, description = "Invalid ID supplied", body = ErrorBody),
        (status = 404, description = "Pet not found", body = ErrorBody),
    ),
    security(("api_key" = []), ("petstore_auth" = ["write:pets", "read:pets"])),
    tag = "pet"
)]
pub async fn get_pet_by_id(
    State(state): State<AppState>,
    format: ResponseFormat,
    Path(pet_id): Path<i64>,
) -> Result<Response, ApiError> {
    let pet = state
        .pets
        .get(PetId::new(pet_id))
        .ok_or_else(|| ApiError::NotFound("Pet not found".to_string()))?;
    Ok(respond::pet(format, pet))
}

/// POST /api/pet — Add a new pet to the store.
#[utoipa::path(
    post,
    path = "/api/pet",
    request_body = Pet,
    responses(
        (status = 200, description = "SUCCESS"),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 422, description = "Invalid input", body = ErrorBody),
    ),
    security(("petstore_auth" = ["write:pets", "read:pets"])),
    tag = "pet"
)]
pub async fn add_pet(
    State(state): State<AppState>,
    body: Result<Json<Pet>, JsonRejection>,
) -> Result<Response, ApiError> {
    let pet = extract_validated_json(body)?;
    state.pets.add(pet);
    Ok(respond::success())
}

/// PUT /api/pet — Update an existing pet.
///
/// Same semantics as POST in this sample: the record is replaced wholesale,
/// last write wins.
#[utoipa::path(
    put,
    path = "/api/pet",
    request_body = Pet,
    responses(
        (status = 200, description = "SUCCESS"),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 422, description = "Invalid input", body = ErrorBody),
    ),
    security(("petstore_auth" = ["write:pets", "read:pets"])),
    tag = "pet"
)]
pub async fn update_pet(
    State(state): State<AppState>,
    body: Result<Json<Pet>, JsonRejection>,
) -> Result<Response, ApiError> {
    let pet = extract_validated_json(body)?;
    state.pets.add(pet);
    Ok(respond::success())
}

/// GET /api/pet/findByStatus — Finds pets by status.
///
/// Multiple status values can be provided as a comma-separated string.
#[utoipa::path(
    get,
    path = "/api/pet/findByStatus",
    params(FindByStatusParams),
    responses(
        (status = 200, description = "Matching pets", body = Vec<Pet>),
        (status = 400, description = "Invalid status value", body = ErrorBody),
    ),
    security(("petstore_auth" = ["write:pets", "read:pets"])),
    tag = "pet"
)]
pub async fn find_pets_by_status(
    State(state): State<AppState>,
    format: ResponseFormat,
    Query(params): Query<FindByStatusParams>,
) -> Result<Response, ApiError> {
    let statuses = PetStatus::parse_list(&params.status)
        .map_err(|_| ApiError::BadRequest("Invalid status value".to_string()))?;
    Ok(respond::pets(format, state.pets.find_by_status(&statuses)))
}

/// GET /api/pet/findByTags — Finds pets by tags.
///
/// Multiple tags can be provided as a comma-separated string. Deprecated in
/// the upstream API contract — kept for compatibility.
#[utoipa::path(
    get,
    path = "/api/pet/findByTags",
    params(FindByTagsParams),
    responses(
        (status = 200, description = "Matching pets", body = Vec<Pet>),
        (status = 400, description = "Invalid tag value", body = ErrorBody),
    ),
    security(("petstore_auth" = ["write:pets", "read:pets"])),
    tag = "pet"
)]
pub async fn find_pets_by_tags(
    State(state): State<AppState>,
    format: ResponseFormat,
    Query(params): Query<FindByTagsParams>,
) -> Result<Response, ApiError> {
    let tags = Tag::parse_list(&params.tags)
        .map_err(|_| ApiError::BadRequest("Invalid tag value".to_string()))?;
    Ok(respond::pets(format, state.pets.find_by_tags(&tags)))
}
