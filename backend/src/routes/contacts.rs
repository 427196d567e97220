//! Contact API routes
//!
//! All routes require a bearer token; the `CurrentUser` extractor rejects
//! the request with 401 before any handler runs. Handlers only ever pass
//! the caller's own user id down to the service layer.

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::services::ContactService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use contact_api_shared::types::{ContactListQuery, ContactPayload, ContactResponse};

/// Create contact routes
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts/", post(create_contact).get(list_contacts))
        .route(
            "/contacts/:id",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
}

/// Create a contact owned by the caller
///
/// POST /contacts/
async fn create_contact(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<ContactPayload>,
) -> ApiResult<(StatusCode, Json<ContactResponse>)> {
    let contact = ContactService::create(state.db(), user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// List the caller's contacts with pagination and optional search
///
/// GET /contacts/?skip=0&limit=10&search=ada
async fn list_contacts(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ContactListQuery>,
) -> ApiResult<Json<Vec<ContactResponse>>> {
    let contacts = ContactService::list(state.db(), user.id, query.normalize()).await?;
    Ok(Json(contacts))
}

/// Fetch a single contact
///
/// GET /contacts/{id}
async fn get_contact(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<ContactResponse>> {
    let contact = ContactService::get(state.db(), id, user.id).await?;
    Ok(Json(contact))
}

/// Replace all fields of a contact
///
/// PUT /contacts/{id}
async fn update_contact(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<ContactPayload>,
) -> ApiResult<Json<ContactResponse>> {
    let contact = ContactService::update(state.db(), id, user.id, payload).await?;
    Ok(Json(contact))
}

/// Delete a contact and return its last state
///
/// DELETE /contacts/{id}
async fn delete_contact(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<ContactResponse>> {
    let contact = ContactService::delete(state.db(), id, user.id).await?;
    Ok(Json(contact))
}

#[cfg(test)]
mod tests {
    // Route tests live in routes/contacts_tests.rs and backend/tests/
}
