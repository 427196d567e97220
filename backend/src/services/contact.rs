//! Contact service
//!
//! Validates contact payloads and maps repository rows and absences to
//! API responses. Absence and foreign ownership both surface as NotFound.

use crate::error::ApiError;
use crate::repositories::{ContactFields, ContactRecord, ContactRepository};
use contact_api_shared::types::{ContactPayload, ContactResponse, NormalizedContactListQuery};
use contact_api_shared::validation;
use sqlx::PgPool;

/// Contact service for owner-scoped contact operations
pub struct ContactService;

impl ContactService {
    /// Create a contact owned by the given user
    pub async fn create(
        pool: &PgPool,
        owner_id: i64,
        payload: ContactPayload,
    ) -> Result<ContactResponse, ApiError> {
        validate_payload(&payload)?;

        let record = ContactRepository::create(pool, owner_id, payload_to_fields(payload))
            .await
            .map_err(ApiError::Internal)?;

        Ok(to_response(record))
    }

    /// List the user's contacts with pagination and optional search
    pub async fn list(
        pool: &PgPool,
        owner_id: i64,
        query: NormalizedContactListQuery,
    ) -> Result<Vec<ContactResponse>, ApiError> {
        let records = ContactRepository::list(
            pool,
            owner_id,
            query.skip,
            query.limit,
            query.search.as_deref(),
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(to_response).collect())
    }

    /// Fetch a single contact
    pub async fn get(pool: &PgPool, id: i64, owner_id: i64) -> Result<ContactResponse, ApiError> {
        let record = ContactRepository::find(pool, id, owner_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Contact not found".to_string()))?;

        Ok(to_response(record))
    }

    /// Full replace of a contact's fields
    pub async fn update(
        pool: &PgPool,
        id: i64,
        owner_id: i64,
        payload: ContactPayload,
    ) -> Result<ContactResponse, ApiError> {
        validate_payload(&payload)?;

        let record = ContactRepository::update(pool, id, owner_id, payload_to_fields(payload))
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Contact not found".to_string()))?;

        Ok(to_response(record))
    }

    /// Delete a contact and return its last state
    pub async fn delete(pool: &PgPool, id: i64, owner_id: i64) -> Result<ContactResponse, ApiError> {
        let record = ContactRepository::delete(pool, id, owner_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Contact not found".to_string()))?;

        Ok(to_response(record))
    }
}

fn validate_payload(payload: &ContactPayload) -> Result<(), ApiError> {
    validation::validate_name(&payload.name).map_err(ApiError::Validation)?;
    validation::validate_name(&payload.surname).map_err(ApiError::Validation)?;
    validation::validate_email(&payload.email).map_err(ApiError::Validation)?;
    validation::validate_phone(&payload.phone).map_err(ApiError::Validation)?;
    Ok(())
}

fn payload_to_fields(payload: ContactPayload) -> ContactFields {
    ContactFields {
        name: payload.name,
        surname: payload.surname,
        email: payload.email,
        phone: payload.phone,
        birthday: payload.birthday,
        additional_info: payload.additional_info,
    }
}

fn to_response(record: ContactRecord) -> ContactResponse {
    ContactResponse {
        id: record.id,
        name: record.name,
        surname: record.surname,
        email: record.email,
        phone: record.phone,
        birthday: record.birthday,
        additional_info: record.additional_info,
        owner_id: record.owner_id,
    }
}
