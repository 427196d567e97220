//! API request and response types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

// ============================================================================
// Auth Types
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Login form (OAuth2 password-grant shape: `username` carries the email)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Registered user response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
}

// ============================================================================
// Contact Types
// ============================================================================

/// Contact fields as supplied by the client.
///
/// Used for both creation and update; updates replace every field here,
/// they are never merged with the stored row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub birthday: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// Contact response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub birthday: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    pub owner_id: i64,
}

/// Query parameters for listing contacts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactListQuery {
    #[serde(default)]
    pub skip: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub search: Option<String>,
}

/// Default page size when the client does not specify a limit
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on the page size
pub const MAX_PAGE_SIZE: i64 = 100;

impl ContactListQuery {
    /// Clamp pagination parameters to sane bounds.
    ///
    /// `skip` is floored at 0; `limit` defaults to [`DEFAULT_PAGE_SIZE`]
    /// and is clamped to `1..=MAX_PAGE_SIZE`. Empty search strings are
    /// treated as absent.
    pub fn normalize(self) -> NormalizedContactListQuery {
        let skip = self.skip.unwrap_or(0).max(0);
        let limit = self
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let search = self
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        NormalizedContactListQuery { skip, limit, search }
    }
}

/// Pagination parameters after normalization
#[derive(Debug, Clone)]
pub struct NormalizedContactListQuery {
    pub skip: i64,
    pub limit: i64,
    pub search: Option<String>,
}
