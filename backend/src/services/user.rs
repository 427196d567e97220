//! User service for registration and login
//!
//! Password hashing and verification run on the blocking thread pool;
//! the JWT service is passed in with its keys already computed.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use contact_api_shared::types::{TokenResponse, UserResponse};
use contact_api_shared::validation;
use sqlx::PgPool;
use validator::ValidateEmail;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    pub async fn register(
        pool: &PgPool,
        email: &str,
        password: &str,
    ) -> Result<UserResponse, ApiError> {
        // Validate email format
        if !email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }

        // Validate password strength
        validation::validate_password(password).map_err(ApiError::Validation)?;

        // Check if email already exists
        if UserRepository::email_exists(pool, email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        // Hash password on blocking thread pool (CPU-intensive)
        let hashed_password = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, email, &hashed_password)
            .await
            .map_err(ApiError::Internal)?;

        Ok(UserResponse {
            id: user.id,
            email: user.email,
        })
    }

    /// Authenticate with email and password and issue a bearer token.
    ///
    /// An unknown email and a wrong password produce the same error; the
    /// caller cannot probe which emails are registered.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<TokenResponse, ApiError> {
        let user = UserRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("Incorrect email or password".to_string()))?;

        // Verify password on blocking thread pool (CPU-intensive)
        let valid = PasswordService::verify_async(password.to_string(), user.hashed_password)
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Unauthorized(
                "Incorrect email or password".to_string(),
            ));
        }

        let access_token = jwt_service
            .generate_token(&user.email)
            .map_err(ApiError::Internal)?;

        Ok(TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
            expires_in: jwt_service.access_token_expiry_secs(),
        })
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
