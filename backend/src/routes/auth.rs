//! Registration and login routes
//!
//! `POST /users/` takes a JSON body; `POST /token` takes the OAuth2
//! password-grant form shape (`username` carries the email).

use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Form, Json, Router,
};
use contact_api_shared::types::{RegisterRequest, TokenRequest, TokenResponse, UserResponse};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/token", post(login))
        .route("/users/", post(register))
}

/// Register a new user
///
/// POST /users/
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = UserService::register(state.db(), &req.email, &req.password).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Exchange credentials for a bearer token
///
/// POST /token
async fn login(
    State(state): State<AppState>,
    Form(form): Form<TokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let tokens =
        UserService::login(state.db(), state.jwt(), &form.username, &form.password).await?;
    Ok(Json(tokens))
}

#[cfg(test)]
mod tests {
    // Route tests live in routes/auth_tests.rs and backend/tests/
}
