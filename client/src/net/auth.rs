//! Auth service: credential exchange for an opaque session token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::{ApiClient, ApiRequest};
use super::error::ApiError;
use super::types::{AuthResponse, LoginRequest, RegisterRequest};

pub fn login_request(credentials: &LoginRequest) -> ApiRequest {
    ApiRequest::post_json("/auth/login", serde_json::to_value(credentials).unwrap_or_default())
}

pub fn register_request(account: &RegisterRequest) -> ApiRequest {
    ApiRequest::post_json("/auth/register", serde_json::to_value(account).unwrap_or_default())
}

/// `POST /auth/login`
///
/// # Errors
///
/// Propagates the underlying [`ApiError`].
pub async fn login(client: &ApiClient, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
    client.send_json(login_request(credentials)).await
}

/// `POST /auth/register`
///
/// # Errors
///
/// Propagates the underlying [`ApiError`].
pub async fn register(client: &ApiClient, account: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    client.send_json(register_request(account)).await
}
