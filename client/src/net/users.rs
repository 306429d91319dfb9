//! User service: `/users` endpoints used by the admin dashboard.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::api::{ApiClient, ApiRequest};
use super::error::ApiError;
use super::types::{User, UserDetail, UserDetailEnvelope, UserEnvelope, UserUpdate, UsersEnvelope};

fn user_path(id: &str) -> String {
    format!("/users/{id}")
}

pub fn list_request() -> ApiRequest {
    ApiRequest::get("/users")
}

pub fn get_request(id: &str) -> ApiRequest {
    ApiRequest::get(user_path(id))
}

pub fn update_request(id: &str, update: &UserUpdate) -> ApiRequest {
    ApiRequest::put_json(user_path(id), serde_json::to_value(update).unwrap_or_default())
}

pub fn delete_request(id: &str) -> ApiRequest {
    ApiRequest::delete(user_path(id))
}

/// `GET /users`
///
/// # Errors
///
/// Propagates the underlying [`ApiError`].
pub async fn list_users(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    let body: UsersEnvelope = client.send_json(list_request()).await?;
    Ok(body.users)
}

/// `GET /users/:id`, including the user's images.
///
/// # Errors
///
/// Propagates the underlying [`ApiError`].
pub async fn get_user(client: &ApiClient, id: &str) -> Result<UserDetail, ApiError> {
    let body: UserDetailEnvelope = client.send_json(get_request(id)).await?;
    Ok(body.user)
}

/// `PUT /users/:id`
///
/// # Errors
///
/// Propagates the underlying [`ApiError`].
pub async fn update_user(client: &ApiClient, id: &str, update: &UserUpdate) -> Result<User, ApiError> {
    let body: UserEnvelope = client.send_json(update_request(id, update)).await?;
    Ok(body.user)
}

/// `DELETE /users/:id`
///
/// # Errors
///
/// Propagates the underlying [`ApiError`].
pub async fn delete_user(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.send_empty(delete_request(id)).await
}
