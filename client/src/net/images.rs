//! Image service: `/images` endpoints.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use super::api::{ApiClient, ApiRequest, UploadForm};
use super::error::ApiError;
use super::types::{Image, ImageEnvelope, ImageUpdate, ImagesEnvelope};

fn image_path(id: &str) -> String {
    format!("/images/{id}")
}

pub fn list_request() -> ApiRequest {
    ApiRequest::get("/images")
}

pub fn get_request(id: &str) -> ApiRequest {
    ApiRequest::get(image_path(id))
}

pub fn upload_request(form: UploadForm) -> ApiRequest {
    ApiRequest::post_multipart("/images/upload", form)
}

pub fn update_request(id: &str, update: &ImageUpdate) -> ApiRequest {
    ApiRequest::put_json(image_path(id), serde_json::to_value(update).unwrap_or_default())
}

pub fn delete_request(id: &str) -> ApiRequest {
    ApiRequest::delete(image_path(id))
}

/// `GET /images`
///
/// # Errors
///
/// Propagates the underlying [`ApiError`].
pub async fn list_images(client: &ApiClient) -> Result<Vec<Image>, ApiError> {
    let body: ImagesEnvelope = client.send_json(list_request()).await?;
    Ok(body.images)
}

/// `GET /images/:id`
///
/// # Errors
///
/// Propagates the underlying [`ApiError`].
pub async fn get_image(client: &ApiClient, id: &str) -> Result<Image, ApiError> {
    let body: ImageEnvelope = client.send_json(get_request(id)).await?;
    Ok(body.image)
}

/// `POST /images/upload` (multipart)
///
/// # Errors
///
/// Propagates the underlying [`ApiError`].
pub async fn upload_image(client: &ApiClient, form: UploadForm) -> Result<Image, ApiError> {
    let body: ImageEnvelope = client.send_json(upload_request(form)).await?;
    Ok(body.image)
}

/// `PUT /images/:id`
///
/// # Errors
///
/// Propagates the underlying [`ApiError`].
pub async fn update_image(client: &ApiClient, id: &str, update: &ImageUpdate) -> Result<Image, ApiError> {
    let body: ImageEnvelope = client.send_json(update_request(id, update)).await?;
    Ok(body.image)
}

/// `DELETE /images/:id`
///
/// # Errors
///
/// Propagates the underlying [`ApiError`].
pub async fn delete_image(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.send_empty(delete_request(id)).await
}
