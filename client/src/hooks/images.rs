//! Gallery data hook: image list plus fetch/upload/update/delete.
//!
//! Every operation follows the same bookkeeping: `begin` (loading on, error
//! cleared), call the service, then either reconcile the list or record a
//! message. Mutations go through the shared `MutationQueue` keyed by image id.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api::{ApiClient, SharedTransport, UploadForm};
use crate::net::error::ApiError;
use crate::net::images;
use crate::net::types::{Image, ImageUpdate};
use crate::state::auth::Session;
use crate::state::images::{DELETE_FAILED, FETCH_FAILED, ImagesState, UPDATE_FAILED, UPLOAD_FAILED};
use crate::state::mutations::{MutationQueue, image_key};

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

#[derive(Clone, Copy)]
pub struct ImagesHook {
    pub state: RwSignal<ImagesState>,
    session: RwSignal<Session>,
    config: StoredValue<ApiConfig>,
    queue: StoredValue<MutationQueue>,
    transport: StoredValue<SharedTransport>,
}

/// Build an images hook bound to the current session and API config.
pub fn use_images() -> ImagesHook {
    ImagesHook {
        state: RwSignal::new(ImagesState::default()),
        session: expect_context::<RwSignal<Session>>(),
        config: StoredValue::new(use_context::<ApiConfig>().unwrap_or_default()),
        queue: StoredValue::new(use_context::<MutationQueue>().unwrap_or_default()),
        transport: StoredValue::new(use_context::<SharedTransport>().unwrap_or_default()),
    }
}

impl ImagesHook {
    fn client(self) -> ApiClient {
        let token = self.session.with_untracked(|s| s.token().map(str::to_owned));
        let transport = self.transport.get_value();
        self.config.with_value(|config| ApiClient::with_transport(config, token, transport))
    }

    fn begin(self) {
        let _ = self.state.try_update(ImagesState::begin);
    }

    fn fail(self, err: &ApiError, fallback: &str) {
        leptos::logging::warn!("{fallback}: {err}");
        let message = err.user_message(fallback);
        let _ = self.state.try_update(|s| s.fail(message));
    }

    /// `GET /images` and replace the list.
    pub async fn fetch_images(self) {
        let client = self.client();
        self.begin();
        match images::list_images(&client).await {
            Ok(items) => {
                let _ = self.state.try_update(|s| s.finish_fetch(items));
            }
            Err(err) => self.fail(&err, FETCH_FAILED),
        }
    }

    /// Upload a new image; on success it becomes the first list entry.
    ///
    /// # Errors
    ///
    /// Returns the service error after recording it in state.
    pub async fn upload_image(self, form: UploadForm) -> Result<Image, ApiError> {
        let client = self.client();
        self.begin();
        match images::upload_image(&client, form).await {
            Ok(image) => {
                let _ = self.state.try_update(|s| s.finish_upload(image.clone()));
                Ok(image)
            }
            Err(err) => {
                self.fail(&err, UPLOAD_FAILED);
                Err(err)
            }
        }
    }

    /// Delete an image; on success its id leaves the list.
    ///
    /// # Errors
    ///
    /// Returns the service error after recording it in state.
    pub async fn delete_image(self, id: String) -> Result<(), ApiError> {
        let client = self.client();
        let queue = self.queue.get_value();
        self.begin();
        let result = queue.run(&image_key(&id), images::delete_image(&client, &id)).await;
        match &result {
            Ok(()) => {
                let _ = self.state.try_update(|s| s.finish_delete(&id));
            }
            Err(err) => self.fail(err, DELETE_FAILED),
        }
        result
    }

    /// Apply a partial edit; on success the entry is merged by id.
    ///
    /// # Errors
    ///
    /// Returns the service error after recording it in state.
    pub async fn update_image(self, id: String, update: ImageUpdate) -> Result<Image, ApiError> {
        let client = self.client();
        let queue = self.queue.get_value();
        self.begin();
        let result = queue.run(&image_key(&id), images::update_image(&client, &id, &update)).await;
        match &result {
            Ok(image) => {
                let image = image.clone();
                let _ = self.state.try_update(|s| s.finish_update(image));
            }
            Err(err) => self.fail(err, UPDATE_FAILED),
        }
        result
    }
}
