//! Admin dashboard data hook: user list, selection, batched save, delete.
//!
//! Unlike the gallery hook this one never patches the list locally: every
//! successful mutation is followed by a full `GET /users`, and an update to the
//! selected user also re-fetches its details.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api::{ApiClient, SharedTransport};
use crate::net::error::ApiError;
use crate::net::users;
use crate::state::admin::{AdminState, DELETE_USER_FAILED, FETCH_USER_FAILED, FETCH_USERS_FAILED, UPDATE_USER_FAILED};
use crate::state::auth::Session;
use crate::state::mutations::{MutationQueue, user_key};

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

#[derive(Clone, Copy)]
pub struct AdminHook {
    pub state: RwSignal<AdminState>,
    session: RwSignal<Session>,
    config: StoredValue<ApiConfig>,
    queue: StoredValue<MutationQueue>,
    transport: StoredValue<SharedTransport>,
}

pub fn use_admin() -> AdminHook {
    AdminHook {
        state: RwSignal::new(AdminState::default()),
        session: expect_context::<RwSignal<Session>>(),
        config: StoredValue::new(use_context::<ApiConfig>().unwrap_or_default()),
        queue: StoredValue::new(use_context::<MutationQueue>().unwrap_or_default()),
        transport: StoredValue::new(use_context::<SharedTransport>().unwrap_or_default()),
    }
}

impl AdminHook {
    fn client(self) -> ApiClient {
        let token = self.session.with_untracked(|s| s.token().map(str::to_owned));
        let transport = self.transport.get_value();
        self.config.with_value(|config| ApiClient::with_transport(config, token, transport))
    }

    fn begin(self) {
        let _ = self.state.try_update(AdminState::begin);
    }

    fn fail(self, err: &ApiError, fallback: &str) {
        leptos::logging::warn!("{fallback}: {err}");
        let message = err.user_message(fallback);
        let _ = self.state.try_update(|s| s.fail(message));
    }

    pub async fn fetch_users(self) {
        let client = self.client();
        self.begin();
        match users::list_users(&client).await {
            Ok(list) => {
                let _ = self.state.try_update(|s| s.finish_fetch_users(list));
            }
            Err(err) => self.fail(&err, FETCH_USERS_FAILED),
        }
    }

    /// Fetch full details (including images) and make that user selected.
    pub async fn select_user(self, id: String) {
        let client = self.client();
        self.begin();
        match users::get_user(&client, &id).await {
            Ok(detail) => {
                let _ = self.state.try_update(|s| s.finish_select(detail));
            }
            Err(err) => self.fail(&err, FETCH_USER_FAILED),
        }
    }

    /// Send the selected user's pending draft as one update. No request is
    /// made when nothing changed.
    pub async fn save_selected(self) {
        let Some((id, update)) = self.state.with_untracked(AdminState::pending_update) else {
            return;
        };
        let client = self.client();
        let queue = self.queue.get_value();
        self.begin();
        match queue.run(&user_key(&id), users::update_user(&client, &id, &update)).await {
            Ok(user) => {
                let _ = self.state.try_update(AdminState::finish_update);
                let _ = self.session.try_update(|s| s.refresh_user(&user));
                self.fetch_users().await;
                let still_selected = self.state.with_untracked(|s| s.is_selected(&id));
                if still_selected {
                    self.select_user(id).await;
                }
            }
            Err(err) => self.fail(&err, UPDATE_USER_FAILED),
        }
    }

    /// Delete a user (and, on the backend, their images), then re-fetch.
    pub async fn delete_user(self, id: String) {
        let client = self.client();
        let queue = self.queue.get_value();
        self.begin();
        match queue.run(&user_key(&id), users::delete_user(&client, &id)).await {
            Ok(()) => {
                let _ = self.state.try_update(|s| s.finish_delete(&id));
                self.fetch_users().await;
            }
            Err(err) => self.fail(&err, DELETE_USER_FAILED),
        }
    }
}
