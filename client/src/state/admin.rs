//! Admin dashboard state: user list, selected user, and pending edits.
//!
//! DESIGN
//! ======
//! Edits to the selected user accumulate in a `UserDraft` and are sent as a
//! single partial update on save. After any mutation the dashboard re-fetches
//! the user list rather than patching it locally.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::{Role, User, UserDetail, UserUpdate};

pub const FETCH_USERS_FAILED: &str = "Error fetching users";
pub const FETCH_USER_FAILED: &str = "Error fetching user details";
pub const UPDATE_USER_FAILED: &str = "Error updating user";
pub const DELETE_USER_FAILED: &str = "Error deleting user";

/// Editable copy of the selected user's fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            is_active: user.is_active,
        }
    }
}

impl UserDraft {
    /// Fields that differ from `original`. Text fields are trimmed.
    pub fn changes(&self, original: &User) -> UserUpdate {
        let username = self.username.trim();
        let email = self.email.trim();
        UserUpdate {
            username: (username != original.username).then(|| username.to_owned()),
            email: (email != original.email).then(|| email.to_owned()),
            role: (self.role != original.role).then_some(self.role),
            is_active: (self.is_active != original.is_active).then_some(self.is_active),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminState {
    pub users: Vec<User>,
    pub selected: Option<UserDetail>,
    pub draft: Option<UserDraft>,
    pub in_flight: usize,
    pub error: Option<String>,
}

impl AdminState {
    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|d| d.user.id.as_str())
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id() == Some(id)
    }

    pub fn begin(&mut self) {
        self.in_flight += 1;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.settle();
    }

    pub fn finish_fetch_users(&mut self, users: Vec<User>) {
        self.users = users;
        self.settle();
    }

    /// Select a freshly fetched user and reset the draft to its values.
    pub fn finish_select(&mut self, detail: UserDetail) {
        self.draft = Some(UserDraft::from(&detail.user));
        self.selected = Some(detail);
        self.settle();
    }

    /// Settle an update. The caller re-fetches afterwards.
    pub fn finish_update(&mut self) {
        self.settle();
    }

    /// Settle a delete, dropping the selection if it pointed at `id`.
    pub fn finish_delete(&mut self, id: &str) {
        if self.is_selected(id) {
            self.selected = None;
            self.draft = None;
        }
        self.settle();
    }

    /// Apply `edit` to the draft, if a user is selected.
    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut UserDraft)) {
        if let Some(draft) = self.draft.as_mut() {
            edit(draft);
        }
    }

    /// Throw away unsaved edits.
    pub fn discard_draft(&mut self) {
        self.draft = self.selected.as_ref().map(|d| UserDraft::from(&d.user));
    }

    /// Pending changes to the selected user, if any.
    pub fn pending_update(&self) -> Option<(String, UserUpdate)> {
        let selected = self.selected.as_ref()?;
        let update = self.draft.as_ref()?.changes(&selected.user);
        (!update.is_empty()).then(|| (selected.user.id.clone(), update))
    }

    fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}
