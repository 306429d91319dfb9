//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `RwSignal<Session>` is provided through context by `App`; route guards,
//! the header, and the API hooks read it. Nothing holds a global copy.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{Role, User};

/// Authenticated user plus the opaque token the backend issued for them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user: User,
    pub token: String,
}

/// Current browser session.
///
/// `restoring` is true until the hydrated client has checked tab storage for
/// a previous login; guards wait instead of redirecting during that window.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    current: Option<SessionUser>,
    pub restoring: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self { current: None, restoring: true }
    }
}

impl Session {
    /// A settled session with nobody logged in.
    pub fn anonymous() -> Self {
        Self { current: None, restoring: false }
    }

    /// Finish restoring with whatever was found in storage.
    pub fn restored(current: Option<SessionUser>) -> Self {
        Self { current, restoring: false }
    }

    pub fn login(&mut self, user: User, token: String) {
        self.current = Some(SessionUser { user, token });
        self.restoring = false;
    }

    pub fn logout(&mut self) {
        self.current = None;
        self.restoring = false;
    }

    pub fn user(&self) -> Option<&User> {
        self.current.as_ref().map(|c| &c.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.token.as_str())
    }

    pub fn current(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    /// Replace the held profile after an edit, keeping the token. Ignored when
    /// `user` is someone else.
    pub fn refresh_user(&mut self, user: &User) {
        if let Some(current) = self.current.as_mut() {
            if current.user.id == user.id {
                current.user = user.clone();
            }
        }
    }
}
