//! Route guarding for authenticated and admin-only pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard_outcome` is the pure decision; `Protected` applies it to a route,
//! rendering children or navigating away. Every guarded route goes through
//! the same component so redirect behavior stays identical.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::Session;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const GALLERY_PATH: &str = "/gallery";
pub const ADMIN_PATH: &str = "/admin";

/// What a guarded route should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The session is still being restored; show a placeholder.
    Pending,
    Render,
    RedirectToLogin,
    RedirectToGallery,
}

impl GuardOutcome {
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            GuardOutcome::RedirectToLogin => Some(LOGIN_PATH),
            GuardOutcome::RedirectToGallery => Some(GALLERY_PATH),
            GuardOutcome::Pending | GuardOutcome::Render => None,
        }
    }
}

pub fn guard_outcome(session: &Session, require_admin: bool) -> GuardOutcome {
    if session.restoring {
        return GuardOutcome::Pending;
    }
    if !session.is_authenticated() {
        return GuardOutcome::RedirectToLogin;
    }
    if require_admin && !session.is_admin() {
        return GuardOutcome::RedirectToGallery;
    }
    GuardOutcome::Render
}

/// Render `children` only when the session passes the guard.
#[component]
pub fn Protected(#[prop(optional)] require_admin: bool, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let outcome = Memo::new(move |_| session.with(|s| guard_outcome(s, require_admin)));

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = outcome.get().redirect_path() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || outcome.get() == GuardOutcome::Render
            fallback=move || {
                view! {
                    <div class="page page--placeholder">
                        <p>
                            {move || {
                                if outcome.get() == GuardOutcome::Pending { "Loading..." } else { "Redirecting..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
