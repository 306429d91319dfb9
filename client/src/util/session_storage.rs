//! Browser `sessionStorage` helpers for the login session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives for the life of the tab: it survives reloads but not a
//! closed tab. These helpers centralize the hydrate-only web-sys glue so the
//! rest of the app only sees `SessionUser` values.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort; storage failures degrade to an in-memory
//! session, and SSR paths no-op.

use crate::state::auth::SessionUser;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "image_factory_session";

/// Load the persisted session, if any.
pub fn load() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(current) => Some(current),
            Err(e) => {
                leptos::logging::warn!("discarding unreadable stored session: {e}");
                let _ = storage.remove_item(STORAGE_KEY);
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session, or clear it when `current` is `None`.
pub fn store(current: Option<&SessionUser>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) else {
            return;
        };
        match current {
            Some(current) => {
                let Ok(raw) = serde_json::to_string(current) else {
                    return;
                };
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
            None => {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = current;
    }
}
