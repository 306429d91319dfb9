//! Data hooks wrapping REST services with loading/error bookkeeping.
//!
//! SYSTEM CONTEXT
//! ==============
//! A hook is a `Copy` handle around a page-local state signal plus the session,
//! API config, and mutation queue read from context. Pages call its async
//! methods from `spawn_local`; the pure state transitions live in `state`.

pub mod admin;
pub mod images;
