//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `images`, `admin`) so pages and hooks
//! depend on small focused models. `mutations` orders writes per entity.

pub mod admin;
pub mod auth;
pub mod images;
pub mod mutations;
