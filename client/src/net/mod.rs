//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP transport, `auth`/`images`/`users` map domain operations
//! to endpoints, `error` is the shared failure type, and `types` defines the
//! wire schema.

pub mod api;
pub mod auth;
pub mod error;
pub mod images;
pub mod types;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;
