//! Recording transport and reactive context for exercising hooks without a
//! browser.

use std::sync::{Arc, Mutex, PoisonError};

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use leptos::prelude::*;

use super::api::{ApiRequest, Method, SharedTransport, Transport};
use super::error::ApiError;
use super::types::{Role, User};
use crate::config::ApiConfig;
use crate::state::auth::Session;
use crate::state::mutations::MutationQueue;

pub const TEST_TOKEN: &str = "t0ken";

type Responder = dyn Fn(Method, &str) -> Result<String, ApiError> + Send + Sync;

/// What a request looked like when it was issued.
#[derive(Clone, Debug, PartialEq)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub json: Option<serde_json::Value>,
    pub authorization: Option<String>,
}

/// Records every request and answers from `respond`.
#[derive(Clone)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<Recorded>>>,
    respond: Arc<Responder>,
}

impl RecordingTransport {
    pub fn new(respond: impl Fn(Method, &str) -> Result<String, ApiError> + Send + Sync + 'static) -> Self {
        Self { calls: Arc::default(), respond: Arc::new(respond) }
    }

    pub fn shared(&self) -> SharedTransport {
        SharedTransport::new(self.clone())
    }

    /// `"METHOD /path"` for each request, in issue order.
    pub fn calls(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| format!("{} {}", r.method.as_str(), r.path))
            .collect()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Transport for RecordingTransport {
    fn execute(
        &self,
        _url: String,
        authorization: Option<String>,
        request: ApiRequest,
    ) -> LocalBoxFuture<'static, Result<String, ApiError>> {
        let result = (self.respond)(request.method, &request.path);
        let recorded = Recorded {
            method: request.method,
            json: request.json().cloned(),
            path: request.path,
            authorization,
        };
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(recorded);
        futures::future::ready(result).boxed_local()
    }
}

pub fn admin_user() -> User {
    User {
        id: "1".to_owned(),
        username: "root".to_owned(),
        email: "root@example.com".to_owned(),
        role: Role::Admin,
        is_active: true,
    }
}

/// Run `f` under a fresh reactive owner holding a signed-in admin session, the
/// API config, a mutation queue, and `transport`.
pub fn with_app_context<T>(transport: &RecordingTransport, f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.with(|| {
        let mut session = Session::anonymous();
        session.login(admin_user(), TEST_TOKEN.to_owned());
        provide_context(RwSignal::new(session));
        provide_context(ApiConfig::new("http://api.test/api"));
        provide_context(MutationQueue::default());
        provide_context(transport.shared());
        f()
    })
}
