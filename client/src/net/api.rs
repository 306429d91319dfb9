//! REST client for the image/user backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! Execution goes through the `Transport` trait so hooks can run against a
//! recording transport in tests.
//!
//! DESIGN
//! ======
//! Services describe each call as a plain `ApiRequest` value (method, path,
//! body) and hand it to `ApiClient`, so endpoint mapping is testable without a
//! browser and the transport stays in one place.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::ApiConfig;

/// HTTP verbs used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A file chosen in an `<input type="file">`.
///
/// Outside the browser only the name is tracked, which is all the form logic
/// needs.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    name: String,
    #[cfg(feature = "hydrate")]
    file: Option<web_sys::File>,
}

impl SelectedFile {
    /// A placeholder with no contents. Uploading it fails with
    /// [`ApiError::MissingFile`].
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            #[cfg(feature = "hydrate")]
            file: None,
        }
    }

    #[cfg(feature = "hydrate")]
    pub fn from_file(file: web_sys::File) -> Self {
        Self { name: file.name(), file: Some(file) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Multipart payload for `POST /images/upload`.
#[derive(Clone, Debug)]
pub struct UploadForm {
    pub file: SelectedFile,
    pub description: String,
    pub is_public: bool,
}

impl UploadForm {
    /// Text parts sent alongside the `image` file part.
    pub fn text_fields(&self) -> [(&'static str, String); 2] {
        [
            ("description", self.description.clone()),
            ("isPublic", self.is_public.to_string()),
        ]
    }

    #[cfg(feature = "hydrate")]
    fn into_form_data(self) -> Result<web_sys::FormData, ApiError> {
        let file = self.file.file.as_ref().ok_or(ApiError::MissingFile)?;
        let form = web_sys::FormData::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        form.append_with_blob_and_filename("image", file, &self.file.name)
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        for (key, value) in self.text_fields() {
            form.append_with_str(key, &value)
                .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        }
        Ok(form)
    }
}

/// Request payload.
#[derive(Clone, Debug)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(UploadForm),
}

/// A fully described API call, relative to the configured base URL.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: RequestBody::Empty }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: RequestBody::Empty }
    }

    pub fn post_json(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self { method: Method::Post, path: path.into(), body: RequestBody::Json(body) }
    }

    pub fn put_json(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self { method: Method::Put, path: path.into(), body: RequestBody::Json(body) }
    }

    pub fn post_multipart(path: impl Into<String>, form: UploadForm) -> Self {
        Self { method: Method::Post, path: path.into(), body: RequestBody::Multipart(form) }
    }

    /// JSON payload, if this request carries one.
    pub fn json(&self) -> Option<&serde_json::Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// Executes a described request and yields the raw response body.
///
/// The browser build uses [`HttpTransport`]; tests provide a recording
/// implementation through context.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        url: String,
        authorization: Option<String>,
        request: ApiRequest,
    ) -> LocalBoxFuture<'static, Result<String, ApiError>>;
}

/// `gloo-net` fetch transport. Outside the browser every call is
/// [`ApiError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

/// Map a finished response to its body. An unreadable error body still yields
/// the status; an unreadable success body is a transport failure.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn response_body<E: std::fmt::Display>(status: u16, ok: bool, text: Result<String, E>) -> Result<String, ApiError> {
    match (ok, text) {
        (true, Ok(body)) => Ok(body),
        (true, Err(e)) => Err(ApiError::Transport(e.to_string())),
        (false, body) => Err(ApiError::from_status(status, &body.unwrap_or_default())),
    }
}

impl Transport for HttpTransport {
    fn execute(
        &self,
        url: String,
        authorization: Option<String>,
        request: ApiRequest,
    ) -> LocalBoxFuture<'static, Result<String, ApiError>> {
        #[cfg(feature = "hydrate")]
        {
            async move {
                use gloo_net::http::Request;

                let mut builder = match request.method {
                    Method::Get => Request::get(&url),
                    Method::Post => Request::post(&url),
                    Method::Put => Request::put(&url),
                    Method::Delete => Request::delete(&url),
                };
                if let Some(value) = authorization {
                    builder = builder.header("Authorization", &value);
                }
                let req = match request.body {
                    RequestBody::Empty => builder.build(),
                    RequestBody::Json(value) => builder.json(&value),
                    RequestBody::Multipart(form) => builder.body(form.into_form_data()?),
                }
                .map_err(|e| ApiError::Transport(e.to_string()))?;

                let resp = req.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
                let status = resp.status();
                let text = resp.text().await;
                if !resp.ok() {
                    leptos::logging::warn!("{} {} -> {status}", request.method.as_str(), request.path);
                }
                response_body(status, resp.ok(), text)
            }
            .boxed_local()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, authorization, request);
            futures::future::ready(Err(ApiError::Unavailable)).boxed_local()
        }
    }
}

/// Shared handle to the transport in use, provided through context.
#[derive(Clone)]
pub struct SharedTransport(Arc<dyn Transport>);

impl SharedTransport {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self(Arc::new(transport))
    }
}

impl Default for SharedTransport {
    fn default() -> Self {
        Self::new(HttpTransport)
    }
}

impl std::fmt::Debug for SharedTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedTransport")
    }
}

/// Pre-configured API client: base URL, the session's bearer token, and the
/// transport that executes requests.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    transport: SharedTransport,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, token: Option<String>) -> Self {
        Self::with_transport(config, token, SharedTransport::default())
    }

    pub fn with_transport(config: &ApiConfig, token: Option<String>, transport: SharedTransport) -> Self {
        Self { base_url: config.base_url().to_owned(), token, transport }
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `Authorization` header value, when the session holds a token.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_deref().map(|t| format!("Bearer {t}"))
    }

    /// Execute `request` and decode the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure unchanged.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let body = self.execute(request).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Execute `request`, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns the transport or status failure unchanged.
    pub async fn send_empty(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }

    async fn execute(&self, request: ApiRequest) -> Result<String, ApiError> {
        let url = self.url(&request.path);
        self.transport.0.execute(url, self.authorization(), request).await
    }
}
