//! Host binary errors.

/// Failures that stop the host from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// An environment variable held an unusable value.
    #[error("invalid {var}: {message}")]
    Config { var: &'static str, message: String },

    /// The Leptos site configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
