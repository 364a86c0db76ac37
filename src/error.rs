use axum::http::Method;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    Env(#[from] envy::Error),
}

/// Problems found while building the route table, before anything is served.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route {method} {path} is registered more than once")]
    Duplicate { method: Method, path: String },

    #[error("route path {0:?} must start with '/'")]
    InvalidPath(String),

    #[error("method {0} cannot be routed")]
    UnsupportedMethod(Method),
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid route table: {0}")]
    Routes(#[from] RouteError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
