use std::collections::{BTreeMap, HashSet};

use axum::{
    handler::Handler,
    http::Method,
    routing::{MethodFilter, MethodRouter},
    Router,
};
use tracing::debug;

use crate::error::RouteError;
use crate::handlers::not_found;

/// Exact `(method, path)` route registry.
///
/// Registrations are checked as they are made, so a duplicate or malformed
/// route fails while the table is being built, before any listener exists.
/// Every path answers unregistered methods with [`not_found`] instead of the
/// framework's 405.
#[derive(Default)]
pub struct RouteTable {
    routes: BTreeMap<String, MethodRouter>,
    registered: HashSet<(Method, String)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<H, T>(&mut self, method: Method, path: &str, handler: H) -> Result<(), RouteError>
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        validate_path(path)?;
        let filter = MethodFilter::try_from(method.clone())
            .map_err(|_| RouteError::UnsupportedMethod(method.clone()))?;

        if !self.registered.insert((method.clone(), path.to_string())) {
            return Err(RouteError::Duplicate {
                method,
                path: path.to_string(),
            });
        }

        debug!("Registered route {} {}", method, path);
        let existing = self.routes.remove(path).unwrap_or_else(MethodRouter::new);
        self.routes.insert(path.to_string(), existing.on(filter, handler));
        Ok(())
    }

    /// Mount every route of `other` under `prefix`. Nothing is moved unless
    /// all of the prefixed routes are free.
    pub fn nest(&mut self, prefix: &str, other: RouteTable) -> Result<(), RouteError> {
        validate_path(prefix)?;
        if prefix.ends_with('/') {
            return Err(RouteError::InvalidPath(prefix.to_string()));
        }

        let incoming: Vec<(Method, String)> = other
            .registered
            .into_iter()
            .map(|(method, path)| (method, format!("{prefix}{path}")))
            .collect();
        if let Some((method, path)) = incoming.iter().find(|key| self.registered.contains(*key)) {
            return Err(RouteError::Duplicate {
                method: method.clone(),
                path: path.clone(),
            });
        }
        self.registered.extend(incoming);

        for (path, method_router) in other.routes {
            let full = format!("{prefix}{path}");
            let merged = match self.routes.remove(&full) {
                Some(existing) => existing.merge(method_router),
                None => method_router,
            };
            self.routes.insert(full, merged);
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn contains(&self, method: &Method, path: &str) -> bool {
        self.registered.contains(&(method.clone(), path.to_string()))
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn into_router(self) -> Router {
        self.routes
            .into_iter()
            .fold(Router::new(), |router, (path, method_router)| {
                router.route(&path, method_router.fallback(not_found))
            })
    }
}

// Literal paths only: no captures, no wildcards.
fn validate_path(path: &str) -> Result<(), RouteError> {
    let has_params = path
        .split('/')
        .any(|segment| segment.starts_with(':') || segment.starts_with('*'));
    if !path.starts_with('/') || has_params {
        return Err(RouteError::InvalidPath(path.to_string()));
    }
    Ok(())
}
