use crate::{error::RouteError, handlers::health_check, routes::RouteTable};
use axum::http::Method;

/// Create the v1 API routes, mounted under `/api/v1`
pub fn create_api_v1_routes() -> Result<RouteTable, RouteError> {
    let mut table = RouteTable::new();
    table.register(Method::GET, "/health", health_check)?;
    Ok(table)
}
