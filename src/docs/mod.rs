use utoipa::OpenApi;
use crate::models::*;

/// Root informational endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses(
        (status = 200, description = "Backend is running", body = RootMessage)
    )
)]
#[allow(dead_code)]
pub async fn root_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        root_doc,
        health_check_doc,
    ),
    components(
        schemas(RootMessage, HealthResponse, ErrorResponse)
    ),
    tags(
        (name = "root", description = "Service information"),
        (name = "health", description = "Liveness checks")
    )
)]
pub struct ApiDoc;
