use std::any::Any;

use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

use crate::models::ErrorResponse;

/// Answers any method/path pair missing from the route table
pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    debug!("No route for {} {}", method, uri.path());
    ErrorResponse::new(
        StatusCode::NOT_FOUND,
        format!("No route for {} {}", method, uri.path()),
    )
    .into_reply()
}

/// Swaps the framework's 405 for the same 404 an unknown path gets. Used on
/// routes mounted outside the route table.
pub async fn method_not_allowed_as_not_found(method: Method, uri: Uri, response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        not_found(method, uri).await.into_response()
    } else {
        response
    }
}

/// Turns a handler panic into a 500 so the server keeps serving.
pub fn internal_error(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!("Handler panicked: {}", detail);

    ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        .into_reply()
        .into_response()
}
