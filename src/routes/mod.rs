pub mod api;
pub mod table;

pub use table::RouteTable;

use axum::{http::Method, middleware, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::Config,
    docs::ApiDoc,
    error::RouteError,
    handlers::{internal_error, method_not_allowed_as_not_found, not_found, root},
};
use api::create_api_v1_routes;

pub const API_V1_PREFIX: &str = "/api/v1";

/// The full route table served by the backend
pub fn create_route_table() -> Result<RouteTable, RouteError> {
    let mut table = RouteTable::new();
    table.register(Method::GET, "/", root)?;
    table.nest(API_V1_PREFIX, create_api_v1_routes()?)?;
    Ok(table)
}

/// Build the application router: route table, optional API docs, fallback
/// and the server-boundary layers.
pub fn create_app(config: &Config) -> Result<Router, RouteError> {
    let table = create_route_table()?;
    info!("{} routes registered", table.len());

    let mut app = table.into_router();
    if config.docs_enabled {
        let docs: Router = SwaggerUi::new("/docs")
            .url("/openapi.json", ApiDoc::openapi())
            .into();
        app = app.merge(docs.layer(middleware::map_response(method_not_allowed_as_not_found)));
    }
    Ok(with_server_layers(app))
}

pub fn with_server_layers(router: Router) -> Router {
    router
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(internal_error)),
        )
}
