use axum::Json;
use crate::models::RootMessage;
use tracing::debug;

/// Root informational endpoint
pub async fn root() -> Json<RootMessage> {
    debug!("Root requested");
    Json(RootMessage::running())
}
