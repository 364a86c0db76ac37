use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ROOT_MESSAGE: &str = "SnapChef backend is running";

/// API response for the root endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RootMessage {
    #[schema(example = "SnapChef backend is running")]
    pub message: String,
}

impl RootMessage {
    pub fn running() -> Self {
        Self {
            message: ROOT_MESSAGE.to_string(),
        }
    }
}
