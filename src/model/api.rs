use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when a request is rejected before reaching a handler, or fails internally
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
}
