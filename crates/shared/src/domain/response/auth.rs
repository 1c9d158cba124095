use serde::{Deserialize, Serialize};

/// Payload of the side-effect-free session presence check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCheckResponse {
    pub authenticated: bool,
}
