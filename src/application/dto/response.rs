//! Response DTOs

use serde::Serialize;

/// `{"success": true}` returned by the session endpoints
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
