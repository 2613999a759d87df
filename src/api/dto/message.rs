//! Message response DTO.

use serde::{Deserialize, Serialize};

/// Body of every error response and of the delete acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// `"{entity} not found"`, e.g. `"User not found"`.
    pub fn not_found(entity: &str) -> Self {
        Self::new(format!("{} not found", entity))
    }
}
