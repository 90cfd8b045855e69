use serde::{Deserialize, Serialize};

/// Error envelope returned by the API when a request fails
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
