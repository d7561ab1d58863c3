use serde::{Deserialize, Serialize};

/// Partial update payload. Renaming is not supported through this path, so
/// there is deliberately no `name` field here.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateRepoRequest {
    pub description: String,
}

impl UpdateRepoRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}
