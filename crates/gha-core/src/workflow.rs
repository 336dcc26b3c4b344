//! Workflow definitions.

use serde::{Deserialize, Serialize};

/// A workflow configured in a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    /// Unique identifier.
    pub id: u64,
    /// Workflow name from the workflow file.
    pub name: String,
    /// Lifecycle state, e.g. "active" or "disabled_manually".
    pub state: String,
    /// Path of the workflow file within the repository.
    pub path: String,
}
