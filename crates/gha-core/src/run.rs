//! Workflow-run records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One execution of a workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRun {
    /// Unique identifier.
    pub id: u64,
    /// Run name, usually the workflow name.
    #[serde(default)]
    pub name: Option<String>,
    /// Event that triggered the run, e.g. "push" or "pull_request".
    pub event: String,
    /// Branch the run was started for.
    #[serde(default)]
    pub head_branch: Option<String>,
    /// Full SHA of the head commit.
    pub head_sha: String,
    /// Head commit, absent for some run kinds.
    #[serde(default)]
    pub head_commit: Option<HeadCommit>,
    /// Current status, e.g. "queued", "in_progress" or "completed".
    #[serde(default)]
    pub status: Option<String>,
    /// Outcome once the run has completed, e.g. "success" or "failure".
    #[serde(default)]
    pub conclusion: Option<String>,
    /// When the run was created.
    pub created_at: DateTime<Utc>,
}

/// Commit a workflow run was started for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadCommit {
    /// Full commit message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_api_payload() {
        let run: WorkflowRun = serde_json::from_str(
            r#"{
                "id": 30433642,
                "name": "Build",
                "head_branch": "main",
                "head_sha": "acb5820ced9479c074f688cc328bf03f341a511d",
                "head_commit": {"message": "Create linter.yaml\n\nbody"},
                "status": "completed",
                "conclusion": "success",
                "event": "push",
                "created_at": "2020-01-22T19:33:08Z",
                "run_number": 562
            }"#,
        )
        .unwrap();

        assert_eq!(run.id, 30433642);
        assert_eq!(run.head_commit.unwrap().message, "Create linter.yaml\n\nbody");
        assert_eq!(run.conclusion.as_deref(), Some("success"));
    }

    #[test]
    fn test_tolerates_null_fields() {
        let run: WorkflowRun = serde_json::from_str(
            r#"{
                "id": 1,
                "name": null,
                "head_branch": null,
                "head_sha": "deadbeef",
                "head_commit": null,
                "status": "queued",
                "conclusion": null,
                "event": "workflow_dispatch",
                "created_at": "2024-05-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert!(run.name.is_none());
        assert!(run.head_commit.is_none());
        assert!(run.conclusion.is_none());
    }
}
