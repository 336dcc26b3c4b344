//! Workflow-job records.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One job within a workflow run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowJob {
    /// Unique identifier.
    pub id: u64,
    /// Job name from the workflow file.
    pub name: String,
    /// Current status, e.g. "queued", "in_progress" or "completed".
    pub status: String,
    /// Outcome once the job has completed.
    #[serde(default)]
    pub conclusion: Option<String>,
    /// Attempt number of the enclosing run.
    #[serde(default)]
    pub run_attempt: Option<u64>,
    /// Name of the workflow the job belongs to.
    #[serde(default)]
    pub workflow_name: Option<String>,
    /// When the job started executing.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// When the job finished, absent while it is still running.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl WorkflowJob {
    /// Wall-clock duration of the job, once it has started and completed.
    pub fn duration(&self) -> Option<Duration> {
        Some(self.completed_at? - self.started_at?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_of_completed_job() {
        let job: WorkflowJob = serde_json::from_str(
            r#"{
                "id": 399444496,
                "name": "build",
                "status": "completed",
                "conclusion": "success",
                "run_attempt": 1,
                "workflow_name": "CI",
                "started_at": "2020-01-20T17:42:40Z",
                "completed_at": "2020-01-20T17:44:10Z"
            }"#,
        )
        .unwrap();

        assert_eq!(job.duration(), Some(Duration::seconds(90)));
    }

    #[test]
    fn test_running_job_has_no_duration() {
        let job: WorkflowJob = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "test",
                "status": "in_progress",
                "started_at": "2024-05-01T00:00:00Z",
                "completed_at": null
            }"#,
        )
        .unwrap();

        assert_eq!(job.duration(), None);
    }
}
