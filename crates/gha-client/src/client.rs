//! GitHub Actions API client.

use gha_core::job::WorkflowJob;
use gha_core::run::WorkflowRun;
use gha_core::workflow::Workflow;
use gha_core::{Page, PageRequest};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Error;
use crate::link;

const API_ROOT: &str = "https://api.github.com";
const USER_AGENT: &str = "gha-cli";

/// GitHub API client.
///
/// Requests are sent anonymously unless a token is supplied.
pub struct Client {
    client: reqwest::Client,
    token: Option<String>,
}

/// Filters for a workflow-run listing.
#[derive(Debug, Clone, Default)]
pub struct RunFilter {
    /// Numeric workflow ID or workflow file name. When set, runs are listed
    /// for that workflow instead of the whole repository.
    pub workflow_id: Option<String>,
    /// Branch the runs are associated with.
    pub branch: Option<String>,
    /// Date-time range the runs were created in, GitHub search syntax.
    pub created: Option<String>,
    /// Status or conclusion keyword, e.g. "completed" or "failure".
    pub status: Option<String>,
    /// Triggering event, e.g. "push" or "pull_request".
    pub event: Option<String>,
}

impl Client {
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
        }
    }

    /// Lists one page of the workflows configured in a repository.
    pub async fn list_workflows(
        &self,
        owner: &str,
        repo: &str,
        page: PageRequest,
    ) -> Result<Page<Workflow>, Error> {
        let url = format!("{API_ROOT}/repos/{owner}/{repo}/actions/workflows");
        debug!(owner, repo, page = page.page, "listing workflows");

        let (envelope, next_page) = self.get_page::<WorkflowsEnvelope>(&url, &[], page).await?;
        Ok(Page {
            items: envelope.workflows,
            next_page,
        })
    }

    /// Lists one page of a repository's workflow runs, optionally scoped to
    /// a single workflow and narrowed by the filter.
    pub async fn list_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        filter: &RunFilter,
        page: PageRequest,
    ) -> Result<Page<WorkflowRun>, Error> {
        let url = match &filter.workflow_id {
            Some(workflow) => {
                format!("{API_ROOT}/repos/{owner}/{repo}/actions/workflows/{workflow}/runs")
            }
            None => format!("{API_ROOT}/repos/{owner}/{repo}/actions/runs"),
        };

        let mut query = Vec::new();
        if let Some(branch) = &filter.branch {
            query.push(("branch", branch.clone()));
        }
        if let Some(created) = &filter.created {
            query.push(("created", created.clone()));
        }
        if let Some(status) = &filter.status {
            query.push(("status", status.clone()));
        }
        if let Some(event) = &filter.event {
            query.push(("event", event.clone()));
        }

        debug!(owner, repo, page = page.page, "listing workflow runs");
        let (envelope, next_page) = self.get_page::<RunsEnvelope>(&url, &query, page).await?;
        Ok(Page {
            items: envelope.workflow_runs,
            next_page,
        })
    }

    /// Lists one page of the jobs of a workflow run.
    pub async fn list_run_jobs(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
        page: PageRequest,
    ) -> Result<Page<WorkflowJob>, Error> {
        let url = format!("{API_ROOT}/repos/{owner}/{repo}/actions/runs/{run_id}/jobs");
        debug!(owner, repo, run_id, page = page.page, "listing run jobs");

        let (envelope, next_page) = self.get_page::<JobsEnvelope>(&url, &[], page).await?;
        Ok(Page {
            items: envelope.jobs,
            next_page,
        })
    }

    /// Fetches the raw log of a job.
    ///
    /// GitHub answers with a redirect to a short-lived download URL, which
    /// the client follows; the returned response body is the plain-text log,
    /// left unread so the caller can stream it.
    pub async fn job_logs(
        &self,
        owner: &str,
        repo: &str,
        job_id: u64,
    ) -> Result<reqwest::Response, Error> {
        let url = format!("{API_ROOT}/repos/{owner}/{repo}/actions/jobs/{job_id}/logs");
        debug!(owner, repo, job_id, "downloading job log");

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Error::Api(format!("{url} returned {status}")));
        }
        Ok(response)
    }

    /// Fetches one page of a list endpoint and decodes its envelope,
    /// returning the next page number from the `Link` header alongside.
    async fn get_page<E: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        page: PageRequest,
    ) -> Result<(E, Option<u32>), Error> {
        let response = self
            .get(url)
            .query(&[
                ("page", page.page.to_string()),
                ("per_page", page.per_page.to_string()),
            ])
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!("{url} returned {status}: {text}")));
        }

        let next_page = link::next_page(response.headers());
        let envelope = response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;

        Ok((envelope, next_page))
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json");

        match &self.token {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }
}

#[derive(Deserialize)]
struct WorkflowsEnvelope {
    workflows: Vec<Workflow>,
}

#[derive(Deserialize)]
struct RunsEnvelope {
    workflow_runs: Vec<WorkflowRun>,
}

#[derive(Deserialize)]
struct JobsEnvelope {
    jobs: Vec<WorkflowJob>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflows_envelope() {
        let envelope: WorkflowsEnvelope = serde_json::from_str(
            r#"{
                "total_count": 1,
                "workflows": [
                    {"id": 161335, "name": "CI", "state": "active",
                     "path": ".github/workflows/ci.yaml"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(envelope.workflows.len(), 1);
        assert_eq!(envelope.workflows[0].path, ".github/workflows/ci.yaml");
    }

    #[test]
    fn test_jobs_envelope() {
        let envelope: JobsEnvelope = serde_json::from_str(
            r#"{
                "total_count": 2,
                "jobs": [
                    {"id": 1, "name": "build", "status": "completed",
                     "conclusion": "success", "run_attempt": 1,
                     "workflow_name": "CI",
                     "started_at": "2020-01-20T17:42:40Z",
                     "completed_at": "2020-01-20T17:44:10Z"},
                    {"id": 2, "name": "test", "status": "in_progress"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(envelope.jobs.len(), 2);
        assert!(envelope.jobs[1].completed_at.is_none());
    }
}
