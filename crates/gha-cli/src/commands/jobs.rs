//! Workflow-job commands.

use std::io::Write;

use anyhow::{Context, Result};
use gha_client::Client;
use gha_core::fetch_all;

use crate::commands::display_status;
use crate::table::Table;

/// Lists the jobs of one workflow run.
pub async fn list(client: &Client, owner: &str, repo: &str, run_id: u64) -> Result<()> {
    let jobs = fetch_all(|page| client.list_run_jobs(owner, repo, run_id, page), 0)
        .await
        .with_context(|| format!("failed to list jobs for run {run_id}"))?;

    let mut table = Table::new(["ID", "NAME", "STATUS", "RUN_ATTEMPT", "WORKFLOW_NAME"]);
    for job in &jobs {
        table.row([
            job.id.to_string(),
            job.name.clone(),
            display_status(Some(&job.status), job.conclusion.as_deref()).to_string(),
            job.run_attempt
                .map_or_else(String::new, |attempt| attempt.to_string()),
            job.workflow_name.clone().unwrap_or_default(),
        ]);
    }
    table
        .write_to(&mut std::io::stdout().lock())
        .context("failed to print result")?;
    Ok(())
}

/// Streams a job's raw log to stdout.
pub async fn logs(client: &Client, owner: &str, repo: &str, job_id: u64) -> Result<()> {
    let mut response = client
        .job_logs(owner, repo, job_id)
        .await
        .with_context(|| format!("failed to locate log for job {job_id}"))?;

    let mut stdout = std::io::stdout().lock();
    while let Some(chunk) = response
        .chunk()
        .await
        .with_context(|| format!("failed to read log for job {job_id}"))?
    {
        stdout
            .write_all(&chunk)
            .with_context(|| format!("failed to write log for job {job_id}"))?;
    }
    Ok(())
}
