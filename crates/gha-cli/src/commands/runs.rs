//! Workflow-run commands.

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::{Duration, SecondsFormat};
use gha_client::{Client, RunFilter};
use gha_core::fetch_all;
use gha_core::run::WorkflowRun;
use tracing::debug;

use crate::commands::display_status;
use crate::table::Table;

/// Lists workflow runs, optionally joining per-run job durations for the
/// requested job names.
///
/// Each requested job name becomes a `JOB(<name>)` column; filling it costs
/// one extra job listing per run, fetched sequentially.
pub async fn list(
    client: &Client,
    owner: &str,
    repo: &str,
    filter: &RunFilter,
    limit: usize,
    job_names: &[String],
) -> Result<()> {
    let runs = fetch_all(
        |page| client.list_workflow_runs(owner, repo, filter, page),
        limit,
    )
    .await
    .context("failed to list workflow runs")?;

    let mut header: Vec<String> = [
        "ID",
        "NAME",
        "EVENT",
        "BRANCH",
        "HEAD(MESSAGE)",
        "SHA",
        "STATUS",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    for name in job_names {
        header.push(format!("JOB({name})"));
    }
    header.push("CREATED".to_string());

    let mut table = Table::new(header);
    for run in &runs {
        let mut cells = vec![
            run.id.to_string(),
            run.name.clone().unwrap_or_default(),
            run.event.clone(),
            run.head_branch.clone().unwrap_or_default(),
            subject_line(run.head_commit.as_ref().map_or("", |c| &c.message)).to_string(),
            short_sha(&run.head_sha).to_string(),
            display_status(run.status.as_deref(), run.conclusion.as_deref()).to_string(),
        ];

        if !job_names.is_empty() {
            let durations = job_durations(client, owner, repo, run).await?;
            for name in job_names {
                let cell = durations
                    .get(name)
                    .map_or_else(|| "N/A".to_string(), |d| format_duration(*d));
                cells.push(cell);
            }
        }

        cells.push(run.created_at.to_rfc3339_opts(SecondsFormat::Secs, true));
        table.row(cells);
    }

    table
        .write_to(&mut std::io::stdout().lock())
        .context("failed to print result")?;
    Ok(())
}

/// Fetches every job of a run and indexes the completed ones by name.
async fn job_durations(
    client: &Client,
    owner: &str,
    repo: &str,
    run: &WorkflowRun,
) -> Result<HashMap<String, Duration>> {
    debug!(run_id = run.id, "fetching jobs for duration columns");
    let jobs = fetch_all(|page| client.list_run_jobs(owner, repo, run.id, page), 0)
        .await
        .with_context(|| format!("failed to list jobs for run {}", run.id))?;

    let mut durations = HashMap::new();
    for job in jobs {
        if let Some(duration) = job.duration() {
            durations.insert(job.name, duration);
        }
    }
    Ok(durations)
}

/// First line of a commit message, hard-truncated to 80 characters.
fn subject_line(message: &str) -> &str {
    let subject = message.lines().next().unwrap_or(message);
    match subject.char_indices().nth(80) {
        Some((cut, _)) => &subject[..cut],
        None => subject,
    }
}

/// First 8 characters of a commit SHA; shorter input is left unchanged.
fn short_sha(sha: &str) -> &str {
    sha.get(..8).unwrap_or(sha)
}

/// Renders a duration the way Go's `time.Duration` prints, e.g. "1h2m3s".
fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_line_takes_first_line() {
        assert_eq!(subject_line("fix the bug\n\nlong body here"), "fix the bug");
    }

    #[test]
    fn test_subject_line_truncates_to_80_chars() {
        let long = "x".repeat(120) + "\nsecond line";

        let subject = subject_line(&long);

        assert_eq!(subject.chars().count(), 80);
        assert_eq!(subject, "x".repeat(80));
    }

    #[test]
    fn test_subject_line_of_empty_message() {
        assert_eq!(subject_line(""), "");
    }

    #[test]
    fn test_short_sha_of_full_sha() {
        assert_eq!(
            short_sha("acb5820ced9479c074f688cc328bf03f341a511d"),
            "acb5820c"
        );
    }

    #[test]
    fn test_short_sha_keeps_short_input() {
        assert_eq!(short_sha("ab123"), "ab123");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(45)), "45s");
        assert_eq!(format_duration(Duration::seconds(90)), "1m30s");
        assert_eq!(format_duration(Duration::seconds(3723)), "1h2m3s");
    }
}
