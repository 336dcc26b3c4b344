//! Workflow commands.

use anyhow::{Context, Result};
use gha_client::Client;
use gha_core::fetch_all;

use crate::table::Table;

/// Lists every workflow configured in the repository.
pub async fn list(client: &Client, owner: &str, repo: &str) -> Result<()> {
    let workflows = fetch_all(|page| client.list_workflows(owner, repo, page), 0)
        .await
        .context("failed to list workflows")?;

    let mut table = Table::new(["ID", "NAME", "STATE", "PATH"]);
    for workflow in &workflows {
        table.row([
            workflow.id.to_string(),
            workflow.name.clone(),
            workflow.state.clone(),
            workflow.path.clone(),
        ]);
    }
    table
        .write_to(&mut std::io::stdout().lock())
        .context("failed to print result")?;
    Ok(())
}
