//! GitHub Actions command-line client.

use clap::{Parser, Subcommand};
use gha_client::{Client, RunFilter};
use tracing_subscriber::EnvFilter;

mod commands;
mod table;

#[derive(Parser)]
#[command(name = "gha")]
#[command(about = "Inspect GitHub Actions workflows, runs and jobs", long_about = None)]
struct Cli {
    /// The account owner of the repository. The name is not case sensitive.
    #[arg(long)]
    owner: String,

    /// The name of the repository. The name is not case sensitive.
    #[arg(long)]
    repo: String,

    /// The GitHub token of the caller
    #[arg(long, env = "GITHUB_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// View workflows for a repository in GitHub Actions
    #[command(visible_alias = "w")]
    Workflows {
        #[command(subcommand)]
        command: WorkflowCommands,
    },
    /// Workflow runs for a repository in GitHub Actions
    Run {
        #[command(subcommand)]
        command: RunCommands,
    },
    /// Workflow jobs for a repository in GitHub Actions
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
}

#[derive(Subcommand)]
enum WorkflowCommands {
    /// List the workflows in a repository
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Subcommand)]
enum RunCommands {
    /// List workflow runs
    #[command(visible_alias = "ls")]
    List {
        /// The ID of the workflow; the workflow file name also works
        #[arg(long)]
        workflow_id: Option<String>,

        /// Status or conclusion to filter by, e.g. completed, success, in_progress
        #[arg(long)]
        status: Option<String>,

        /// Date-time range the runs were created in, GitHub search syntax
        #[arg(long)]
        created: Option<String>,

        /// Triggering event to filter by, e.g. push or pull_request
        #[arg(long)]
        event: Option<String>,

        /// Branch the runs are associated with
        #[arg(long)]
        branch: Option<String>,

        /// Max number of runs to be fetched
        #[arg(long, default_value_t = 100)]
        limit: u64,

        /// Job names in the workflow run to show durations for; may repeat
        #[arg(long)]
        jobs: Vec<String>,
    },
}

#[derive(Subcommand)]
enum JobCommands {
    /// List workflow jobs with a given workflow run ID
    List {
        /// Workflow run ID
        run_id: u64,
    },
    /// Download a job's log
    Logs {
        /// Workflow job ID
        job_id: u64,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("gha: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = Client::new(cli.token);

    match cli.command {
        Commands::Workflows { command } => match command {
            WorkflowCommands::List => {
                commands::workflows::list(&client, &cli.owner, &cli.repo).await?;
            }
        },
        Commands::Run { command } => match command {
            RunCommands::List {
                workflow_id,
                status,
                created,
                event,
                branch,
                limit,
                jobs,
            } => {
                let filter = RunFilter {
                    workflow_id,
                    branch,
                    created,
                    status,
                    event,
                };
                commands::runs::list(&client, &cli.owner, &cli.repo, &filter, limit as usize, &jobs)
                    .await?;
            }
        },
        Commands::Job { command } => match command {
            JobCommands::List { run_id } => {
                commands::jobs::list(&client, &cli.owner, &cli.repo, run_id).await?;
            }
            JobCommands::Logs { job_id } => {
                commands::jobs::logs(&client, &cli.owner, &cli.repo, job_id).await?;
            }
        },
    }

    Ok(())
}
