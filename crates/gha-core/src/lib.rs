//! Core domain types and pagination for the gha CLI.
//!
//! This crate contains:
//! - Workflow, workflow-run and workflow-job records as the GitHub Actions
//!   REST API returns them
//! - The page-draining routine every list command is built on

pub mod job;
pub mod page;
pub mod run;
pub mod workflow;

pub use page::{PER_PAGE, Page, PageRequest, fetch_all};
