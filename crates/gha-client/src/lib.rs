//! HTTP client for the GitHub Actions REST API.
//!
//! Exposes one-page list operations for workflows, workflow runs and
//! workflow jobs, plus job-log download. Draining a listing across pages is
//! driven by the caller through [`gha_core::fetch_all`].

mod client;
mod error;
mod link;

pub use client::{Client, RunFilter};
pub use error::Error;
