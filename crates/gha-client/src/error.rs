//! Client error types.

use thiserror::Error;

/// Errors produced by GitHub API calls.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Request(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("parse error: {0}")]
    Parse(String),
}
