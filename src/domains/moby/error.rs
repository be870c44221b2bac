//! Error types for the Moby domain.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the Moby endpoint.
#[derive(Debug, Error)]
pub enum MobyError {
    /// The request could not be sent or the response body could not be read.
    #[error("Moby request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Moby returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
}
