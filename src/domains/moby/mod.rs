//! Moby domain: the Triple Whale analytics agent integration.
//!
//! This domain owns the HTTP client that forwards questions to the hosted
//! Moby chat endpoint. The MCP tool surface that exposes it lives in the
//! tools domain.

mod client;
mod error;

pub use client::{MobyClient, MobyResponse};
pub use error::MobyError;
