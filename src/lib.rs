//! Triple Whale MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! Triple Whale's Moby analytics agent to MCP clients such as Claude Desktop.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including the CLI, configuration, error
//!   handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The MCP tool surface (catalog, router, definitions)
//!   - **moby**: HTTP client for the hosted Moby chat endpoint
//!   - **bootstrap**: One-shot Claude Desktop registration (`init`)
//!
//! # Example
//!
//! ```rust,no_run
//! use triplewhale_mcp_server::{core::Config, core::McpServer};
//! use triplewhale_mcp_server::core::transport::StdioTransport;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env("TRIPLEWHALE_API_KEY");
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
