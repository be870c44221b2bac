//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients to perform
//! specific actions or computations.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `catalog.rs` - The advertised tool surface
//! - `router.rs` - Builds the ToolRouter, pairing catalog entries with handlers
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, descriptor(), execute(), and create_route()
//! 3. Export in `definitions/mod.rs`
//! 4. Add the descriptor in `catalog.rs` and the handler in `router.rs`
//!
//! The router refuses to build when the two lists drift apart, so a missing
//! handler is caught at startup rather than on first call.

pub mod catalog;
pub mod definitions;
mod error;
pub mod router;

pub use catalog::{ToolDescriptor, catalog};
pub use error::ToolError;
pub use router::build_tool_router;
