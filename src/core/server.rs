//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The advertised surface lives in `domains/tools/catalog.rs` and the
//! ToolRouter is built in `domains/tools/router.rs`, which verifies at
//! construction time that every cataloged tool has a handler.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::moby::MobyClient;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and exposes
/// the cataloged tools over the protocol.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when the tool catalog and handler table disagree, so a
    /// misassembled tool surface never reaches a client.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let config = Arc::new(config);
        let client = Arc::new(MobyClient::from_config(&config));

        Ok(Self {
            tool_router: build_tool_router::<Self>(client)?,
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server exposes Triple Whale's Moby analytics agent. Use the moby tool \
                 to ask questions about a shop's e-commerce performance data."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_new_succeeds() {
        let server = McpServer::new(Config::new("tw_key")).unwrap();
        assert_eq!(server.name(), "mcp-server-triplewhale");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_get_info_reports_identity_and_tools() {
        let server = McpServer::new(Config::new("tw_key")).unwrap();
        let info = server.get_info();

        assert_eq!(info.server_info.name, "mcp-server-triplewhale");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }
}
