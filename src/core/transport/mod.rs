//! Transport layer for the MCP server.
//!
//! Claude Desktop launches MCP servers as child processes and exchanges
//! JSON-RPC messages over stdin/stdout, so STDIO is the only transport here.
//! The transport owns the connection lifecycle and delegates message
//! processing to the MCP server handler.

mod error;

pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
