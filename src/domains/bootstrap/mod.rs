//! Bootstrap domain: Claude Desktop registration.
//!
//! The `init` command wires this server into Claude Desktop by editing the
//! per-user `claude_desktop_config.json`. Everything here runs once and
//! exits; the MCP server itself is never started on this path.

mod error;
mod host_config;
mod installer;

pub use error::BootstrapError;
pub use host_config::{SERVER_KEY, ServerEntry, host_config_path};
pub use installer::{handle_init, launch_target, write_host_config};
