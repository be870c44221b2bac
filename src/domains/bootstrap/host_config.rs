//! Claude Desktop config file access.
//!
//! Claude Desktop keeps its MCP server registrations in a per-user JSON file
//! (`~/Library/Application Support/Claude/claude_desktop_config.json` on
//! macOS). This module locates that file and performs the read-modify-write
//! cycle that registers a server under the `mcpServers` map while leaving
//! every other key in the file untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

use super::BootstrapError;

/// Key under which this server is registered in `mcpServers`.
pub const SERVER_KEY: &str = "triplewhale";

/// Top-level map holding MCP server registrations.
const MCP_SERVERS_KEY: &str = "mcpServers";

/// A single MCP server registration as Claude Desktop expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    /// Executable Claude Desktop should spawn.
    pub command: String,

    /// Arguments passed to the executable.
    pub args: Vec<String>,
}

/// Resolve the Claude Desktop config file path for the current user.
///
/// Built on the platform config directory, which is
/// `~/Library/Application Support` on macOS, `~/.config` on Linux and
/// `%APPDATA%` on Windows.
pub fn host_config_path() -> Result<PathBuf, BootstrapError> {
    dirs::config_dir()
        .map(|dir| dir.join("Claude").join("claude_desktop_config.json"))
        .ok_or(BootstrapError::ConfigDirUnavailable)
}

/// Load the config file, or the empty skeleton when it does not exist yet.
pub fn load(path: &Path) -> Result<Value, BootstrapError> {
    if !path.exists() {
        return Ok(json!({ MCP_SERVERS_KEY: {} }));
    }

    let content = fs::read_to_string(path).map_err(|source| BootstrapError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| BootstrapError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Register `entry` under `key` in the `mcpServers` map.
///
/// Returns whether an existing registration was replaced. Non-object values
/// at the root or under `mcpServers` are replaced with objects so the entry
/// always lands.
pub fn insert_server(config: &mut Value, key: &str, entry: &ServerEntry) -> bool {
    if !config.is_object() {
        *config = json!({});
    }

    let servers = &mut config[MCP_SERVERS_KEY];
    if !servers.is_object() {
        *servers = json!({});
    }

    let replaced = servers.get(key).is_some();
    servers[key] = json!({ "command": entry.command, "args": entry.args });
    replaced
}

/// Write the config back, creating parent directories as needed.
///
/// The whole document is rewritten pretty-printed, so keys this server does
/// not own survive the round trip verbatim.
pub fn save(path: &Path, config: &Value) -> Result<(), BootstrapError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| BootstrapError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content).map_err(|source| BootstrapError::Write {
        path: path.to_path_buf(),
        source,
    })
}
