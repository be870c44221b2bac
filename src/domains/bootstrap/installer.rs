//! One-shot registration of this server with Claude Desktop.
//!
//! `init` resolves how Claude Desktop should launch the server, merges the
//! registration into the existing config file and reports progress on the
//! console. The server itself never runs during init.

use colored::Colorize;
use serde_json::Value;
use std::path::Path;

use super::host_config::{self, SERVER_KEY, ServerEntry};
use super::BootstrapError;

/// Resolve the command Claude Desktop should launch.
///
/// When init runs from a build tree (the executable path has a `target`
/// component) the path is taken verbatim, so local builds are wired up
/// directly. Any other invocation registers the binary by package name and
/// relies on it being found on PATH.
pub fn launch_target(executable: &str) -> String {
    let is_build_artifact = Path::new(executable)
        .components()
        .any(|c| c.as_os_str() == "target");

    if is_build_artifact {
        executable.to_string()
    } else {
        env!("CARGO_PKG_NAME").to_string()
    }
}

/// Build the registration entry for the given executable and API key.
pub fn server_entry(executable: &str, api_key: &str) -> ServerEntry {
    ServerEntry {
        command: launch_target(executable),
        args: vec!["start".to_string(), api_key.to_string()],
    }
}

/// Merge the registration into the config file at `path`.
///
/// Existing registrations under other keys and unrelated top-level keys are
/// preserved; an existing entry under our key is replaced.
pub fn write_host_config(
    path: &Path,
    executable: &str,
    api_key: &str,
) -> Result<(), BootstrapError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            println!("{}", "Creating Claude config directory...".blue());
        }
    }

    let mut config: Value = host_config::load(path)?;

    let entry = server_entry(executable, api_key);
    if host_config::insert_server(&mut config, SERVER_KEY, &entry) {
        println!("{}", "Replacing existing Triplewhale MCP config...".yellow());
    }

    host_config::save(path, &config)?;

    println!("{}", format!("Config written to: {}", path.display()).green());
    println!(
        "{}",
        "The Triplewhale MCP server will start automatically the next time you open Claude."
            .blue()
    );

    Ok(())
}

/// Entry point for the `init` command.
pub fn handle_init(executable: &str, api_key: &str) -> Result<(), BootstrapError> {
    let path = host_config::host_config_path()?;
    write_host_config(&path, executable, api_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn config_path(temp_dir: &TempDir) -> std::path::PathBuf {
        temp_dir
            .path()
            .join("Claude")
            .join("claude_desktop_config.json")
    }

    #[test]
    fn test_launch_target_build_tree_path_taken_verbatim() {
        let target = launch_target("/home/dev/project/target/debug/mcp-server-triplewhale");
        assert_eq!(target, "/home/dev/project/target/debug/mcp-server-triplewhale");
    }

    #[test]
    fn test_launch_target_other_invocations_use_package_name() {
        assert_eq!(launch_target("mcp-server-triplewhale"), env!("CARGO_PKG_NAME"));
        assert_eq!(launch_target("/usr/local/bin/tw-mcp"), env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn test_write_host_config_creates_fresh_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = config_path(&temp_dir);

        write_host_config(&path, "mcp-server-triplewhale", "tw_key").unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            written["mcpServers"]["triplewhale"],
            json!({
                "command": env!("CARGO_PKG_NAME"),
                "args": ["start", "tw_key"]
            })
        );
    }

    #[test]
    fn test_write_host_config_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = config_path(&temp_dir);

        write_host_config(&path, "mcp-server-triplewhale", "tw_key").unwrap();
        let first = fs::read_to_string(&path).unwrap();

        write_host_config(&path, "mcp-server-triplewhale", "tw_key").unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_write_host_config_preserves_unrelated_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = config_path(&temp_dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();

        let existing = json!({
            "globalShortcut": "Ctrl+Space",
            "mcpServers": {
                "other-server": { "command": "other", "args": ["--serve"] }
            }
        });
        fs::write(&path, serde_json::to_string_pretty(&existing).unwrap()).unwrap();

        write_host_config(&path, "mcp-server-triplewhale", "tw_key").unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["globalShortcut"], json!("Ctrl+Space"));
        assert_eq!(
            written["mcpServers"]["other-server"],
            json!({ "command": "other", "args": ["--serve"] })
        );
        assert!(written["mcpServers"]["triplewhale"].is_object());
    }

    #[test]
    fn test_write_host_config_replaces_existing_entry() {
        let temp_dir = TempDir::new().unwrap();
        let path = config_path(&temp_dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();

        let existing = json!({
            "mcpServers": {
                "triplewhale": { "command": "stale", "args": ["start", "old_key"] }
            }
        });
        fs::write(&path, serde_json::to_string_pretty(&existing).unwrap()).unwrap();

        write_host_config(&path, "mcp-server-triplewhale", "new_key").unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            written["mcpServers"]["triplewhale"]["args"],
            json!(["start", "new_key"])
        );
        assert_eq!(
            written["mcpServers"]["triplewhale"]["command"],
            json!(env!("CARGO_PKG_NAME"))
        );
    }

    #[test]
    fn test_write_host_config_rejects_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = config_path(&temp_dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let err = write_host_config(&path, "mcp-server-triplewhale", "tw_key").unwrap_err();
        assert!(matches!(err, BootstrapError::Parse { .. }));
    }
}
