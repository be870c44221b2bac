//! Command-line argument parsing.
//!
//! The server accepts exactly one command and one API key:
//!
//! ```text
//! mcp-server-triplewhale <init|start> <TRIPLEWHALE_API_KEY>
//! ```
//!
//! Parsing is deliberately strict: anything other than the two-argument shape
//! above is rejected with a diagnostic, and the process exits with status 1.

use thiserror::Error;

/// The command selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write the Claude Desktop config entry and exit.
    Init { api_key: String },

    /// Run the MCP server over stdio.
    Start { api_key: String },
}

/// A fully parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The executable path as invoked (argv[0]).
    pub executable: String,

    /// The selected command together with its API key.
    pub command: Command,
}

/// Diagnostics produced when the command line does not match the contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error(
        "Please provide a TRIPLEWHALE_API_KEY as a command-line argument - \
         you can get one through the Triplewhale console: \
         https://triplewhale.tech/docs/manage/api-keys"
    )]
    MissingApiKey,

    #[error("Invalid number of arguments")]
    WrongArgCount,

    #[error("Invalid command: {0}")]
    UnknownCommand(String),
}

/// Parse a raw argument vector into an [`Invocation`].
///
/// `args` is the full argv including the executable name. A lone command with
/// no key gets the dedicated API key hint; any other wrong shape is reported
/// as a count mismatch before the command name is inspected.
pub fn parse(args: &[String]) -> Result<Invocation, UsageError> {
    if args.len() == 2 {
        return Err(UsageError::MissingApiKey);
    }
    if args.len() != 3 {
        return Err(UsageError::WrongArgCount);
    }

    let executable = args[0].clone();
    let api_key = args[2].clone();

    let command = match args[1].as_str() {
        "init" => Command::Init { api_key },
        "start" => Command::Start { api_key },
        other => return Err(UsageError::UnknownCommand(other.to_string())),
    };

    Ok(Invocation {
        executable,
        command,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_start() {
        let invocation = parse(&argv(&["mcp-server", "start", "tw_key"])).unwrap();
        assert_eq!(invocation.executable, "mcp-server");
        assert_eq!(
            invocation.command,
            Command::Start {
                api_key: "tw_key".to_string()
            }
        );
    }

    #[test]
    fn test_parse_init() {
        let invocation = parse(&argv(&["./target/debug/mcp-server", "init", "tw_key"])).unwrap();
        assert_eq!(
            invocation.command,
            Command::Init {
                api_key: "tw_key".to_string()
            }
        );
    }

    #[test]
    fn test_missing_api_key_hint() {
        let err = parse(&argv(&["mcp-server", "start"])).unwrap_err();
        assert_eq!(err, UsageError::MissingApiKey);
        assert_eq!(
            err.to_string(),
            "Please provide a TRIPLEWHALE_API_KEY as a command-line argument - \
             you can get one through the Triplewhale console: \
             https://triplewhale.tech/docs/manage/api-keys"
        );
    }

    #[test]
    fn test_no_arguments_is_count_mismatch() {
        let err = parse(&argv(&["mcp-server"])).unwrap_err();
        assert_eq!(err, UsageError::WrongArgCount);
        assert_eq!(err.to_string(), "Invalid number of arguments");
    }

    #[test]
    fn test_too_many_arguments() {
        let err = parse(&argv(&["mcp-server", "start", "key", "extra"])).unwrap_err();
        assert_eq!(err, UsageError::WrongArgCount);
    }

    #[test]
    fn test_unknown_command() {
        let err = parse(&argv(&["mcp-server", "status", "key"])).unwrap_err();
        assert_eq!(err, UsageError::UnknownCommand("status".to_string()));
        assert_eq!(err.to_string(), "Invalid command: status");
    }

    #[test]
    fn test_command_names_are_case_sensitive() {
        let err = parse(&argv(&["mcp-server", "START", "key"])).unwrap_err();
        assert_eq!(err, UsageError::UnknownCommand("START".to_string()));
    }
}
