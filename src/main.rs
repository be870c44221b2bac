//! MCP Server Entry Point
//!
//! Parses the command line, then either registers the server with Claude
//! Desktop (`init`) or runs it over stdio (`start`). Logging goes to stderr
//! so stdout stays clean for the MCP protocol.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use triplewhale_mcp_server::core::cli::{self, Command};
use triplewhale_mcp_server::core::transport::StdioTransport;
use triplewhale_mcp_server::core::{Config, McpServer};
use triplewhale_mcp_server::domains::bootstrap;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let invocation = match cli::parse(&args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match invocation.command {
        Command::Init { api_key } => {
            bootstrap::handle_init(&invocation.executable, &api_key)?;
            Ok(())
        }
        Command::Start { api_key } => {
            let config = Config::from_env(api_key);

            init_logging(&config.logging.level);

            info!("Starting {} v{}", config.server.name, config.server.version);

            let server = McpServer::new(config)?;

            info!("Server initialized");

            StdioTransport::run(server).await?;

            info!("Server shutting down");

            Ok(())
        }
    }
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
