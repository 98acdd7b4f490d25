//! Aviation MCP Server
//!
//! ```text
//! aviation-mcp                       # serve over stdio
//! aviation-mcp tools                 # list the enabled tools
//! aviation-mcp call get_metar --args '{"ids":"KJFK"}'
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use aviation_common::config::CONFIG_PATH_VAR;
use aviation_common::Config;
use aviation_mcp::{serve, AviationMcpServer, Domain};
use clap::{Parser, Subcommand};
use mcp_common::{init_tracing, LogConfig};

/// Time given to the log writer before a fatal exit
const FLUSH_DELAY: Duration = Duration::from_millis(100);

const LOG_TARGETS: &[&str] = &[
    "aviation_mcp",
    "aviation_common",
    "weather_mcp",
    "charts_mcp",
    "notam_mcp",
    "aircraft_mcp",
    "airports_mcp",
    "precipitation_mcp",
];

#[derive(Parser)]
#[command(name = "aviation-mcp", version)]
#[command(about = "Aviation data MCP server: weather, charts, NOTAMs, aircraft, airports and precipitation")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: ~/.aviation-mcp/config.toml)
    #[arg(long, env = CONFIG_PATH_VAR, global = true)]
    config: Option<PathBuf>,

    /// Verbose diagnostics on stderr (also enabled by DEBUG=true)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP over stdio (default)
    Serve,
    /// List the tools enabled by the current credentials
    Tools,
    /// Call a tool once and print the result envelope
    Call {
        /// Tool name
        tool: String,
        /// Arguments as JSON
        #[arg(long, short)]
        args: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut log = LogConfig::from_env();
    log.debug |= cli.debug;
    if let Err(e) = init_tracing(LOG_TARGETS, &log) {
        eprintln!("failed to initialize logging: {e:#}");
        std::process::exit(1);
    }

    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "uncaught panic");
        std::thread::sleep(FLUSH_DELAY);
        std::process::exit(1);
    }));

    if let Err(e) = run(cli).await {
        tracing::error!(error = format!("{e:#}"), "fatal error");
        tokio::time::sleep(FLUSH_DELAY).await;
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let server = AviationMcpServer::from_config(&config)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(server).await,
        Commands::Tools => {
            print_tools(&server);
            Ok(())
        }
        Commands::Call { tool, args } => run_call_tool(&server, &tool, args).await,
    }
}

fn print_tools(server: &AviationMcpServer) {
    let gate = server.gate();

    for domain in Domain::ALL {
        if !gate.is_enabled(domain) {
            if let Some(requirement) = domain.requirement() {
                println!("=== {} (disabled: requires {}) ===\n", domain, requirement);
            }
            continue;
        }

        let tools: Vec<_> = server
            .enabled_routes()
            .filter(|route| route.domain == domain)
            .collect();
        println!("=== {} ({} tools) ===", domain, tools.len());
        for route in tools {
            let desc = route
                .tool
                .description
                .as_deref()
                .unwrap_or("No description")
                .lines()
                .next()
                .unwrap_or("");
            println!("  {} - {}", route.tool.name, desc);
        }
        println!();
    }
}

async fn run_call_tool(server: &AviationMcpServer, tool: &str, args: Option<String>) -> Result<()> {
    let arguments = match args {
        Some(json) => serde_json::from_str(&json).context("--args is not valid JSON")?,
        None => serde_json::Value::Object(Default::default()),
    };

    tracing::debug!(tool, "calling tool from the command line");
    let result = server.dispatch(tool, arguments).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
