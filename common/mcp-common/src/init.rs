//! Server initialization utilities
//!
//! Tracing setup and the `serve_stdio!` macro shared by every server binary
//! in the workspace.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration, resolved once at process start
///
/// Passed explicitly to [`init_tracing`]; nothing else in the workspace
/// reads the logging environment variables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Verbose diagnostics (`debug` level) for the workspace crates
    pub debug: bool,
    /// Structured JSON lines instead of human-readable text
    pub json: bool,
}

impl LogConfig {
    /// Read `DEBUG` and `LOG_FORMAT` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            debug: lookup("DEBUG").is_some_and(|v| parse_flag(&v)),
            json: lookup("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
        }
    }

    /// Level applied to the workspace crates
    pub fn level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

/// Interpret a boolean-like environment value
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Initialize tracing for an MCP server process
///
/// Output goes to stderr: stdout is reserved for the MCP protocol. Each entry
/// of `targets` (crate names such as `"weather_mcp"`) gets the level from
/// [`LogConfig::level`]; `RUST_LOG` directives are honored on top.
///
/// ```rust,ignore
/// let log = mcp_common::LogConfig::from_env();
/// mcp_common::init_tracing(&["aviation_mcp", "weather_mcp"], &log)?;
/// ```
pub fn init_tracing(targets: &[&str], config: &LogConfig) -> anyhow::Result<()> {
    let mut filter = EnvFilter::from_default_env();
    for target in targets {
        let directive = format!("{}={}", target, config.level());
        filter = filter.add_directive(directive.parse()?);
    }

    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

/// Standard `main` for a single-domain MCP server binary
///
/// The server type must provide `fn from_env() -> anyhow::Result<Self>`.
/// The generated `main`:
/// 1. resolves [`LogConfig`] and initializes tracing to stderr
/// 2. builds the server with `from_env()`
/// 3. serves it over stdio until the client disconnects
///
/// ```rust,ignore
/// mcp_common::serve_stdio!(WeatherMcpServer, "weather_mcp");
/// ```
#[macro_export]
macro_rules! serve_stdio {
    ($server_type:ty, $crate_name:expr) => {
        #[tokio::main]
        async fn main() -> anyhow::Result<()> {
            use rmcp::ServiceExt;

            let log = $crate::LogConfig::from_env();
            $crate::init_tracing(&[$crate_name, "aviation_common"], &log)?;

            tracing::info!(concat!("Starting ", $crate_name, " MCP Server"));

            let server = <$server_type>::from_env()?;
            let service = server.serve(rmcp::transport::stdio()).await?;

            tracing::info!("Server running, waiting for requests...");

            service.waiting().await?;

            tracing::info!("Server shutting down");
            Ok(())
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_debug_defaults_off() {
        let config = LogConfig::from_lookup(lookup(&[]));
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.level(), "info");
    }

    #[test]
    fn test_debug_flag_values() {
        assert!(LogConfig::from_lookup(lookup(&[("DEBUG", "true")])).debug);
        assert!(LogConfig::from_lookup(lookup(&[("DEBUG", "TRUE")])).debug);
        assert!(LogConfig::from_lookup(lookup(&[("DEBUG", "1")])).debug);
        assert!(!LogConfig::from_lookup(lookup(&[("DEBUG", "false")])).debug);
        assert!(!LogConfig::from_lookup(lookup(&[("DEBUG", "")])).debug);
    }

    #[test]
    fn test_json_format() {
        let config = LogConfig::from_lookup(lookup(&[("LOG_FORMAT", "JSON"), ("DEBUG", "yes")]));
        assert!(config.json);
        assert_eq!(config.level(), "debug");
    }
}
