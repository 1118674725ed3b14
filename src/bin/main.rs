use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;
use vaultix_mcp::config::{DEFAULT_BASE_URL, resolve_api_key};
use vaultix_mcp::{ToolRegistry, VaultixConfig, create_server};

// rmcp imports for MCP stdio server mode
use rmcp::service::ServiceExt;
use rmcp::transport::stdio;

#[derive(Parser)]
#[command(name = "vaultix-mcp")]
#[command(about = "MCP server for the Vaultix payment API")]
#[command(version)]
struct Cli {
    /// Vaultix secret key (falls back to VAULTIX_SECRET_KEY)
    #[arg(long, env = "VAULTIX_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,
    /// Base URL of the Vaultix API
    #[arg(long, env = "VAULTIX_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,
    /// Per-request timeout in seconds (transport default when unset)
    #[arg(long, env = "VAULTIX_TIMEOUT_SECS", global = true)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as an MCP stdio server (default; for use in mcp.json)
    McpStdio,
    /// Run as an MCP HTTP server
    McpHttp {
        /// Bind address, e.g. 0.0.0.0:3943
        #[arg(long, default_value = "127.0.0.1:3943")]
        bind: String,
    },
    /// Print the tool catalog as JSON and exit
    ListTools,
}

impl Cli {
    fn vaultix_config(&self) -> Result<VaultixConfig> {
        let api_key = resolve_api_key(self.api_key.clone()).unwrap_or_default();
        VaultixConfig::new(
            api_key,
            self.base_url.clone(),
            self.timeout_secs.map(Duration::from_secs),
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout belongs to the MCP stdio transport, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("vaultix_mcp=info".parse()?)
                .add_directive("rmcp=warn".parse()?),
        )
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::ListTools) => {
            let tools = ToolRegistry::new().list_tools();
            println!("{}", serde_json::to_string_pretty(&tools)?);
        }
        Some(Commands::McpHttp { ref bind }) => {
            let config = cli.vaultix_config()?;
            let server = create_server(&config)?;

            info!("Starting Vaultix MCP HTTP server (rmcp) on {}", bind);
            vaultix_mcp::server::start_mcp_http(server, bind).await?;
        }
        Some(Commands::McpStdio) | None => {
            let config = cli.vaultix_config()?;
            let server = create_server(&config)?;

            info!("Starting Vaultix MCP stdio server (rmcp)");
            let service = server
                .serve(stdio())
                .await
                .inspect_err(|e| tracing::error!("serving error: {:?}", e))?;

            // Block until the MCP session ends.
            service.waiting().await?;
            info!("Vaultix MCP stdio server session ended");
        }
    }

    Ok(())
}
