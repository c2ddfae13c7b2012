//! Verigate daemon — entry point for the verification gateway.

mod config;
mod shutdown;

use clap::Parser;
use config::GatewayConfig;
use shutdown::ShutdownController;
use std::path::PathBuf;
use std::sync::Arc;
use verigate_rpc::RpcServer;
use verigate_session::SessionResolver;
use verigate_store::MongoSessionStore;

#[derive(Parser)]
#[command(name = "verigate-daemon", about = "Verigate verification gateway daemon")]
struct Cli {
    /// Port for the session lookup API.
    #[arg(long, env = "VERIGATE_RPC_PORT")]
    rpc_port: Option<u16>,

    /// MongoDB connection string for the session store.
    #[arg(long, env = "VERIGATE_MONGO_URI")]
    mongo_uri: Option<String>,

    /// Callback endpoint for the proof capability.
    #[arg(long, env = "VERIGATE_PROOF_ENDPOINT")]
    proof_endpoint: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "VERIGATE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "VERIGATE_LOG_FORMAT")]
    log_format: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Serve the lookup API.
    Run,
    /// Print the effective configuration and exit.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config: Option<GatewayConfig> = match cli.config {
        Some(ref path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;
            Some(GatewayConfig::from_toml_str(&contents)?)
        }
        None => None,
    };

    let mut config = file_config.unwrap_or_default();
    if let Some(port) = cli.rpc_port {
        config.rpc_port = port;
    }
    if let Some(uri) = cli.mongo_uri {
        config.mongo.uri = uri;
    }
    if let Some(endpoint) = cli.proof_endpoint {
        config.proof.endpoint = endpoint;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    match cli.command {
        Command::CheckConfig => {
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        Command::Run => {
            verigate_utils::init_tracing(&config.log_level, config.json_logs());
            tracing::info!(
                rpc_port = config.rpc_port,
                database = %config.mongo.database,
                "starting verigate gateway"
            );
            if config.proof.endpoint.is_empty() {
                // Not fatal at startup: request construction will surface it
                // as a build error per session.
                tracing::warn!("no proof endpoint configured");
            }

            let store = Arc::new(MongoSessionStore::new(config.mongo.clone()));
            let resolver = Arc::new(SessionResolver::new(store));
            let server = RpcServer::new(config.rpc_port, resolver);

            let controller = ShutdownController::new();
            let mut shutdown_rx = controller.subscribe();
            tokio::spawn(async move {
                controller.wait_for_signal().await;
            });

            server
                .start_with_shutdown(async move {
                    let _ = shutdown_rx.recv().await;
                })
                .await?;

            tracing::info!("verigate daemon exited cleanly");
            Ok(())
        }
    }
}
