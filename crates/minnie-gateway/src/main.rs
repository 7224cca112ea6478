//! Minniemissions Gateway - fan engagement over HTTP

use clap::{Parser, Subcommand};
use minnie_core::GatewayConfig;
use minnie_domain::Store;
use minnie_gateway::{start_gateway, AppState};
use minnie_oracle::{CannedOracle, FandomOracle, OpenAiOracle};
use minnie_wallet::{SessionManager, SimulatedLedger};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "minnie-gateway",
    about = "Minniemissions - missions, meetups, and vibe points"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway
    Serve {
        #[arg(short, long, default_value = "8787")]
        port: u16,
        #[arg(short, long, default_value = "local")]
        bind: String,
        /// Public origin embedded in referral QR payloads
        #[arg(long)]
        origin: Option<String>,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve {
        port: 8787,
        bind: "local".to_string(),
        origin: None,
    });

    match command {
        Commands::Serve { port, bind, origin } => {
            let bind = bind
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            let config = GatewayConfig {
                port,
                bind,
                origin: origin.unwrap_or_else(|| format!("http://localhost:{}", port)),
            };

            let oracle: Arc<dyn FandomOracle> = match std::env::var("OPENAI_API_KEY") {
                Ok(key) if !key.is_empty() => {
                    let mut oracle = OpenAiOracle::new(key);
                    if let Ok(url) = std::env::var("OPENAI_API_URL") {
                        info!("using custom oracle URL: {}", url);
                        oracle = oracle.with_base_url(url);
                    }
                    Arc::new(oracle)
                }
                _ => {
                    info!("OPENAI_API_KEY not set, answering from the offline knowledge base");
                    Arc::new(CannedOracle::new().with_latency(Duration::from_millis(1500)))
                }
            };

            let state = Arc::new(AppState {
                store: Arc::new(Store::seeded()),
                sessions: Arc::new(SessionManager::new(Arc::new(SimulatedLedger::new()))),
                oracle,
                config,
            });
            start_gateway(state).await
        }
        Commands::Version => {
            println!("minnie-gateway {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
