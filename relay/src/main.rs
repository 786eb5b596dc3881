use sra_relay::{Relay, RelayConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        r#"SRA Relay - 0x Standard Relayer API (v3) order relay

USAGE:
    sra-relay [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --network <NAME>    Network preset: ganache (default), kovan, ropsten, rinkeby
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOST                Server host (default: 0.0.0.0)
    PORT                Server port (default: 3001)
    CHAIN_ID            Chain id accepted by the relay
    VALIDATOR_URL       Order validation service endpoint
    EVENT_FEED_URL      WebSocket feed of fill/cancel events
    RUST_LOG            Log level filter

EXAMPLES:
    # Run against a local ganache snapshot
    sra-relay

    # Run with config file
    sra-relay --config relay.json

    # Kovan with an external validator
    VALIDATOR_URL=http://localhost:4000/validate sra-relay --network kovan
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sra_relay=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut network: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            "--network" | "-n" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --network requires a name argument");
                    std::process::exit(1);
                }
                network = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match (&config_path, &network) {
        (Some(path), _) => {
            tracing::info!("Loading configuration from: {}", path);
            RelayConfig::from_file(path)?
        }
        (None, Some(name)) => RelayConfig::for_network(name)?,
        (None, None) => {
            tracing::info!("Using default configuration");
            RelayConfig::default()
        }
    };

    // An explicit --network wins over the file's network section
    if let (Some(_), Some(name)) = (&config_path, &network) {
        config.network = RelayConfig::for_network(name)?.network;
    }
    config.apply_env()?;

    tracing::info!("Starting SRA relay");
    tracing::info!(
        "REST API: http://{}:{}/v3/",
        config.server.host,
        config.server.port
    );
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /v3/orderbook?baseAssetData=..&quoteAssetData=..&chainId=..");
    tracing::info!("  POST /v3/order_config?chainId=..");
    tracing::info!("  POST /v3/order?chainId=..");
    tracing::info!("  GET  /v3/order/{{orderHash}}?chainId=..");

    Relay::new(config)?.run().await
}
