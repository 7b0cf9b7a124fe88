//! vpnapi CLI.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vpnapi::{render, Config};

#[derive(Parser, Debug)]
#[command(name = "vpnapi")]
#[command(about = "Look up VPN, proxy, Tor and relay status of an IP address via vpnapi.io")]
#[command(version)]
struct Args {
    /// IP address to look up
    #[arg(required_unless_present = "print_config")]
    ip: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API key (overrides the configuration file)
    #[arg(short = 'k', long, env = "VPNAPI_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Print the response as JSON
    #[arg(long)]
    json: bool,

    /// Log requests and raw responses
    #[arg(short, long)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, default_value = "info")]
    log_level: String,

    /// Print example configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Handle --print-config
    if args.print_config {
        println!("{}", Config::example());
        return Ok(());
    }

    // Initialize logging
    let level = if args.verbose { "debug" } else { args.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => {
            info!(config = %path.display(), "Loading configuration");
            Config::load(path)?
        }
        None => Config::default(),
    };
    if let Some(key) = args.api_key {
        config.api_key = key;
    }
    config.verbose |= args.verbose;
    config.validate()?;

    let client = config.client()?;
    let Some(ip) = args.ip else {
        anyhow::bail!("no IP address given");
    };

    let response = client.query(&ip).await?;

    if response.has_message() {
        warn!(message = %response.message, "vpnapi.io returned a message");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render::response(&response));
    }

    Ok(())
}
