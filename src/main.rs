//! bundle-relay
//!
//! Simulates a bundle of pre-signed transactions on a private relay, then
//! sends it.
//!
//! # Pipeline
//!
//! ```text
//!  environment ──▶ config ──▶ session ──▶ relay submitter
//!  (.env, vars)    loader     keys +      simulate ──▶ send
//!                             node dial
//! ```
//!
//! # Exit Behaviour
//! - Missing credentials or a bad bundle file: exit 1, nothing dialed
//! - Initialization or relay failure: message printed, exit 0

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Instrument;
use uuid::Uuid;

use bundle_relay::blockchain::Session;
use bundle_relay::config::loader::{load_config, load_dotenv, ConfigOverrides};
use bundle_relay::config::schema::{ObservabilityConfig, DEFAULT_RELAY_URL};
use bundle_relay::observability::{logging, LogFormat};
use bundle_relay::relay::{BundleSubmitter, FlashbotsRelay};

#[derive(Parser)]
#[command(name = "bundle-relay")]
#[command(about = "Simulate and send a transaction bundle to a private relay", long_about = None)]
struct Cli {
    /// Dotenv file loaded before reading the environment
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// TOML file describing the bundle (defaults to the built-in bundle)
    #[arg(short, long)]
    bundle: Option<PathBuf>,

    /// Override the target block number
    #[arg(long)]
    block: Option<u64>,

    /// Override the simulation base state (e.g. "latest")
    #[arg(long)]
    state_block: Option<String>,

    /// Relay endpoint
    #[arg(short, long, default_value = DEFAULT_RELAY_URL)]
    relay_url: String,

    /// Simulate only; do not send
    #[arg(long)]
    simulate_only: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    let run_id = Uuid::new_v4();
    run(cli)
        .instrument(tracing::info_span!("run", %run_id))
        .await
}

async fn run(cli: Cli) -> ExitCode {
    tracing::info!("bundle-relay v{} starting", env!("CARGO_PKG_VERSION"));

    load_dotenv(&cli.env_file);

    let overrides = ConfigOverrides {
        relay_url: Some(cli.relay_url),
        block_number: cli.block,
        state_block_number: cli.state_block,
        simulate_only: cli.simulate_only,
        observability: ObservabilityConfig {
            log_format: cli.log_format,
        },
    };
    let config = match load_config(
        |name| std::env::var(name).ok(),
        cli.bundle.as_deref(),
        overrides,
    ) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Configuration error");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        relay = %config.relay.url,
        txs = config.bundle.txs.len(),
        block = %config.bundle.block_number_hex(),
        "Configuration loaded"
    );

    let session = match Session::connect(&config.credentials).await {
        Ok(session) => session,
        Err(e) => {
            println!("Failed to initialize: {}", e);
            return ExitCode::SUCCESS;
        }
    };

    tracing::info!(
        address = %session.address(),
        signer = %session.signing_key().address(),
        chain_id = session.chain_id().0,
        "Session ready"
    );

    match session.client().get_block_number().await {
        Ok(head) if head >= config.bundle.block_number => tracing::warn!(
            head,
            target = config.bundle.block_number,
            "Target block is not in the future"
        ),
        Ok(head) => tracing::debug!(head, "Chain head"),
        Err(e) => tracing::warn!(error = %e, "Could not read chain head"),
    }

    let relay = match FlashbotsRelay::new(&config.relay.url, session.signing_key().clone()) {
        Ok(relay) => relay,
        Err(e) => {
            println!("{}", e.render());
            return ExitCode::SUCCESS;
        }
    };

    let submitter = BundleSubmitter::new(relay).simulate_only(config.relay.simulate_only);
    let outcome = {
        let mut stdout = io::stdout().lock();
        submitter.submit(&config.bundle, &mut stdout).await
    };
    if let Err(e) = outcome {
        tracing::debug!(stage = %e.stage, "Submission aborted");
        println!("{}", e.source.render());
    }

    ExitCode::SUCCESS
}
