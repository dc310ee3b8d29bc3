//! Configuration schema definitions.
//!
//! Credentials come from the environment only. The bundle may come from a
//! TOML file; every other field has a default so a run needs nothing but the
//! three environment variables.

use serde::{Deserialize, Serialize};

use crate::observability::logging::LogFormat;

/// Relay used when no `--relay-url` is given.
pub const DEFAULT_RELAY_URL: &str = "https://relay.flashbots.net";

/// Base state for bundle simulation.
pub const DEFAULT_STATE_BLOCK: &str = "latest";

/// Target block of the built-in bundle (`0xca99fa`).
pub const DEFAULT_TARGET_BLOCK: u64 = 13_281_018;

/// The two pre-signed EIP-1559 transfers of the built-in bundle.
pub const DEFAULT_BUNDLE_TXS: [&str; 2] = [
    "0x02f87201028512a05f200085174876e8008252089425df6da2f4e5c178ddff45038378c0b08e0bce54865af3107a400080c001a04e7f16419eb1185c95994a06898c28ff5e6e2c5d3787f1b880c58ec67cb4a8d2a05db305b0a34d012d21dceee76bfa0e32679077697715c80fe69103177a4e0b1c",
    "0x02f868010380808252089425df6da2f4e5c178ddff45038378c0b08e0bce54865af3107a400080c001a028af5ce74851a2d7f00692a8d5f95a14e79026adef87093edd052abb38228865a039d90a2df176d0d1193dcb5d2e50ca9525ba974a80b6dbdf64d0f75c107a44b5",
];

/// Root configuration for a submission run.
#[derive(Debug, Clone)]
pub struct SubmitterConfig {
    /// Keys and node endpoint read from the environment.
    pub credentials: Credentials,

    /// Relay endpoint settings.
    pub relay: RelayConfig,

    /// The bundle to simulate and send.
    pub bundle: Bundle,

    /// Log output settings.
    pub observability: ObservabilityConfig,
}

/// Secrets and endpoint supplied through the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Hex-encoded key that authenticates requests to the relay.
    pub signing_key: String,

    /// Hex-encoded key of the on-chain identity.
    pub private_key: String,

    /// Node JSON-RPC URL.
    pub provider_url: String,
}

// Keys must never reach a log line.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("signing_key", &"<redacted>")
            .field("private_key", &"<redacted>")
            .field("provider_url", &self.provider_url)
            .finish()
    }
}

/// Relay endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Relay base URL receiving the JSON-RPC calls.
    pub url: String,

    /// Stop after a successful simulation.
    pub simulate_only: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RELAY_URL.to_string(),
            simulate_only: false,
        }
    }
}

/// An ordered list of raw signed transactions targeting one block.
///
/// Transaction strings are opaque: they are forwarded to the relay exactly as
/// given and never decoded here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Bundle {
    /// Raw, pre-signed, hex-encoded transactions in execution order.
    pub txs: Vec<String>,

    /// Block the bundle targets.
    pub block_number: u64,

    /// Base state for simulation (a tag such as `latest` or a hex number).
    #[serde(default = "default_state_block")]
    pub state_block_number: String,

    /// Earliest timestamp the bundle is valid for.
    #[serde(default)]
    pub min_timestamp: Option<u64>,

    /// Latest timestamp the bundle is valid for.
    #[serde(default)]
    pub max_timestamp: Option<u64>,

    /// Hashes of transactions allowed to revert without failing the bundle.
    #[serde(default)]
    pub reverting_tx_hashes: Vec<String>,
}

fn default_state_block() -> String {
    DEFAULT_STATE_BLOCK.to_string()
}

impl Default for Bundle {
    fn default() -> Self {
        Self {
            txs: DEFAULT_BUNDLE_TXS.iter().map(|tx| tx.to_string()).collect(),
            block_number: DEFAULT_TARGET_BLOCK,
            state_block_number: default_state_block(),
            min_timestamp: None,
            max_timestamp: None,
            reverting_tx_hashes: Vec::new(),
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_format: LogFormat,
}
