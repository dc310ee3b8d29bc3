//! Chain-specific types and error definitions.

use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// What a loaded key is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// Authenticates requests to the relay.
    RelaySigning,
    /// The on-chain identity that signed the bundle's transactions.
    Identity,
}

impl std::fmt::Display for KeyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyRole::RelaySigning => f.write_str("signing key"),
            KeyRole::Identity => f.write_str("private key"),
        }
    }
}

/// Errors that can occur while setting up the identity and node connection.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// Node URL could not be parsed.
    #[error("Invalid RPC URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Key string is not a valid hex-encoded secp256k1 private key.
    #[error("Invalid {role} format: {reason}")]
    InvalidKey { role: KeyRole, reason: String },

    /// Signing with a loaded key failed.
    #[error("Wallet error: {0}")]
    Wallet(String),
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;
