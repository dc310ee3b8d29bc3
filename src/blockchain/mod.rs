//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Credentials (signing key, private key, RPC URL)
//!     → wallet.rs (key parsing, address derivation, message signing)
//!     → client.rs (node connection, one probe call)
//!     → session.rs (the bound handle used by the relay submitter)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data

pub mod client;
pub mod session;
pub mod types;
pub mod wallet;

pub use client::BlockchainClient;
pub use session::Session;
pub use types::{BlockchainError, BlockchainResult, ChainId, KeyRole};
pub use wallet::Wallet;
