//! Key loading and message signing.
//!
//! # Security
//! - Keys arrive only through the environment
//! - Keys are never logged or serialized; only addresses are

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::{Signature, Signer};

use crate::blockchain::types::{BlockchainError, BlockchainResult, KeyRole};

/// A parsed private key together with its derived address.
#[derive(Clone)]
pub struct Wallet {
    /// The underlying signer (private key).
    signer: PrivateKeySigner,
    /// What this key is used for.
    role: KeyRole,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    /// * `role` - What the key is used for, reported in errors and logs
    pub fn from_private_key(private_key_hex: &str, role: KeyRole) -> BlockchainResult<Self> {
        let key_hex = private_key_hex
            .trim()
            .strip_prefix("0x")
            .unwrap_or(private_key_hex.trim());

        let signer = key_hex
            .parse::<PrivateKeySigner>()
            .map_err(|e| BlockchainError::InvalidKey {
                role,
                reason: e.to_string(),
            })?;

        tracing::info!(
            address = %signer.address(),
            role = %role,
            "Key loaded"
        );

        Ok(Self { signer, role })
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub fn role(&self) -> KeyRole {
        self.role
    }

    /// Sign arbitrary message bytes (with Ethereum prefix).
    pub async fn sign_message(&self, message: &[u8]) -> BlockchainResult<Signature> {
        self.signer
            .sign_message(message)
            .await
            .map_err(|e| BlockchainError::Wallet(format!("Message signing failed: {}", e)))
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .field("role", &self.role)
            .finish()
    }
}
