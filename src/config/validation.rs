//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Relay URL must be an absolute http(s) URL
//! - Bundle must carry at least one non-empty transaction
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Transaction encodings are not checked; the relay owns that
//! - Runs before any key is parsed or endpoint dialed

use thiserror::Error;
use url::Url;

use crate::config::schema::{Bundle, RelayConfig, SubmitterConfig};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("relay url '{url}' is invalid: {reason}")]
    InvalidRelayUrl { url: String, reason: String },

    #[error("bundle contains no transactions")]
    EmptyBundle,

    #[error("bundle transaction {index} is empty")]
    EmptyTransaction { index: usize },

    #[error("state block number must not be empty")]
    EmptyStateBlock,

    #[error("min_timestamp {min} is after max_timestamp {max}")]
    InvertedTimestamps { min: u64, max: u64 },
}

/// Validate a fully assembled configuration.
pub fn validate_config(config: &SubmitterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    validate_relay(&config.relay, &mut errors);
    validate_bundle(&config.bundle, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_relay(relay: &RelayConfig, errors: &mut Vec<ValidationError>) {
    match Url::parse(&relay.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::InvalidRelayUrl {
            url: relay.url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidRelayUrl {
            url: relay.url.clone(),
            reason: e.to_string(),
        }),
    }
}

pub(crate) fn validate_bundle(bundle: &Bundle, errors: &mut Vec<ValidationError>) {
    if bundle.txs.is_empty() {
        errors.push(ValidationError::EmptyBundle);
    }
    for (index, tx) in bundle.txs.iter().enumerate() {
        if tx.trim().is_empty() {
            errors.push(ValidationError::EmptyTransaction { index });
        }
    }
    if bundle.state_block_number.trim().is_empty() {
        errors.push(ValidationError::EmptyStateBlock);
    }
    if let (Some(min), Some(max)) = (bundle.min_timestamp, bundle.max_timestamp) {
        if min > max {
            errors.push(ValidationError::InvertedTimestamps { min, max });
        }
    }
}
