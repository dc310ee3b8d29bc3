//! Two-step bundle submission: simulate, then send.
//!
//! ```text
//! Simulate ──ok──▶ print ──▶ Send ──ok──▶ print ──▶ done
//!    │                        │
//!    └──err──▶ abort          └──err──▶ abort
//! ```
//!
//! A failed simulation never reaches the send step.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::relay::client::BundleRelay;
use crate::relay::error::RelayError;
use crate::relay::types::{Bundle, CallBundleResult, SendBundleResult};

/// Which relay call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Simulate,
    Send,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Simulate => f.write_str("simulate"),
            Stage::Send => f.write_str("send"),
        }
    }
}

/// A submission that stopped at `stage`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{stage} failed: {source}")]
pub struct SubmitError {
    pub stage: Stage,
    #[source]
    pub source: RelayError,
}

/// Results of a completed submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReport {
    pub simulation: CallBundleResult,
    /// `None` when the run was simulation-only.
    pub sent: Option<SendBundleResult>,
}

/// Drives one bundle through a relay.
#[derive(Debug, Clone)]
pub struct BundleSubmitter<R> {
    relay: R,
    simulate_only: bool,
}

impl<R: BundleRelay> BundleSubmitter<R> {
    pub fn new(relay: R) -> Self {
        Self {
            relay,
            simulate_only: false,
        }
    }

    /// Stop after a successful simulation.
    pub fn simulate_only(mut self, simulate_only: bool) -> Self {
        self.simulate_only = simulate_only;
        self
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    /// Simulate `bundle`, print the result to `out`, then send the same
    /// bundle and print that result.
    pub async fn submit<W: Write>(
        &self,
        bundle: &Bundle,
        out: &mut W,
    ) -> Result<SubmissionReport, SubmitError> {
        tracing::info!(
            txs = bundle.txs.len(),
            block = %bundle.block_number_hex(),
            state_block = %bundle.state_block_number,
            "Simulating bundle"
        );
        let simulation = self
            .relay
            .call_bundle(bundle)
            .await
            .map_err(|source| SubmitError {
                stage: Stage::Simulate,
                source,
            })?;
        print_result(out, &simulation);

        if self.simulate_only {
            tracing::info!(bundle_hash = %simulation.bundle_hash, "Simulation only, not sending");
            return Ok(SubmissionReport {
                simulation,
                sent: None,
            });
        }

        tracing::info!(block = %bundle.block_number_hex(), "Sending bundle");
        let sent = self
            .relay
            .send_bundle(bundle)
            .await
            .map_err(|source| SubmitError {
                stage: Stage::Send,
                source,
            })?;
        print_result(out, &sent);
        tracing::info!(bundle_hash = %sent.bundle_hash, "Bundle sent");

        Ok(SubmissionReport {
            simulation,
            sent: Some(sent),
        })
    }
}

/// Write a result as pretty JSON. Output failures are logged, not fatal.
fn print_result<W: Write, T: Serialize>(out: &mut W, value: &T) {
    let written = serde_json::to_string_pretty(value)
        .map_err(std::io::Error::other)
        .and_then(|json| writeln!(out, "{}", json));
    if let Err(e) = written {
        tracing::warn!(error = %e, "Failed to print relay result");
    }
}
