//! Relay submission subsystem.
//!
//! # Data Flow
//! ```text
//! Bundle (txs, target block, state block)
//!     → types.rs (JSON-RPC params, hex block encoding)
//!     → client.rs (signed HTTP POST to the relay)
//!     → error.rs (rejection vs transport vs decode)
//!     → submitter.rs (simulate, then send)
//! ```
//!
//! # Design Decisions
//! - The relay sits behind `BundleRelay` so the submitter runs without network
//! - No retries: every error ends the run

pub mod client;
pub mod error;
pub mod submitter;
pub mod types;

pub use client::{BundleRelay, FlashbotsRelay};
pub use error::{RelayError, RelayResult};
pub use submitter::{BundleSubmitter, Stage, SubmissionReport, SubmitError};
pub use types::{Bundle, CallBundleResult, SendBundleResult};
