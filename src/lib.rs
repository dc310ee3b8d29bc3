//! Bundle relay client library.
//!
//! Simulates and submits a bundle of pre-signed transactions to a
//! Flashbots-style relay.

pub mod blockchain;
pub mod config;
pub mod observability;
pub mod relay;

pub use blockchain::Session;
pub use config::SubmitterConfig;
pub use relay::{BundleSubmitter, FlashbotsRelay};
