//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (optional)
//!     → process environment
//!     → loader.rs (credentials, optional bundle TOML, CLI overrides)
//!     → validation.rs (semantic checks)
//!     → SubmitterConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Secrets come only from the environment, never from files on the command line
//! - A missing credential is fatal before any network call
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, ConfigOverrides};
pub use schema::{Bundle, Credentials, RelayConfig, SubmitterConfig};
