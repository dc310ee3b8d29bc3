//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → one root span per run carrying the run id
//!
//! Consumers:
//!     → stderr (pretty or JSON)
//! ```

pub mod logging;

pub use logging::LogFormat;
