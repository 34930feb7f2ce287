//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → stderr via tracing-subscriber
//!     → whichever `metrics` recorder the host installs (none by default)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (route, view, outcome)
//! - Metrics are cheap and no-ops without a recorder

pub mod logging;
pub mod metrics;
