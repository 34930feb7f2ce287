//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Pick preset views → Compile router
//!     → Install extensions → Mount on render surface
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then router, then the application
//! - Fail fast: any startup error is fatal
//! - Nothing is rebuilt after startup

pub mod startup;

pub use startup::{apply_preset, bootstrap, build_router, StartupError};
