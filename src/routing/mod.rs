//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation target ("/path?query#hash")
//!     → location.rs (split path, query, hash)
//!     → router.rs (first matching route)
//!     → matcher.rs (literal or catch-all pattern)
//!     → follow redirect plan
//!     → Return: ResolvedRoute (always; the catch-all makes this total)
//!
//! Route Compilation (at startup):
//!     RouteConfig[] + ViewRegistry
//!     → table.rs (check names, catch-all placement, redirect names)
//!     → router.rs (walk redirect chains, reject cycles)
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex: literal equality plus a single catch-all form
//! - Deterministic: same input always resolves to the same route
//! - First match wins (declared order)

pub mod location;
pub mod matcher;
pub mod router;
pub mod table;
pub mod types;

pub use location::Location;
pub use matcher::{MatchOptions, Pattern};
pub use router::{ResolvedRoute, RouteMatch, Router};
pub use table::{RedirectRef, RouteDefinition, RouteTable, Target};
pub use types::{ParamValue, RouteError, RouteParams, RouteResult};
