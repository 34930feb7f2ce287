//! View references handed out by the router.
//!
//! # Data Flow
//! ```text
//! ViewRegistry (built at startup)
//!     → RouteTable looks up ViewRef by id
//!     → Router returns ViewRef inside ResolvedRoute
//!     → Application calls ViewRef::load (lazy.rs caches)
//!     → View::render produces the document body
//! ```
//!
//! # Design Decisions
//! - The router never loads or renders; it only returns the reference
//! - One `LazyView` per id, so every route sharing an id shares its cache;
//!   `RouteTable::new` rejects tables that break this
//! - Static references are equal when their ids match, lazy ones when they
//!   share a cache

pub mod lazy;
pub mod registry;

use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

use crate::routing::ResolvedRoute;

pub use lazy::{LazyView, LoadFuture, Loader};
pub use registry::ViewRegistry;

/// A renderable view.
pub trait View: Send + Sync + fmt::Debug {
    /// Stable identifier, unique within a registry.
    fn id(&self) -> &str;

    /// Render the view body for a resolved route.
    fn render(&self, route: &ResolvedRoute) -> String;
}

/// Errors from fetching a lazily loaded view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The loader itself failed.
    #[error("failed to load view `{view}`: {reason}")]
    Failed { view: String, reason: String },

    /// The loader produced a different view than the one registered.
    #[error("loader for `{expected}` produced view `{actual}`")]
    Mismatch { expected: String, actual: String },
}

/// Reference to the view a route renders.
#[derive(Clone)]
pub enum ViewRef {
    /// Available immediately.
    Static(Arc<dyn View>),

    /// Fetched on first use.
    Lazy(LazyView),
}

impl ViewRef {
    pub fn from_view(view: impl View + 'static) -> Self {
        ViewRef::Static(Arc::new(view))
    }

    pub fn id(&self) -> &str {
        match self {
            ViewRef::Static(view) => view.id(),
            ViewRef::Lazy(lazy) => lazy.id(),
        }
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, ViewRef::Lazy(_))
    }

    pub fn is_loaded(&self) -> bool {
        match self {
            ViewRef::Static(_) => true,
            ViewRef::Lazy(lazy) => lazy.is_loaded(),
        }
    }

    /// Get the view, loading it first if it is lazy.
    pub async fn load(&self) -> Result<Arc<dyn View>, LoadError> {
        match self {
            ViewRef::Static(view) => Ok(view.clone()),
            ViewRef::Lazy(lazy) => lazy.load().await,
        }
    }
}

impl PartialEq for ViewRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ViewRef::Static(a), ViewRef::Static(b)) => a.id() == b.id(),
            (ViewRef::Lazy(a), ViewRef::Lazy(b)) => a.shares_cache(b),
            _ => false,
        }
    }
}

impl Eq for ViewRef {}

impl fmt::Debug for ViewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewRef::Static(view) => f.debug_tuple("Static").field(&view.id()).finish(),
            ViewRef::Lazy(lazy) => f.debug_tuple("Lazy").field(lazy).finish(),
        }
    }
}

impl Serialize for ViewRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ViewRef", 2)?;
        state.serialize_field("id", self.id())?;
        state.serialize_field("lazy", &self.is_lazy())?;
        state.end()
    }
}
