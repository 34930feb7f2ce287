//! View registry.
//!
//! Maps view ids to references. Route tables built from config look their
//! views up here.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use crate::view::{LazyView, LoadError, View, ViewRef};

/// Views available to a route table.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: HashMap<String, ViewRef>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view available at startup.
    pub fn with_static(self, view: impl View + 'static) -> Self {
        self.with(ViewRef::from_view(view))
    }

    /// Register a view fetched on first use.
    pub fn with_lazy<F, Fut>(self, id: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<dyn View>, LoadError>> + Send + 'static,
    {
        self.with(ViewRef::Lazy(LazyView::new(id, loader)))
    }

    /// Register a reference. A later registration for the same id replaces
    /// the earlier one.
    pub fn with(mut self, view: ViewRef) -> Self {
        let id = view.id().to_string();
        if self.views.insert(id.clone(), view).is_some() {
            tracing::warn!(view = %id, "View registered twice, keeping the latest");
        }
        self
    }

    pub fn get(&self, id: &str) -> Option<&ViewRef> {
        self.views.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.views.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
