//! Memoizing loader for lazily fetched views.
//!
//! A `LazyView` wraps a loader capability. The first `load` runs the loader;
//! concurrent callers wait on the same initialization and every later call
//! gets the cached view back. A failed load leaves the cache empty.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt};
use tokio::sync::OnceCell;

use crate::observability::metrics;
use crate::view::{LoadError, View};

/// Future returned by a view loader.
pub type LoadFuture = BoxFuture<'static, Result<Arc<dyn View>, LoadError>>;

/// Zero-argument loader capability.
pub type Loader = Arc<dyn Fn() -> LoadFuture + Send + Sync>;

/// A view fetched on first use.
#[derive(Clone)]
pub struct LazyView {
    id: Arc<str>,
    loader: Loader,
    cell: Arc<OnceCell<Arc<dyn View>>>,
}

impl LazyView {
    pub fn new<F, Fut>(id: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<dyn View>, LoadError>> + Send + 'static,
    {
        Self {
            id: Arc::from(id.into()),
            loader: Arc::new(move || loader().boxed()),
            cell: Arc::new(OnceCell::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether `other` is a clone of this view, sharing its cache.
    pub fn shares_cache(&self, other: &LazyView) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }

    /// Whether the view has been loaded and cached.
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Load the view, running the loader only if nothing is cached yet.
    pub async fn load(&self) -> Result<Arc<dyn View>, LoadError> {
        if let Some(view) = self.cell.get() {
            metrics::record_view_load(&self.id, "cached");
            return Ok(view.clone());
        }

        let view = self
            .cell
            .get_or_try_init(|| async {
                tracing::debug!(view = %self.id, "Loading view module");
                match (self.loader)().await {
                    Ok(view) if view.id() != &*self.id => {
                        metrics::record_view_load(&self.id, "error");
                        Err(LoadError::Mismatch {
                            expected: self.id.to_string(),
                            actual: view.id().to_string(),
                        })
                    }
                    Ok(view) => {
                        metrics::record_view_load(&self.id, "loaded");
                        Ok(view)
                    }
                    Err(e) => {
                        tracing::warn!(view = %self.id, error = %e, "View module failed to load");
                        metrics::record_view_load(&self.id, "error");
                        Err(e)
                    }
                }
            })
            .await?;

        Ok(view.clone())
    }
}

impl fmt::Debug for LazyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("id", &self.id)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
