//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the view registry for the configured preset
//! - Compile the route table (config routes or the preset default)
//! - Compose the application: router, extensions, render surface
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently

use std::sync::Arc;

use thiserror::Error;

use crate::app::{AppError, Application, ApplicationBuilder, NavigationLog, RenderSurface, Stylesheets};
use crate::apps;
use crate::config::{Preset, RouterConfig};
use crate::routing::{RouteError, RouteTable, Router};

/// Errors that abort startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartupError {
    #[error("route table: {0}")]
    Route(#[from] RouteError),

    #[error("application: {0}")]
    App(#[from] AppError),

    /// The config's own route table names views of a different preset.
    #[error("config routes are written for preset {config:?}, cannot run them as {requested:?}")]
    PresetConflict { config: Preset, requested: Preset },
}

/// Switch `config` to `preset`. A config carrying its own routes keeps the
/// preset those routes were written against.
pub fn apply_preset(config: &mut RouterConfig, preset: Preset) -> Result<(), StartupError> {
    if !config.routes.is_empty() && config.app.preset != preset {
        return Err(StartupError::PresetConflict {
            config: config.app.preset,
            requested: preset,
        });
    }
    config.app.preset = preset;
    Ok(())
}

/// Compile the router described by `config`.
pub fn build_router(config: &RouterConfig) -> Result<Router, StartupError> {
    let preset = config.app.preset;
    let views = apps::views(preset);
    let routes = if config.routes.is_empty() {
        apps::routes(preset)
    } else {
        config.routes.clone()
    };

    let table = RouteTable::from_config(&routes, &views)?;
    let router = Router::with_options(table, config.matching)?;

    tracing::info!(
        preset = ?preset,
        routes = router.routes().len(),
        views = views.len(),
        "Router ready"
    );
    Ok(router)
}

/// Build the router and mount the application on `surface`.
pub fn bootstrap<S: RenderSurface>(
    config: &RouterConfig,
    surface: S,
) -> Result<Application<S>, StartupError> {
    let router = Arc::new(build_router(config)?);

    let stylesheets = if config.app.stylesheets.is_empty() {
        apps::stylesheets(config.app.preset)
    } else {
        config.app.stylesheets.clone()
    };

    let title = if config.app.title.is_empty() {
        apps::title(config.app.preset).to_string()
    } else {
        config.app.title.clone()
    };

    let app = ApplicationBuilder::new(router)
        .title(title)
        .extension(Stylesheets::new("ui-components", stylesheets))
        .extension(NavigationLog)
        .mount(&config.app.mount, surface)?;

    Ok(app)
}
