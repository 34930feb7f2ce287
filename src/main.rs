//! view-router CLI
//!
//! Resolves navigation paths against the site or student admin route table,
//! lists tables, and drives navigations that render to stdout.
//!
//! ```text
//! view-router --app admin resolve /GetUser /nope
//! view-router --config config/site.toml routes
//! view-router --app admin navigate / /InsUser
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use view_router::app::StdoutSurface;
use view_router::config::{load_config, Preset, RouterConfig};
use view_router::lifecycle::{apply_preset, bootstrap, build_router};
use view_router::observability::logging::init_logging;
use view_router::routing::{RedirectRef, ResolvedRoute, Target};

#[derive(Parser)]
#[command(name = "view-router")]
#[command(about = "Resolve and render client-side routes", long_about = None)]
struct Cli {
    /// Built-in application. Overrides the config file's preset unless the
    /// file brings its own routes for another preset.
    #[arg(short, long, value_enum)]
    app: Option<Preset>,

    /// TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve paths and print the matched view
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,

        /// Print one JSON object per path
        #[arg(long)]
        json: bool,
    },
    /// List the route table in match order
    Routes,
    /// Navigate through paths, rendering each page to stdout
    Navigate {
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    if let Some(preset) = cli.app {
        apply_preset(&mut config, preset)?;
    }
    init_logging(&config.observability);

    tracing::debug!(preset = ?config.app.preset, "view-router starting");

    match cli.command {
        Commands::Resolve { paths, json } => {
            let router = build_router(&config)?;
            for path in &paths {
                let route = router.resolve(path);
                if json {
                    println!("{}", serde_json::to_string(&route)?);
                } else {
                    println!("{}", describe(path, &route));
                }
            }
        }
        Commands::Routes => {
            let router = build_router(&config)?;
            for route in router.routes() {
                let target = match route.target() {
                    Target::View(view) if view.is_lazy() => format!("view {} (lazy)", view.id()),
                    Target::View(view) => format!("view {}", view.id()),
                    Target::Redirect(RedirectRef::Path(path)) => format!("redirect {}", path),
                    Target::Redirect(RedirectRef::Name(name)) => format!("redirect name {}", name),
                };
                println!(
                    "{:<20} {:<10} {}",
                    route.pattern().to_string(),
                    route.name().unwrap_or("-"),
                    target
                );
            }
        }
        Commands::Navigate { paths } => {
            let mut app = bootstrap(&config, StdoutSurface)?;
            for path in &paths {
                app.navigate(path).await?;
            }
            tracing::info!(entries = app.history().len(), "Navigation complete");
        }
    }

    Ok(())
}

fn describe(requested: &str, route: &ResolvedRoute) -> String {
    let mut line = format!("{} -> {}", requested, route.view.id());
    if route.view.is_lazy() {
        line.push_str(" (lazy)");
    }
    if route.redirected_from.is_some() {
        line.push_str(&format!(" via redirect to {}", route.path));
    }
    line
}
