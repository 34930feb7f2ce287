//! Client-side route resolution for single-page applications.
//!
//! A [`Router`] maps a navigation path to the view it should render, using
//! an ordered table that always ends in a catch-all. Views can be lazily
//! loaded; [`app::Application`] drives navigation, history and rendering.

pub mod app;
pub mod apps;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod view;

pub use config::schema::RouterConfig;
pub use routing::{ResolvedRoute, Router};
pub use view::{View, ViewRef};
