//! Generic site: a home page, and every other path redirects home.

use maud::html;

use crate::apps::pages::Page;
use crate::config::RouteConfig;
use crate::view::ViewRegistry;

pub const TITLE: &str = "Home";

pub fn views() -> ViewRegistry {
    ViewRegistry::new().with_static(Page::new("Home", TITLE, html! { p { "Welcome." } }))
}

pub fn routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::view("/", Some("Home"), "Home"),
        RouteConfig::redirect("/:pathMatch(.*)*", "/"),
    ]
}
