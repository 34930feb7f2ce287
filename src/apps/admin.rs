//! Student admin panel.
//!
//! Home is bundled; the CRUD pages and the not-found page are fetched on
//! first visit. Unknown paths render the not-found page instead of
//! redirecting.

use std::sync::Arc;

use maud::html;

use crate::apps::pages::{NotFound, Page};
use crate::config::RouteConfig;
use crate::view::{LoadError, View, ViewRegistry};

const STUDENT_FIELDS: &[&str] = &["name", "passwd", "birthday", "sex", "phone", "email", "addr", "education"];

pub const TITLE: &str = "Student admin";

/// UI component library stylesheet.
pub const STYLESHEET: &str = "element-plus/dist/index.css";

/// Views fetched on demand, keyed by id.
pub const LAZY_VIEWS: &[&str] = &["GetUser", "DelUser", "InsUser", "EdiUser", "NotFound"];

/// Build the view module for `id`. Stands in for fetching a code chunk.
pub fn load_module(id: &str) -> Result<Arc<dyn View>, LoadError> {
    let view: Arc<dyn View> = match id {
        "GetUser" => Arc::new(Page::table(
            "GetUser",
            "Students",
            "/api/GetUser",
            &["id", "name", "sex", "birthday", "phone", "email"],
        )),
        "DelUser" => Arc::new(Page::form("DelUser", "Delete student", "/api/DelUser", &["id"])),
        "InsUser" => Arc::new(Page::form("InsUser", "Add student", "/api/InsUser", STUDENT_FIELDS)),
        "EdiUser" => Arc::new(Page::form("EdiUser", "Edit student", "/api/EdiUser", STUDENT_FIELDS)),
        "NotFound" => Arc::new(NotFound),
        other => {
            return Err(LoadError::Failed {
                view: other.to_string(),
                reason: "no such module".to_string(),
            });
        }
    };
    Ok(view)
}

pub fn views() -> ViewRegistry {
    LAZY_VIEWS.iter().fold(
        ViewRegistry::new().with_static(Page::new("Home", TITLE, html! { p { "Pick an action." } })),
        |registry, &id| registry.with_lazy(id, move || async move { load_module(id) }),
    )
}

pub fn routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::view("/", Some("Home"), "Home"),
        RouteConfig::view("/GetUser", Some("GetUser"), "GetUser"),
        RouteConfig::view("/DelUser", Some("DelUser"), "DelUser"),
        RouteConfig::view("/InsUser", Some("InsUser"), "InsUser"),
        RouteConfig::view("/EdiUser", Some("EdiUser"), "EdiUser"),
        RouteConfig::view("/:pathMatch(.*)*", None, "NotFound"),
    ]
}
