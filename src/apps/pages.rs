//! Static page views shared by the built-in applications.

use maud::{html, Markup};

use crate::routing::ResolvedRoute;
use crate::view::View;

/// A page with a heading and a fixed body.
#[derive(Debug, Clone)]
pub struct Page {
    id: &'static str,
    title: &'static str,
    body: Markup,
}

impl Page {
    pub fn new(id: &'static str, title: &'static str, body: Markup) -> Self {
        Self { id, title, body }
    }

    /// A page listing `columns` of rows fetched from `source`.
    pub fn table(id: &'static str, title: &'static str, source: &str, columns: &[&str]) -> Self {
        Self::new(
            id,
            title,
            html! {
                table data-source=(source) {
                    tr {
                        @for column in columns {
                            th { (column) }
                        }
                    }
                }
            },
        )
    }

    /// A form posting `fields` to `action`.
    pub fn form(id: &'static str, title: &'static str, action: &str, fields: &[&str]) -> Self {
        Self::new(
            id,
            title,
            html! {
                form action=(action) {
                    @for field in fields {
                        label { (field) input name=(field); }
                    }
                }
            },
        )
    }
}

impl View for Page {
    fn id(&self) -> &str {
        self.id
    }

    fn render(&self, _route: &ResolvedRoute) -> String {
        html! {
            h1 { (self.title) }
            (self.body)
        }
        .into_string()
    }
}

/// Fallback page echoing the path nobody handled.
#[derive(Debug, Clone, Default)]
pub struct NotFound;

impl View for NotFound {
    fn id(&self) -> &str {
        "NotFound"
    }

    fn render(&self, route: &ResolvedRoute) -> String {
        html! {
            h1 { "404" }
            p { "No page at " code { (route.path) } "." }
        }
        .into_string()
    }
}
