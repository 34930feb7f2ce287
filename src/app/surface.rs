//! Render surfaces: where composed documents end up.

use std::io::Write;

use maud::{html, PreEscaped, DOCTYPE};

/// A composed page ready to be shown at a mount point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub mount: String,
    pub title: String,
    pub stylesheets: Vec<String>,
    pub body: String,
}

impl Document {
    /// Full HTML page. Title, stylesheet hrefs and mount id are escaped;
    /// `body` is view output and goes in as-is.
    pub fn to_html(&self) -> String {
        html! {
            (DOCTYPE)
            html {
                head {
                    title { (self.title) }
                    @for href in &self.stylesheets {
                        link rel="stylesheet" href=(href);
                    }
                }
                body {
                    div id=(self.mount.trim_start_matches('#')) {
                        (PreEscaped(&self.body))
                    }
                }
            }
        }
        .into_string()
    }
}

/// Receives every document the application renders.
pub trait RenderSurface: Send {
    fn render(&mut self, document: Document);
}

/// Keeps rendered documents in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    documents: Vec<Document>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Document> {
        self.documents.last()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }
}

impl RenderSurface for MemorySurface {
    fn render(&mut self, document: Document) {
        self.documents.push(document);
    }
}

/// Writes each document's HTML to stdout.
#[derive(Debug, Default)]
pub struct StdoutSurface;

impl RenderSurface for StdoutSurface {
    fn render(&mut self, document: Document) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", document.to_html()) {
            tracing::warn!(error = %e, "Failed to write document");
        }
    }
}
