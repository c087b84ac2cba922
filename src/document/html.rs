//! HTML variant — wraps content in a bare `<html><body>` shell.
//!
//! Unlike the other variants the saved file carries no separate header: it
//! is byte-identical to the preview.

use crate::document::{Document, DocumentFormat};

pub struct HtmlDocument {
    content: String,
}

impl HtmlDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Document for HtmlDocument {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Html
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn display(&self) -> String {
        format!("<html><body>{}</body></html>", self.content)
    }

    fn serialize(&self) -> String {
        self.display()
    }
}
