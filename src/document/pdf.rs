//! PDF variant. The saved file is a `%PDF-1.4` tag line followed by the raw
//! content, not a real PDF.

use crate::document::{Document, DocumentFormat};

const HEADER: &str = "%PDF-1.4\n";

pub struct PdfDocument {
    content: String,
}

impl PdfDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Document for PdfDocument {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn display(&self) -> String {
        format!("[PDF]\n{}", self.content)
    }

    fn serialize(&self) -> String {
        format!("{}{}", HEADER, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_tagged() {
        let doc = PdfDocument::new("Engine: V6\n");
        assert_eq!(doc.display(), "[PDF]\nEngine: V6\n");
    }

    #[test]
    fn serialized_with_header() {
        let doc = PdfDocument::new("Engine: V6\n");
        assert_eq!(doc.serialize(), "%PDF-1.4\nEngine: V6\n");
    }

    #[test]
    fn empty_content() {
        let doc = PdfDocument::new("");
        assert_eq!(doc.display(), "[PDF]\n");
        assert_eq!(doc.serialize(), "%PDF-1.4\n");
    }
}
