//! Word variant. Saved as a `DOCX FORMAT` tag line plus content.

use crate::document::{Document, DocumentFormat};

const HEADER: &str = "DOCX FORMAT\n";

pub struct WordDocument {
    content: String,
}

impl WordDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Document for WordDocument {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Word
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn display(&self) -> String {
        format!("[WORD]\n{}", self.content)
    }

    fn serialize(&self) -> String {
        format!("{}{}", HEADER, self.content)
    }
}
