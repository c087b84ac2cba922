//! Document module — trait-based format dispatch.
//!
//! Every variant wraps pre-rendered content and knows how to preview and
//! serialize it. None of them produce real PDF or DOCX structure: `serialize`
//! prepends a tag line to the plain content.

pub mod html;
pub mod pdf;
pub mod word;

use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Word,
    Html,
}

impl DocumentFormat {
    /// Extension used when the caller does not name an output file.
    pub fn file_extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Word => "docx",
            DocumentFormat::Html => "html",
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = Error;

    /// Case-insensitive. The error keeps the caller's spelling.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "word" => Ok(DocumentFormat::Word),
            "html" => Ok(DocumentFormat::Html),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Word => "Word",
            DocumentFormat::Html => "HTML",
        };
        f.write_str(name)
    }
}

/// Capability set shared by every document variant.
pub trait Document {
    fn format(&self) -> DocumentFormat;

    /// The content exactly as it was handed to [`create_document`].
    fn content(&self) -> &str;

    /// Preview string for the console.
    fn display(&self) -> String;

    /// Bytes written by [`save`](Document::save).
    fn serialize(&self) -> String;

    /// Write [`serialize`](Document::serialize) to `path`, creating or
    /// truncating the file.
    fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.serialize()).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(format = %self.format(), path = %path.display(), "document saved");
        Ok(())
    }
}

/// Create a document of the given format around `content`.
pub fn create_document(format: &str, content: impl Into<String>) -> Result<Box<dyn Document>> {
    let format: DocumentFormat = format.parse()?;
    let content = content.into();
    tracing::debug!(%format, bytes = content.len(), "creating document");
    Ok(match format {
        DocumentFormat::Pdf => Box::new(pdf::PdfDocument::new(content)),
        DocumentFormat::Word => Box::new(word::WordDocument::new(content)),
        DocumentFormat::Html => Box::new(html::HtmlDocument::new(content)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn format_is_case_insensitive() {
        for name in ["pdf", "PDF", "Pdf"] {
            assert_eq!(name.parse::<DocumentFormat>().unwrap(), DocumentFormat::Pdf);
        }
        assert_eq!("WORD".parse::<DocumentFormat>().unwrap(), DocumentFormat::Word);
        assert_eq!("HtMl".parse::<DocumentFormat>().unwrap(), DocumentFormat::Html);
    }

    #[test]
    fn same_display_regardless_of_case() {
        let upper = create_document("PDF", "body").unwrap();
        let lower = create_document("pdf", "body").unwrap();
        assert_eq!(upper.display(), lower.display());
    }

    #[test]
    fn unsupported_format_keeps_original_spelling() {
        let err = create_document("XmL", "x").err().unwrap();
        assert!(matches!(err, Error::UnsupportedFormat(ref f) if f == "XmL"));
        assert_eq!(err.to_string(), "Unsupported format: XmL");
    }

    #[test]
    fn unsupported_format_message_names_format() {
        let err = create_document("xml", "x").err().unwrap();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn dispatches_to_variant() {
        assert_eq!(create_document("pdf", "").unwrap().format(), DocumentFormat::Pdf);
        assert_eq!(create_document("word", "").unwrap().format(), DocumentFormat::Word);
        assert_eq!(create_document("html", "").unwrap().format(), DocumentFormat::Html);
    }

    #[test]
    fn content_passed_through_unchanged() {
        let doc = create_document("word", "line 1\n<b>line 2</b>").unwrap();
        assert_eq!(doc.content(), "line 1\n<b>line 2</b>");
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.pdf");
        std::fs::write(&path, "stale content that is longer than the new one").unwrap();

        create_document("pdf", "new").unwrap().save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "%PDF-1.4\nnew");
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("report.html");

        let err = create_document("html", "x").unwrap().save(&path).unwrap_err();
        match err {
            Error::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn extensions() {
        assert_eq!(DocumentFormat::Pdf.file_extension(), "pdf");
        assert_eq!(DocumentFormat::Word.file_extension(), "docx");
        assert_eq!(DocumentFormat::Html.file_extension(), "html");
    }
}
