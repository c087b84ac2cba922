//! Car configuration report — content generation and document creation.

use crate::document::{self, Document};
use crate::error::Result;
use crate::model::Car;
use std::path::Path;

const TITLE: &str = "Car Configuration Report";

/// Render the report body for `car`.
///
/// `"html"` (any case) yields a heading plus a single-line `<ul>`; every other
/// format gets plain `Label: value` lines. Values are written as-is.
pub fn generate_content(car: &Car, format: &str) -> String {
    let fields = car.ordered_fields();

    if format.eq_ignore_ascii_case("html") {
        let mut out = format!("<h1>{}</h1><ul>", TITLE);
        for (label, value) in &fields {
            out.push_str(&format!("<li><b>{}:</b> {}</li>", label, value));
        }
        out.push_str("</ul>");
        out
    } else {
        let mut out = format!("{}\n", TITLE);
        for (label, value) in &fields {
            out.push_str(&format!("{}: {}\n", label, value));
        }
        out
    }
}

/// Render `car`, wrap it in a document of `format`, and save it when a
/// `filename` is given. The document is returned either way.
pub fn create_car_document(
    car: &Car,
    format: &str,
    filename: Option<&Path>,
) -> Result<Box<dyn Document>> {
    let content = generate_content(car, format);
    let doc = document::create_document(format, content)?;
    if let Some(path) = filename {
        doc.save(path)?;
    }
    Ok(doc)
}
