//! cardoc — build a validated car configuration and render it as a report.
//!
//! A [`CarBuilder`] accumulates the configuration and validates it on
//! `build()`. [`report::generate_content`] turns the finished [`Car`] into
//! plain text or HTML, and [`document::create_document`] wraps that content in
//! a PDF, Word or HTML [`Document`] which can be previewed or saved.
//!
//! ```
//! use cardoc::{report, CarBuilder};
//!
//! let car = CarBuilder::new()
//!     .engine("V6")
//!     .transmission("automatic")?
//!     .safety("ABS")
//!     .build()?;
//!
//! let doc = report::create_car_document(&car, "pdf", None)?;
//! assert!(doc.display().starts_with("[PDF]\nCar Configuration Report\n"));
//! # Ok::<(), cardoc::Error>(())
//! ```

pub mod builder;
pub mod document;
pub mod error;
pub mod model;
pub mod report;

pub use builder::CarBuilder;
pub use document::{create_document, Document, DocumentFormat};
pub use error::{Error, Result};
pub use model::{Car, FieldValue, Transmission};
