//! Car configuration model — format-agnostic.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Gearbox kind. Only the two lowercase spellings are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transmission::Manual => "manual",
            Transmission::Automatic => "automatic",
        }
    }
}

impl FromStr for Transmission {
    type Err = Error;

    /// Exact, case-sensitive match. "Manual" and " manual" are rejected.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "manual" => Ok(Transmission::Manual),
            "automatic" => Ok(Transmission::Automatic),
            _ => Err(Error::InvalidArgument(format!(
                "Transmission must be manual or automatic, got: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished car configuration.
///
/// Only [`CarBuilder`](crate::builder::CarBuilder) can populate one, so every
/// `Car` handed out by `build()` satisfies [`Car::is_valid`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Car {
    pub(crate) engine: Option<String>,
    pub(crate) transmission: Option<Transmission>,
    pub(crate) interior: Vec<String>,
    pub(crate) exterior: Vec<String>,
    pub(crate) safety: Vec<String>,
}

/// Borrowed view of a single report field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Scalar(Option<&'a str>),
    List(&'a [String]),
}

impl fmt::Display for FieldValue<'_> {
    /// Lists render as `[a, b]`; a missing scalar renders as `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Scalar(Some(v)) => f.write_str(v),
            FieldValue::Scalar(None) => f.write_str("null"),
            FieldValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl Car {
    pub fn is_valid(&self) -> bool {
        self.engine.is_some() && self.transmission.is_some()
    }

    pub fn engine(&self) -> Option<&str> {
        self.engine.as_deref()
    }

    pub fn transmission(&self) -> Option<Transmission> {
        self.transmission
    }

    pub fn interior(&self) -> &[String] {
        &self.interior
    }

    pub fn exterior(&self) -> &[String] {
        &self.exterior
    }

    pub fn safety(&self) -> &[String] {
        &self.safety
    }

    /// Label/value pairs in report order. Both renderers iterate this, so the
    /// order here is the order in every report.
    pub fn ordered_fields(&self) -> Vec<(&'static str, FieldValue<'_>)> {
        vec![
            ("Engine", FieldValue::Scalar(self.engine())),
            (
                "Transmission",
                FieldValue::Scalar(self.transmission.as_ref().map(Transmission::as_str)),
            ),
            ("Interior", FieldValue::List(&self.interior)),
            ("Exterior", FieldValue::List(&self.exterior)),
            ("Safety", FieldValue::List(&self.safety)),
        ]
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .ordered_fields()
            .into_iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}
