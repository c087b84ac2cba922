//! Validating builder for [`Car`].

use crate::error::{Error, Result};
use crate::model::{Car, Transmission};

/// Accumulates a car field by field and validates it on [`build`](Self::build).
///
/// A successful build hands the car out and starts over from an empty one, so
/// a single builder can produce any number of independent cars.
#[derive(Debug, Default)]
pub struct CarBuilder {
    car: Car,
}

impl CarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored verbatim.
    pub fn engine(&mut self, name: impl Into<String>) -> &mut Self {
        self.car.engine = Some(name.into());
        self
    }

    /// Accepts exactly `"manual"` or `"automatic"`.
    pub fn transmission(&mut self, value: &str) -> Result<&mut Self> {
        let transmission: Transmission = value.parse()?;
        self.car.transmission = Some(transmission);
        Ok(self)
    }

    pub fn interior(&mut self, feature: impl Into<String>) -> &mut Self {
        self.car.interior.push(feature.into());
        self
    }

    pub fn exterior(&mut self, feature: impl Into<String>) -> &mut Self {
        self.car.exterior.push(feature.into());
        self
    }

    pub fn safety(&mut self, feature: impl Into<String>) -> &mut Self {
        self.car.safety.push(feature.into());
        self
    }

    /// Finish the car and reset the builder.
    ///
    /// On failure the working state is kept, so the caller can supply the
    /// missing field and try again.
    pub fn build(&mut self) -> Result<Car> {
        if !self.car.is_valid() {
            return Err(Error::InvalidState("Car must have engine and transmission"));
        }
        let car = std::mem::take(&mut self.car);
        tracing::debug!(
            engine = car.engine().unwrap_or_default(),
            interior = car.interior().len(),
            exterior = car.exterior().len(),
            safety = car.safety().len(),
            "car built"
        );
        Ok(car)
    }
}
