//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (temperature, power, energy,
//! heat transfer coefficients, ...). This module provides extensions that are
//! useful for modeling but aren't included in [`uom`].
//!
//! ## Temperature arithmetic
//!
//! The [`TemperatureDifference`] trait converts between absolute temperatures
//! and temperature intervals:
//!
//! ```
//! use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature};
//! use uom::si::temperature_interval::kelvin as delta_kelvin;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use twine_lumped::support::units::TemperatureDifference;
//!
//! let body = ThermodynamicTemperature::new::<degree_celsius>(80.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//! let excess = body.minus(ambient);
//! assert!((excess.get::<delta_kelvin>() - 55.0).abs() < 1e-12);
//!
//! let cooled = body.plus(TemperatureInterval::new::<delta_kelvin>(-5.0));
//! assert!((cooled.get::<degree_celsius>() - 75.0).abs() < 1e-12);
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
