//! # Twine Lumped
//!
//! Lumped-capacitance heat transfer simulation for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Each body is treated as having a single uniform temperature. Bodies exchange
//! heat either with a surrounding fluid by convection (Newton's law of cooling)
//! or with each other by conduction (Fourier's law), and temperatures are
//! advanced with explicit Euler steps.
//!
//! ## Crate layout
//!
//! - [`models`]: The simulation engine and its [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities (numeric constraints, unit extensions,
//!   a material catalog, and result rendering).
//!
//! ## Example
//!
//! ```
//! use twine_lumped::models::thermal::lumped::{Mode, SimulationEngine, ThermalBody};
//! use uom::si::{
//!     area::square_meter,
//!     f64::{Area, HeatTransfer, Mass, SpecificHeatCapacity, ThermodynamicTemperature, Time},
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     mass::kilogram,
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//!     time::second,
//! };
//!
//! let body = ThermalBody::new(
//!     "aluminum block",
//!     Mass::new::<kilogram>(1.0),
//!     SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(900.0),
//!     Area::new::<square_meter>(0.01),
//!     ThermodynamicTemperature::new::<degree_celsius>(80.0),
//! )
//! .unwrap();
//!
//! let mut engine = SimulationEngine::new();
//! engine.configure(Time::new::<second>(10.0)).unwrap();
//! engine.add_body(body);
//! engine
//!     .configure_environment(
//!         ThermodynamicTemperature::new::<degree_celsius>(25.0),
//!         HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0),
//!     )
//!     .unwrap();
//!
//! let results = engine.run(Time::new::<second>(600.0), Mode::Environment).unwrap();
//! assert_eq!(results.steps, 60);
//! assert_eq!(results.series[0].samples.len(), 61);
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
