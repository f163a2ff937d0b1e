//! Lumped-capacitance heat transfer between bodies and their surroundings.
//!
//! Each body carries a single temperature. Heat flux is computed from
//! Newton's law of cooling (body to environment) or Fourier's law (body to
//! body), integrated over a fixed step, and converted to a temperature change
//! through the body's thermal capacity `m·c`.

mod body;
mod contact;
mod engine;
mod environment;
mod error;
mod results;

pub mod flux;

#[cfg(test)]
mod test_support;

pub use body::ThermalBody;
pub use contact::ContactPath;
pub use engine::{EngineState, MAX_STEPS, Mode, SimulationEngine};
pub use environment::Environment;
pub use error::ConfigError;
pub use results::{BodySeries, Results, Sample};
