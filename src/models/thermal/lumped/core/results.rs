//! Recorded output of a simulation run.

use uom::{
    ConstZero,
    si::f64::{Energy, HeatCapacity, ThermodynamicTemperature, Time},
};

use crate::support::units::TemperatureDifference;

/// One recorded point of a body's temperature history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Elapsed simulation time.
    pub time: Time,

    /// Body temperature at `time`.
    pub temperature: ThermodynamicTemperature,
}

/// Temperature history of a single body.
///
/// Samples are ordered by strictly increasing time.
/// The first sample is the initial state at `t = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySeries {
    /// Name of the body, as registered.
    pub name: String,

    /// Thermal capacity `m·c` of the body.
    pub heat_capacity: HeatCapacity,

    /// Recorded samples.
    pub samples: Vec<Sample>,
}

impl BodySeries {
    pub(super) fn new(name: &str, heat_capacity: HeatCapacity, capacity: usize) -> Self {
        Self {
            name: name.to_owned(),
            heat_capacity,
            samples: Vec::with_capacity(capacity),
        }
    }

    /// The sample at `t = 0`.
    #[must_use]
    pub fn initial(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// The last recorded sample.
    #[must_use]
    pub fn final_sample(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Energy stored by the body over the run, `C·(T_final − T_0)`.
    ///
    /// Negative when the body lost heat.
    #[must_use]
    pub fn net_heat(&self) -> Energy {
        match (self.initial(), self.final_sample()) {
            (Some(first), Some(last)) => {
                self.heat_capacity * last.temperature.minus(first.temperature)
            }
            _ => Energy::ZERO,
        }
    }

    /// Iterates over `(time, temperature)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Time, ThermodynamicTemperature)> + '_ {
        self.samples.iter().map(|s| (s.time, s.temperature))
    }
}

/// Result series of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    /// One series per body, in registration order.
    pub series: Vec<BodySeries>,

    /// Number of full steps taken.
    pub steps: usize,

    /// Simulated time covered, `steps · Δt`.
    pub elapsed: Time,
}

impl Results {
    /// Final temperature of each body, in registration order.
    #[must_use]
    pub fn final_temperatures(&self) -> Vec<ThermodynamicTemperature> {
        self.series
            .iter()
            .filter_map(|s| s.final_sample().map(|sample| sample.temperature))
            .collect()
    }

    /// The first series with the given name.
    ///
    /// Body names are not required to be unique; when they repeat only the
    /// first registered body is reachable by name.
    #[must_use]
    pub fn body(&self, name: &str) -> Option<&BodySeries> {
        self.series.iter().find(|s| s.name == name)
    }
}
