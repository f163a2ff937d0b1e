//! Lumped-capacitance heat transfer simulation.
//!
//! The computational core lives in the internal `core` module and is driven
//! through [`SimulationEngine`]. [`LumpedModel`] adapts the engine to
//! [`twine_core::Model`] so a fixed configuration can be evaluated for
//! different run lengths and modes without mutable state.
//!
//! # Sign convention
//!
//! Heat flux is positive when it leaves a body (the body in convection, the
//! first body in conduction). A body hotter than its environment has a
//! positive convective flux and cools.
//!
//! # Known limitations
//!
//! - Explicit Euler integration overshoots equilibrium when the step exceeds
//!   the thermal time constant. This is not corrected.
//! - `total_time` is truncated to a whole number of steps.
//! - Conduction is pairwise only.

mod core;

pub use self::core::flux;
pub use self::core::{
    BodySeries, ConfigError, ContactPath, EngineState, Environment, MAX_STEPS, Mode, Results,
    Sample, SimulationEngine, ThermalBody,
};

use twine_core::Model;
use uom::si::f64::Time;

/// A single run request for [`LumpedModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunRequest {
    /// Simulated duration.
    pub total_time: Time,

    /// Heat exchange mode.
    pub mode: Mode,
}

/// [`Model`] adapter over a fixed lumped configuration.
///
/// Each call builds a fresh [`SimulationEngine`] from the stored time step,
/// bodies, and environment, so calls are independent and repeatable.
#[derive(Debug, Clone)]
pub struct LumpedModel {
    time_step: Time,
    bodies: Vec<ThermalBody>,
    environment: Option<Environment>,
}

impl LumpedModel {
    /// Creates a model with the given step and bodies.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if `time_step` is not
    /// strictly positive, or [`ConfigError::NonFiniteTime`] if it is infinite.
    pub fn new(time_step: Time, bodies: Vec<ThermalBody>) -> Result<Self, ConfigError> {
        let time_step = ConfigError::check_duration("time step", time_step)?;
        Ok(Self {
            time_step,
            bodies,
            environment: None,
        })
    }

    /// Sets the environment used by [`Mode::Environment`].
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    fn engine(&self) -> Result<SimulationEngine, ConfigError> {
        let mut engine = SimulationEngine::new();
        engine.configure(self.time_step)?;
        if let Some(environment) = self.environment {
            engine.set_environment(environment);
        }
        for body in &self.bodies {
            engine.add_body(body.clone());
        }
        Ok(engine)
    }
}

impl Model for LumpedModel {
    type Input = RunRequest;
    type Output = Results;
    type Error = ConfigError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.engine()?.run(input.total_time, input.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Area, HeatTransfer, Mass, SpecificHeatCapacity, ThermodynamicTemperature},
        heat_transfer::watt_per_square_meter_kelvin,
        mass::kilogram,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::degree_celsius,
        time::second,
    };

    use crate::support::materials::{CatalogError, MaterialCatalog};

    fn block(initial_c: f64) -> ThermalBody {
        ThermalBody::new(
            "block",
            Mass::new::<kilogram>(1.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(900.0),
            Area::new::<square_meter>(0.01),
            ThermodynamicTemperature::new::<degree_celsius>(initial_c),
        )
        .unwrap()
    }

    fn still_air() -> Environment {
        Environment::new(
            ThermodynamicTemperature::new::<degree_celsius>(25.0),
            HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0),
        )
        .unwrap()
    }

    #[test]
    fn matches_engine_and_repeats() {
        let model = LumpedModel::new(Time::new::<second>(10.0), vec![block(80.0)])
            .unwrap()
            .with_environment(still_air());
        let request = RunRequest {
            total_time: Time::new::<second>(600.0),
            mode: Mode::Environment,
        };

        let first = model.call(&request).unwrap();
        let again = model.call(&request).unwrap();
        assert_eq!(first, again);

        let mut engine = SimulationEngine::new();
        engine.configure(Time::new::<second>(10.0)).unwrap();
        engine.set_environment(still_air());
        engine.add_body(block(80.0));
        let direct = engine.run(request.total_time, request.mode).unwrap();

        assert_eq!(first, direct);
        assert_relative_eq!(
            first.final_temperatures()[0].get::<degree_celsius>(),
            25.0 + 55.0 * (1.0 - 1.0 / 900.0_f64).powi(60),
            epsilon = 1e-9
        );
    }

    #[test]
    fn conduction_through_model() {
        let model =
            LumpedModel::new(Time::new::<second>(0.1), vec![block(90.0), block(10.0)]).unwrap();

        let results = model
            .call(&RunRequest {
                total_time: Time::new::<second>(30.0),
                mode: Mode::Conduction(ContactPath::default()),
            })
            .unwrap();

        let finals = results.final_temperatures();
        assert_relative_eq!(finals[0].get::<degree_celsius>(), 50.0, epsilon = 1e-6);
        assert_relative_eq!(finals[1].get::<degree_celsius>(), 50.0, epsilon = 1e-6);
    }

    #[test]
    fn reports_configuration_errors() {
        assert!(LumpedModel::new(Time::new::<second>(0.0), vec![block(80.0)]).is_err());

        let model = LumpedModel::new(Time::new::<second>(1.0), vec![block(80.0)]).unwrap();
        let result = model.call(&RunRequest {
            total_time: Time::new::<second>(10.0),
            mode: Mode::Environment,
        });
        assert!(matches!(result, Err(ConfigError::MissingEnvironment)));
    }

    #[test]
    fn unbounded_runs_are_configuration_errors() {
        assert!(matches!(
            LumpedModel::new(Time::new::<second>(f64::INFINITY), vec![block(80.0)]),
            Err(ConfigError::NonFiniteTime { .. })
        ));

        let model = LumpedModel::new(Time::new::<second>(10.0), vec![block(80.0)])
            .unwrap()
            .with_environment(still_air());
        assert!(matches!(
            model.call(&RunRequest {
                total_time: Time::new::<second>(f64::INFINITY),
                mode: Mode::Environment,
            }),
            Err(ConfigError::NonFiniteTime { .. })
        ));

        let tiny_step = LumpedModel::new(Time::new::<second>(1e-300), vec![block(80.0)])
            .unwrap()
            .with_environment(still_air());
        assert!(matches!(
            tiny_step.call(&RunRequest {
                total_time: Time::new::<second>(1.0),
                mode: Mode::Environment,
            }),
            Err(ConfigError::TooManySteps {
                limit: MAX_STEPS,
                ..
            })
        ));
    }

    fn catalog_engine(
        catalog: &MaterialCatalog,
        key: &str,
    ) -> Result<SimulationEngine, ConfigError> {
        let material = catalog.lookup(key)?;
        let air = catalog.convection_coefficient("still_air")?;

        let mut engine = SimulationEngine::new();
        engine.configure(Time::new::<second>(10.0))?;
        engine.set_environment(Environment::from_preset(
            ThermodynamicTemperature::new::<degree_celsius>(25.0),
            air,
        )?);
        engine.add_body(ThermalBody::from_material(
            material.name(),
            material,
            Mass::new::<kilogram>(1.0),
            Area::new::<square_meter>(0.01),
            ThermodynamicTemperature::new::<degree_celsius>(80.0),
        )?);
        Ok(engine)
    }

    #[test]
    fn builds_bodies_from_catalog() {
        let catalog = MaterialCatalog::builtin().unwrap();

        let mut engine = catalog_engine(&catalog, "Aluminum").unwrap();
        let from_catalog = engine
            .run(Time::new::<second>(600.0), Mode::Environment)
            .unwrap();

        // Aluminum in the catalog matches the hand-built 900 J/(kg·K) block.
        let model = LumpedModel::new(Time::new::<second>(10.0), vec![block(80.0)])
            .unwrap()
            .with_environment(still_air());
        let by_hand = model
            .call(&RunRequest {
                total_time: Time::new::<second>(600.0),
                mode: Mode::Environment,
            })
            .unwrap();

        assert_eq!(from_catalog.final_temperatures(), by_hand.final_temperatures());
        assert_eq!(from_catalog.series[0].name, "Aluminum");
    }

    #[test]
    fn unknown_material_is_a_configuration_error() {
        let catalog = MaterialCatalog::builtin().unwrap();

        let result = catalog_engine(&catalog, "unobtainium");
        assert!(matches!(
            result,
            Err(ConfigError::Catalog(CatalogError::UnknownMaterial { .. }))
        ));
    }
}
