use uom::si::f64::{
    Area, Energy, HeatCapacity, Mass, SpecificHeatCapacity, ThermodynamicTemperature, Time,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    materials::Material,
    units::TemperatureDifference,
};

use super::{ConfigError, Environment, flux};

/// A single object with one uniform internal temperature.
///
/// Mass, specific heat, and surface area are validated to be strictly positive
/// at construction and never change afterwards.
/// The current temperature is only changed by
/// [`SimulationEngine`](super::SimulationEngine) while it steps.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalBody {
    name: String,
    mass: Mass,
    specific_heat: SpecificHeatCapacity,
    area: Area,
    initial_temperature: ThermodynamicTemperature,
    temperature: ThermodynamicTemperature,
}

impl ThermalBody {
    /// Creates a body at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if mass, specific heat, or area
    /// is not strictly positive, and [`ConfigError::NonFiniteTemperature`] if
    /// the temperature is not finite.
    pub fn new(
        name: impl Into<String>,
        mass: Mass,
        specific_heat: SpecificHeatCapacity,
        area: Area,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, ConfigError> {
        let mass = StrictlyPositive::new(mass).map_err(ConfigError::invalid("mass"))?;
        let specific_heat = StrictlyPositive::new(specific_heat)
            .map_err(ConfigError::invalid("specific heat"))?;
        let area = StrictlyPositive::new(area).map_err(ConfigError::invalid("surface area"))?;
        ConfigError::check_finite("initial temperature", temperature.value)?;

        Ok(Self::from_constrained(
            name,
            mass,
            specific_heat,
            area,
            temperature,
        ))
    }

    /// Creates a body whose specific heat comes from a catalog material.
    ///
    /// # Errors
    ///
    /// Same as [`ThermalBody::new`].
    pub fn from_material(
        name: impl Into<String>,
        material: &Material,
        mass: Mass,
        area: Area,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, ConfigError> {
        Self::new(name, mass, material.specific_heat(), area, temperature)
    }

    /// Creates a body from pre-validated properties.
    ///
    /// The temperature is not checked for finiteness.
    #[must_use]
    pub fn from_constrained(
        name: impl Into<String>,
        mass: Constrained<Mass, StrictlyPositive>,
        specific_heat: Constrained<SpecificHeatCapacity, StrictlyPositive>,
        area: Constrained<Area, StrictlyPositive>,
        temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            name: name.into(),
            mass: mass.into_inner(),
            specific_heat: specific_heat.into_inner(),
            area: area.into_inner(),
            initial_temperature: temperature,
            temperature,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        self.specific_heat
    }

    /// Surface area exposed to the environment.
    #[must_use]
    pub fn area(&self) -> Area {
        self.area
    }

    /// Current temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Temperature the body was created with, restored at the start of each run.
    #[must_use]
    pub fn initial_temperature(&self) -> ThermodynamicTemperature {
        self.initial_temperature
    }

    /// Thermal capacity `C = m·c`.
    #[must_use]
    pub fn heat_capacity(&self) -> HeatCapacity {
        self.mass * self.specific_heat
    }

    /// Convective time constant `τ = m·c / (h·A)` in the given environment.
    ///
    /// Explicit Euler steps much shorter than `τ` track the exact exponential
    /// decay closely; steps comparable to or longer than `τ` overshoot.
    #[must_use]
    pub fn time_constant(&self, environment: &Environment) -> Time {
        self.heat_capacity() / (environment.convection_coefficient() * self.area)
    }

    /// Adds `heat` to the body (negative removes it).
    pub(super) fn absorb(&mut self, heat: Energy) {
        let delta = flux::temperature_delta(heat, self.mass, self.specific_heat);
        self.temperature = self.temperature.plus(delta);
    }

    pub(super) fn reset(&mut self) {
        self.temperature = self.initial_temperature;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, energy::joule, f64::HeatTransfer, heat_capacity::joule_per_kelvin,
        heat_transfer::watt_per_square_meter_kelvin, mass::kilogram,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::degree_celsius, time::second,
    };

    use crate::support::constraint::ConstraintError;

    use super::super::test_support::{aluminum_block, celsius};

    #[test]
    fn rejects_zero_mass_at_construction() {
        let err = ThermalBody::new(
            "block",
            Mass::new::<kilogram>(0.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(900.0),
            Area::new::<square_meter>(0.01),
            celsius(80.0),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                parameter: "mass",
                source: ConstraintError::Zero,
            }
        ));
    }

    #[test]
    fn rejects_negative_specific_heat_and_area() {
        let err = ThermalBody::new(
            "block",
            Mass::new::<kilogram>(1.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(-1.0),
            Area::new::<square_meter>(0.01),
            celsius(80.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                parameter: "specific heat",
                ..
            }
        ));

        let err = ThermalBody::new(
            "block",
            Mass::new::<kilogram>(1.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(900.0),
            Area::new::<square_meter>(f64::NAN),
            celsius(80.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                parameter: "surface area",
                source: ConstraintError::NotANumber,
            }
        ));
    }

    #[test]
    fn rejects_non_finite_temperature() {
        let err = ThermalBody::new(
            "block",
            Mass::new::<kilogram>(1.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(900.0),
            Area::new::<square_meter>(0.01),
            celsius(f64::INFINITY),
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::NonFiniteTemperature { .. }));
    }

    #[test]
    fn negative_celsius_is_allowed() {
        let body = ThermalBody::new(
            "ice",
            Mass::new::<kilogram>(0.5),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2100.0),
            Area::new::<square_meter>(0.02),
            celsius(-18.0),
        )
        .unwrap();

        assert_relative_eq!(
            body.temperature().get::<degree_celsius>(),
            -18.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn derived_properties() {
        let body = aluminum_block(80.0);
        let env = Environment::new(
            celsius(25.0),
            HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0),
        )
        .unwrap();

        assert_relative_eq!(body.heat_capacity().get::<joule_per_kelvin>(), 900.0);
        assert_relative_eq!(body.time_constant(&env).get::<second>(), 9000.0);
    }

    #[test]
    fn absorb_and_reset() {
        let mut body = aluminum_block(80.0);

        // Removing 900 J from a 900 J/K body cools it by one degree.
        body.absorb(Energy::new::<joule>(-900.0));
        assert_relative_eq!(
            body.temperature().get::<degree_celsius>(),
            79.0,
            epsilon = 1e-9
        );

        body.reset();
        assert_eq!(body.temperature(), body.initial_temperature());
    }
}
