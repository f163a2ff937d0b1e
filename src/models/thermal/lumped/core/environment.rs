use uom::si::f64::{HeatTransfer, ThermodynamicTemperature};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    materials::ConvectionPreset,
};

use super::ConfigError;

/// The fluid surrounding the bodies in environment mode.
///
/// Typical convection coefficients are 5–25 W/(m²·K) for natural convection
/// and 25–250 W/(m²·K) for forced convection.
/// These ranges are guidance only and are not enforced.
///
/// The environment is fixed for the duration of a run.
/// Heat given off by the bodies does not change the ambient temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    ambient: ThermodynamicTemperature,
    convection_coefficient: HeatTransfer,
}

impl Environment {
    /// Creates an environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficient is not strictly positive or the
    /// ambient temperature is not finite.
    pub fn new(
        ambient: ThermodynamicTemperature,
        convection_coefficient: HeatTransfer,
    ) -> Result<Self, ConfigError> {
        let convection_coefficient = StrictlyPositive::new(convection_coefficient)
            .map_err(ConfigError::invalid("convection coefficient"))?;
        ConfigError::check_finite("ambient temperature", ambient.value)?;
        Ok(Self::from_constrained(ambient, convection_coefficient))
    }

    /// Creates an environment using a catalog convection preset.
    ///
    /// # Errors
    ///
    /// Same as [`Environment::new`].
    pub fn from_preset(
        ambient: ThermodynamicTemperature,
        preset: &ConvectionPreset,
    ) -> Result<Self, ConfigError> {
        Self::new(ambient, preset.coefficient())
    }

    /// Creates an environment from a pre-validated coefficient.
    #[must_use]
    pub fn from_constrained(
        ambient: ThermodynamicTemperature,
        convection_coefficient: Constrained<HeatTransfer, StrictlyPositive>,
    ) -> Self {
        Self {
            ambient,
            convection_coefficient: convection_coefficient.into_inner(),
        }
    }

    #[must_use]
    pub fn ambient(&self) -> ThermodynamicTemperature {
        self.ambient
    }

    #[must_use]
    pub fn convection_coefficient(&self) -> HeatTransfer {
        self.convection_coefficient
    }
}
