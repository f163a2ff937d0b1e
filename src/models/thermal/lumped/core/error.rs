use thiserror::Error;
use uom::si::f64::Time;

use crate::support::{
    constraint::{ConstraintError, StrictlyPositive},
    materials::CatalogError,
};

/// Errors raised while configuring a lumped simulation.
///
/// Every variant is detected before the first time step is taken.
/// A run that passes validation always completes.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A physical parameter violated its numeric constraint.
    #[error("invalid {parameter}: {source}")]
    InvalidParameter {
        /// Name of the offending parameter (e.g. `"mass"`).
        parameter: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// A temperature was infinite or `NaN`.
    #[error("{parameter} must be a finite temperature")]
    NonFiniteTemperature {
        /// Name of the offending parameter.
        parameter: &'static str,
    },

    /// A duration was infinite.
    #[error("{parameter} must be finite")]
    NonFiniteTime {
        /// Name of the offending parameter.
        parameter: &'static str,
    },

    /// `total_time / dt` is not finite or exceeds the step limit.
    #[error("run would take {requested} steps, more than the limit of {limit}")]
    TooManySteps {
        /// Requested number of steps, before truncation.
        requested: f64,

        /// The step limit.
        limit: usize,
    },

    /// `run` was called before a time step was configured.
    #[error("time step has not been configured")]
    NotConfigured,

    /// `run` was called with no registered bodies.
    #[error("no bodies registered")]
    NoBodies,

    /// Environment mode was selected without configuring an environment.
    #[error("environment mode requires a configured environment")]
    MissingEnvironment,

    /// Conduction mode was selected without exactly two bodies.
    #[error("conduction mode requires exactly 2 bodies, found {found}")]
    ConductionBodyCount {
        /// Number of registered bodies.
        found: usize,
    },

    /// A material without a thermal conductivity was used for a contact path.
    #[error("material {material:?} has no thermal conductivity")]
    MissingConductivity {
        /// Name of the material.
        material: String,
    },

    /// A material catalog lookup failed.
    #[error("material catalog lookup failed")]
    Catalog(#[from] CatalogError),
}

impl ConfigError {
    /// Returns a mapper that tags a [`ConstraintError`] with a parameter name.
    pub(crate) fn invalid(parameter: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { parameter, source }
    }

    /// Accepts strictly positive, finite durations.
    pub(crate) fn check_duration(parameter: &'static str, value: Time) -> Result<Time, Self> {
        let value = StrictlyPositive::new(value)
            .map_err(Self::invalid(parameter))?
            .into_inner();
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFiniteTime { parameter })
        }
    }

    /// Rejects infinite and `NaN` values.
    pub(crate) fn check_finite(parameter: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::NonFiniteTemperature { parameter })
        }
    }
}
