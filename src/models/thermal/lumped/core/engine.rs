//! Explicit Euler stepping of lumped bodies.
//!
//! Each step evaluates the heat flux from the temperatures at the *start* of
//! the step and applies it over the whole step. This is first-order accurate
//! and its error grows with `Δt / τ`, where `τ` is the relevant thermal time
//! constant. For `Δt > τ` the update overshoots the equilibrium temperature,
//! and for `Δt > 2τ` it oscillates with growing amplitude. The engine keeps
//! this behavior as-is and only logs a warning.

use tracing::{debug, info, trace, warn};
use uom::{
    ConstZero,
    si::{
        f64::{HeatTransfer, ThermalConductance, ThermodynamicTemperature, Time},
        ratio::ratio,
        time::second,
    },
};

use super::{
    BodySeries, ConfigError, ContactPath, Environment, Results, Sample, ThermalBody, flux,
};

/// Relative slack when flooring `total_time / Δt`.
///
/// Keeps ratios such as `0.7 s / 0.1 s = 6.999…` from losing a step to
/// floating-point representation error.
const STEP_COUNT_SLACK: f64 = 1e-9;

/// Largest number of steps a single [`SimulationEngine::run`] will take.
///
/// Every step records one sample per body, so this also bounds the size of
/// the returned [`Results`].
pub const MAX_STEPS: usize = 10_000_000;

/// Lifecycle of a [`SimulationEngine`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EngineState {
    /// No time step has been set.
    #[default]
    Unconfigured,
    /// A time step is set and the engine can run.
    Configured,
    /// A run is in progress.
    Running,
    /// The last run finished successfully.
    Completed,
}

/// How heat leaves or enters the registered bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Every body exchanges heat with the configured [`Environment`] by
    /// convection. Bodies do not interact with each other.
    Environment,

    /// Exactly two bodies exchange heat with each other by conduction through
    /// the given path. The environment is ignored.
    Conduction(ContactPath),
}

/// Validated per-run exchange, resolved from a [`Mode`] before stepping.
#[derive(Debug, Clone, Copy)]
enum Exchange {
    Convection(Environment),
    Conduction(ContactPath),
}

/// Drives lumped bodies through fixed-size time steps and records their
/// temperatures.
///
/// # Usage
///
/// 1. [`configure`](Self::configure) the time step.
/// 2. [`add_body`](Self::add_body) one or more bodies.
/// 3. For [`Mode::Environment`], [`configure_environment`](Self::configure_environment).
/// 4. [`run`](Self::run).
///
/// Every call to `run` first restores each body to its initial temperature,
/// so repeated runs with the same configuration produce identical results.
#[derive(Debug, Clone, Default)]
pub struct SimulationEngine {
    time_step: Option<Time>,
    environment: Option<Environment>,
    bodies: Vec<ThermalBody>,
    state: EngineState,
}

impl SimulationEngine {
    /// Creates an unconfigured engine with no bodies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the step size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if `dt` is not strictly positive,
    /// or [`ConfigError::NonFiniteTime`] if it is infinite.
    pub fn configure(&mut self, dt: Time) -> Result<(), ConfigError> {
        let dt = ConfigError::check_duration("time step", dt)?;

        debug!(dt_s = dt.get::<second>(), "configured time step");
        self.time_step = Some(dt);
        self.state = EngineState::Configured;
        Ok(())
    }

    /// Registers a body.
    ///
    /// Bodies are stepped and reported in registration order.
    /// Names are not checked for uniqueness.
    pub fn add_body(&mut self, body: ThermalBody) {
        debug!(name = body.name(), "added body");
        self.bodies.push(body);
    }

    /// Sets the environment used by [`Mode::Environment`].
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficient is not strictly positive or the
    /// ambient temperature is not finite.
    pub fn configure_environment(
        &mut self,
        ambient: ThermodynamicTemperature,
        convection_coefficient: HeatTransfer,
    ) -> Result<(), ConfigError> {
        let environment = Environment::new(ambient, convection_coefficient)?;
        self.set_environment(environment);
        Ok(())
    }

    /// Sets a pre-built environment used by [`Mode::Environment`].
    pub fn set_environment(&mut self, environment: Environment) {
        debug!(?environment, "configured environment");
        self.environment = Some(environment);
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    #[must_use]
    pub fn time_step(&self) -> Option<Time> {
        self.time_step
    }

    #[must_use]
    pub fn environment(&self) -> Option<&Environment> {
        self.environment.as_ref()
    }

    /// Registered bodies, with temperatures as of the end of the last run.
    #[must_use]
    pub fn bodies(&self) -> &[ThermalBody] {
        &self.bodies
    }

    /// Simulates `total_time` and returns the recorded series.
    ///
    /// The number of steps is `floor(total_time / Δt)`; any remainder shorter
    /// than one step is not simulated. A `total_time` shorter than `Δt`
    /// therefore yields only the initial samples.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the engine has no time step, `total_time`
    /// is not strictly positive and finite, no bodies are registered, the
    /// environment is missing in [`Mode::Environment`], [`Mode::Conduction`]
    /// is selected without exactly two bodies, or the run would exceed
    /// [`MAX_STEPS`]. All checks happen before any body changes.
    pub fn run(&mut self, total_time: Time, mode: Mode) -> Result<Results, ConfigError> {
        let dt = self.time_step.ok_or(ConfigError::NotConfigured)?;
        let total_time = ConfigError::check_duration("total time", total_time)?;
        if self.bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }
        let exchange = self.resolve(mode)?;

        let steps = step_count(total_time, dt)?;
        let elapsed = dt * steps as f64;
        if elapsed < total_time {
            debug!(
                discarded_s = (total_time - elapsed).get::<second>(),
                "total time is not a multiple of the time step; remainder discarded"
            );
        }
        self.warn_if_coarse(dt, &exchange);

        info!(
            steps,
            dt_s = dt.get::<second>(),
            bodies = self.bodies.len(),
            "starting simulation"
        );
        self.state = EngineState::Running;

        for body in &mut self.bodies {
            body.reset();
        }

        let mut series: Vec<BodySeries> = self
            .bodies
            .iter()
            .map(|body| BodySeries::new(body.name(), body.heat_capacity(), steps + 1))
            .collect();
        self.record(&mut series, Time::ZERO);

        for step in 1..=steps {
            match &exchange {
                Exchange::Convection(environment) => {
                    convection_step(&mut self.bodies, environment, dt);
                }
                Exchange::Conduction(path) => conduction_step(&mut self.bodies, path, dt),
            }

            let time = dt * step as f64;
            self.record(&mut series, time);
            trace!(step, t_s = time.get::<second>(), "completed step");
        }

        self.state = EngineState::Completed;
        info!(steps, "simulation complete");

        Ok(Results {
            series,
            steps,
            elapsed,
        })
    }

    fn resolve(&self, mode: Mode) -> Result<Exchange, ConfigError> {
        match mode {
            Mode::Environment => self
                .environment
                .map(Exchange::Convection)
                .ok_or(ConfigError::MissingEnvironment),
            Mode::Conduction(path) => {
                if self.bodies.len() == 2 {
                    Ok(Exchange::Conduction(path))
                } else {
                    Err(ConfigError::ConductionBodyCount {
                        found: self.bodies.len(),
                    })
                }
            }
        }
    }

    fn record(&self, series: &mut [BodySeries], time: Time) {
        for (history, body) in series.iter_mut().zip(&self.bodies) {
            history.samples.push(Sample {
                time,
                temperature: body.temperature(),
            });
        }
    }

    /// Shortest time constant governing the run.
    fn shortest_time_constant(&self, exchange: &Exchange) -> Option<Time> {
        match exchange {
            Exchange::Convection(environment) => self
                .bodies
                .iter()
                .map(|body| body.time_constant(environment))
                .reduce(|a, b| if b < a { b } else { a }),
            Exchange::Conduction(path) => pair_time_constant(&self.bodies, path),
        }
    }

    /// Returns the time constant `dt` exceeds, if any.
    fn coarse_step(&self, dt: Time, exchange: &Exchange) -> Option<Time> {
        self.shortest_time_constant(exchange).filter(|&tau| dt > tau)
    }

    fn warn_if_coarse(&self, dt: Time, exchange: &Exchange) {
        if let Some(tau) = self.coarse_step(dt, exchange) {
            warn!(
                dt_s = dt.get::<second>(),
                tau_s = tau.get::<second>(),
                "time step exceeds the thermal time constant; explicit Euler will overshoot"
            );
        }
    }
}

/// `floor(total_time / dt)` with a small slack for representation error.
///
/// Fails when the ratio is not finite or exceeds [`MAX_STEPS`].
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn step_count(total_time: Time, dt: Time) -> Result<usize, ConfigError> {
    let steps = ((total_time / dt).get::<ratio>() * (1.0 + STEP_COUNT_SLACK)).floor();
    if steps.is_finite() && steps <= MAX_STEPS as f64 {
        Ok(steps as usize)
    } else {
        Err(ConfigError::TooManySteps {
            requested: steps,
            limit: MAX_STEPS,
        })
    }
}

fn convection_step(bodies: &mut [ThermalBody], environment: &Environment, dt: Time) {
    for body in bodies {
        let rate = flux::convective_flux(
            body.temperature(),
            environment.ambient(),
            environment.convection_coefficient(),
            body.area(),
        );
        body.absorb(-flux::heat_quantity(rate, dt));
    }
}

/// Body 1 loses exactly the heat body 2 gains.
fn conduction_step(bodies: &mut [ThermalBody], path: &ContactPath, dt: Time) {
    if let [source, sink] = bodies {
        let rate = flux::conductive_flux_through(source.temperature(), sink.temperature(), path);
        let heat = flux::heat_quantity(rate, dt);
        source.absorb(-heat);
        sink.absorb(heat);
    }
}

/// Time constant of the temperature difference between two conducting bodies,
/// `τ = 1 / (G · (1/C₁ + 1/C₂))` with `G = k·A/L`.
fn pair_time_constant(bodies: &[ThermalBody], path: &ContactPath) -> Option<Time> {
    let [source, sink] = bodies else {
        return None;
    };
    let conductance: ThermalConductance = path.conductivity() * path.area() / path.length();
    let c1 = source.heat_capacity();
    let c2 = sink.heat_capacity();
    Some(c1 * c2 / (conductance * (c1 + c2)))
}
