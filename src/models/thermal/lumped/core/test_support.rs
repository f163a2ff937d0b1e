use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer, Mass, SpecificHeatCapacity, ThermodynamicTemperature, Time},
    heat_transfer::watt_per_square_meter_kelvin,
    mass::kilogram,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::second,
};

use super::{SimulationEngine, ThermalBody};

pub(super) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

pub(super) fn seconds(value: f64) -> Time {
    Time::new::<second>(value)
}

/// 1 kg, 900 J/(kg·K), 0.01 m² body.
pub(super) fn aluminum_block(initial_c: f64) -> ThermalBody {
    ThermalBody::new(
        "aluminum block",
        Mass::new::<kilogram>(1.0),
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(900.0),
        Area::new::<square_meter>(0.01),
        celsius(initial_c),
    )
    .expect("valid body")
}

/// Engine with the given step in 25 °C air at h = 10 W/(m²·K), no bodies.
pub(super) fn still_air_engine(dt_s: f64) -> SimulationEngine {
    let mut engine = SimulationEngine::new();
    engine.configure(seconds(dt_s)).expect("valid time step");
    engine
        .configure_environment(
            celsius(25.0),
            HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0),
        )
        .expect("valid environment");
    engine
}
