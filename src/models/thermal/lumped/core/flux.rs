//! Heat flux laws for lumped bodies.
//!
//! These are pure functions with a single sign convention: a positive rate is
//! heat leaving the first body (the body in convection, body 1 in conduction).

use uom::si::f64::{
    Area, Energy, HeatTransfer, Length, Mass, Power, SpecificHeatCapacity, TemperatureInterval,
    ThermalConductivity, ThermodynamicTemperature, Time,
};

use crate::support::units::TemperatureDifference;

use super::ContactPath;

/// Newton's law of cooling, `q = h·A·(T_body − T_ambient)`.
///
/// Positive when the body is hotter than its surroundings.
#[must_use]
pub fn convective_flux(
    body_temp: ThermodynamicTemperature,
    ambient_temp: ThermodynamicTemperature,
    coefficient: HeatTransfer,
    area: Area,
) -> Power {
    coefficient * area * body_temp.minus(ambient_temp)
}

/// Fourier's law across a slab, `q = k·A·(T1 − T2) / L`.
///
/// Positive when heat flows from body 1 to body 2.
/// The caller must ensure `path_length` is strictly positive; see
/// [`conductive_flux_through`] for the validated form.
#[must_use]
pub fn conductive_flux(
    temp1: ThermodynamicTemperature,
    temp2: ThermodynamicTemperature,
    conductivity: ThermalConductivity,
    area: Area,
    path_length: Length,
) -> Power {
    conductivity * area * temp1.minus(temp2) / path_length
}

/// [`conductive_flux`] across a validated [`ContactPath`].
#[must_use]
pub fn conductive_flux_through(
    temp1: ThermodynamicTemperature,
    temp2: ThermodynamicTemperature,
    path: &ContactPath,
) -> Power {
    conductive_flux(temp1, temp2, path.conductivity(), path.area(), path.length())
}

/// Heat transferred over one step at a constant rate, `Q = q·Δt`.
#[must_use]
pub fn heat_quantity(rate: Power, dt: Time) -> Energy {
    rate * dt
}

/// Temperature change of a lumped body receiving `heat`, `ΔT = Q / (m·c)`.
#[must_use]
pub fn temperature_delta(
    heat: Energy,
    mass: Mass,
    specific_heat: SpecificHeatCapacity,
) -> TemperatureInterval {
    let capacity = mass * specific_heat;
    debug_assert!(
        capacity.value > 0.0,
        "heat capacity must be positive, got {capacity:?}"
    );
    heat / capacity
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, energy::joule, heat_transfer::watt_per_square_meter_kelvin,
        length::meter, mass::kilogram, power::watt,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        temperature_interval::kelvin as delta_kelvin, thermal_conductivity::watt_per_meter_kelvin,
        thermodynamic_temperature::degree_celsius, time::second,
    };

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn convection_sign_follows_temperature_difference() {
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0);
        let area = Area::new::<square_meter>(0.01);

        let losing = convective_flux(celsius(80.0), celsius(25.0), h, area);
        assert_relative_eq!(losing.get::<watt>(), 5.5, epsilon = 1e-9);

        let gaining = convective_flux(celsius(5.0), celsius(25.0), h, area);
        assert_relative_eq!(gaining.get::<watt>(), -2.0, epsilon = 1e-9);

        let balanced = convective_flux(celsius(25.0), celsius(25.0), h, area);
        assert_relative_eq!(balanced.get::<watt>(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn conduction_through_slab() {
        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(50.0);
        let area = Area::new::<square_meter>(0.01);
        let length = Length::new::<meter>(0.001);

        // 50 · 0.01 · 60 / 0.001 = 30 kW
        let q = conductive_flux(celsius(90.0), celsius(30.0), k, area, length);
        assert_relative_eq!(q.get::<watt>(), 30_000.0, epsilon = 1e-6);

        let reversed = conductive_flux(celsius(30.0), celsius(90.0), k, area, length);
        assert_relative_eq!(reversed.get::<watt>(), -30_000.0, epsilon = 1e-6);
    }

    #[test]
    fn contact_path_matches_raw_form() {
        let path = ContactPath::default();
        let raw = conductive_flux(
            celsius(60.0),
            celsius(20.0),
            path.conductivity(),
            path.area(),
            path.length(),
        );
        assert_eq!(conductive_flux_through(celsius(60.0), celsius(20.0), &path), raw);
    }

    #[test]
    fn heat_and_temperature_change() {
        let q = heat_quantity(Power::new::<watt>(5.5), Time::new::<second>(10.0));
        assert_relative_eq!(q.get::<joule>(), 55.0, epsilon = 1e-12);

        let delta = temperature_delta(
            q,
            Mass::new::<kilogram>(1.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(900.0),
        );
        assert_relative_eq!(delta.get::<delta_kelvin>(), 55.0 / 900.0, epsilon = 1e-12);
    }
}
