use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for temperature differences and offsets.
///
/// [`minus`](Self::minus) subtracts two absolute temperatures to get a
/// [`TemperatureInterval`], and [`plus`](Self::plus) shifts an absolute
/// temperature by an interval.
///
/// Both are computed on the kelvin scale, so the result does not depend on the
/// units the operands were created in.
/// For background on the absolute/interval distinction in [`uom`]:
/// [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#289](https://github.com/iliekturtles/uom/issues/289).
///
/// [`TemperatureInterval`]: uom::si::f64::TemperatureInterval
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;

    /// Returns `self` shifted by `delta`.
    fn plus(self, delta: TemperatureInterval) -> Self;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }

    fn plus(self, delta: TemperatureInterval) -> Self {
        ThermodynamicTemperature::new::<abs_kelvin>(
            self.get::<abs_kelvin>() + delta.get::<delta_kelvin>(),
        )
    }
}
