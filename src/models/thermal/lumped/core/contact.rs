use uom::si::{
    area::square_meter,
    f64::{Area, Length, ThermalConductivity},
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    materials::Material,
};

use super::ConfigError;

/// Direct conduction path between two bodies in contact.
///
/// The path is a slab of the given material with cross-section `area` and
/// thickness `length`. All three quantities are strictly positive, so the
/// conductive flux never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactPath {
    conductivity: ThermalConductivity,
    area: Area,
    length: Length,
}

impl ContactPath {
    /// Creates a contact path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if any quantity is not
    /// strictly positive.
    pub fn new(
        conductivity: ThermalConductivity,
        area: Area,
        length: Length,
    ) -> Result<Self, ConfigError> {
        let conductivity = StrictlyPositive::new(conductivity)
            .map_err(ConfigError::invalid("thermal conductivity"))?;
        let area = StrictlyPositive::new(area).map_err(ConfigError::invalid("contact area"))?;
        let length = StrictlyPositive::new(length).map_err(ConfigError::invalid("path length"))?;
        Ok(Self::from_constrained(conductivity, area, length))
    }

    /// Creates a contact path through a catalog material.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingConductivity`] if the material has no
    /// conductivity, otherwise the same errors as [`ContactPath::new`].
    pub fn with_material(
        material: &Material,
        area: Area,
        length: Length,
    ) -> Result<Self, ConfigError> {
        let conductivity = material.thermal_conductivity().ok_or_else(|| {
            ConfigError::MissingConductivity {
                material: material.name().to_owned(),
            }
        })?;
        Self::new(conductivity, area, length)
    }

    /// Creates a contact path from pre-validated quantities.
    #[must_use]
    pub fn from_constrained(
        conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
        area: Constrained<Area, StrictlyPositive>,
        length: Constrained<Length, StrictlyPositive>,
    ) -> Self {
        Self {
            conductivity: conductivity.into_inner(),
            area: area.into_inner(),
            length: length.into_inner(),
        }
    }

    #[must_use]
    pub fn conductivity(&self) -> ThermalConductivity {
        self.conductivity
    }

    #[must_use]
    pub fn area(&self) -> Area {
        self.area
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }
}

/// A 1 mm, 0.01 m² path with k = 50 W/(m·K) (roughly carbon steel).
impl Default for ContactPath {
    fn default() -> Self {
        Self {
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(50.0),
            area: Area::new::<square_meter>(0.01),
            length: Length::new::<meter>(0.001),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::materials::MaterialCatalog;

    #[test]
    fn rejects_zero_path_length() {
        let result = ContactPath::new(
            ThermalConductivity::new::<watt_per_meter_kelvin>(50.0),
            Area::new::<square_meter>(0.01),
            Length::new::<meter>(0.0),
        );

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                parameter: "path length",
                ..
            })
        ));
    }

    #[test]
    fn default_is_valid() {
        let path = ContactPath::default();
        let rebuilt = ContactPath::new(path.conductivity(), path.area(), path.length()).unwrap();
        assert_eq!(path, rebuilt);
    }

    #[test]
    fn uses_material_conductivity() {
        let catalog = MaterialCatalog::builtin().unwrap();
        let copper = catalog.by_name("copper").unwrap();

        let path = ContactPath::with_material(
            copper,
            Area::new::<square_meter>(0.01),
            Length::new::<meter>(0.002),
        )
        .unwrap();

        assert_eq!(path.conductivity(), copper.thermal_conductivity().unwrap());
    }

    #[test]
    fn material_without_conductivity_is_rejected() {
        let catalog = MaterialCatalog::from_json_str(
            r#"{ "materials": [
                { "id": 1, "name": "Mystery", "specific_heat": 1000.0, "density": 1000.0 }
            ] }"#,
        )
        .unwrap();

        let result = ContactPath::with_material(
            catalog.by_id(1).unwrap(),
            Area::new::<square_meter>(0.01),
            Length::new::<meter>(0.001),
        );

        assert!(matches!(
            result,
            Err(ConfigError::MissingConductivity { material }) if material == "Mystery"
        ));
    }
}
