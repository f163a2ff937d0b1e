//! Read-only catalog of material properties.
//!
//! A [`MaterialCatalog`] is loaded once from JSON and never modified. It maps
//! material ids and names to constant properties, and convection preset keys
//! to typical heat transfer coefficients. Pass it by reference to whatever
//! constructs bodies; no global state is involved.
//!
//! # Format
//!
//! ```json
//! {
//!   "materials": [
//!     {
//!       "id": 2,
//!       "name": "Aluminum",
//!       "specific_heat": 900.0,
//!       "density": 2700.0,
//!       "thermal_conductivity": 237.0,
//!       "description": "Light metal with high thermal conductivity",
//!       "applications": ["heat sinks"]
//!     }
//!   ],
//!   "convection_coefficients": {
//!     "still_air": { "value": 10.0, "range": "5-25", "description": "Natural convection in still air" }
//!   }
//! }
//! ```
//!
//! Values are SI: J/(kg·K), kg/m³, W/(m·K), and W/(m²·K).
//! `thermal_conductivity`, `description`, `applications`, and
//! `convection_coefficients` are optional.
//!
//! # Example
//!
//! ```
//! use twine_lumped::support::materials::MaterialCatalog;
//! use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
//!
//! let catalog = MaterialCatalog::builtin().unwrap();
//! let aluminum = catalog.lookup("aluminum").unwrap();
//! assert_eq!(aluminum.specific_heat().get::<joule_per_kilogram_kelvin>(), 900.0);
//! assert_eq!(catalog.lookup("2").unwrap().name(), "Aluminum");
//! ```

use std::{
    collections::{BTreeMap, HashSet},
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use uom::si::{
    f64::{HeatTransfer, MassDensity, SpecificHeatCapacity, ThermalConductivity},
    heat_transfer::watt_per_square_meter_kelvin,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::constraint::{ConstraintError, StrictlyPositive};

const BUILTIN: &str = include_str!("materials/builtin.json");

/// Errors raised while loading or querying a [`MaterialCatalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No material matches the id or name.
    #[error("unknown material: {key:?}")]
    UnknownMaterial { key: String },

    /// No convection preset matches the key.
    #[error("unknown convection preset: {key:?}")]
    UnknownConvection { key: String },

    /// Two materials share an id.
    #[error("duplicate material id {id}")]
    DuplicateId { id: u32 },

    /// A material or preset property violates its constraint.
    #[error("invalid {property} for {entry:?}: {source}")]
    InvalidProperty {
        entry: String,
        property: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The catalog is not valid JSON or does not match the expected shape.
    #[error("malformed catalog")]
    Parse(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("failed to read catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Constant properties of a named material.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Material {
    id: u32,
    name: String,
    specific_heat: f64,
    density: f64,
    #[serde(default)]
    thermal_conductivity: Option<f64>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    applications: Vec<String>,
}

impl Material {
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(self.specific_heat)
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(self.density)
    }

    /// Conductivity, if the catalog lists one.
    #[must_use]
    pub fn thermal_conductivity(&self) -> Option<ThermalConductivity> {
        self.thermal_conductivity
            .map(ThermalConductivity::new::<watt_per_meter_kelvin>)
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn applications(&self) -> &[String] {
        &self.applications
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |property: &'static str| {
            move |source| CatalogError::InvalidProperty {
                entry: self.name.clone(),
                property,
                source,
            }
        };
        StrictlyPositive::new(self.specific_heat).map_err(invalid("specific heat"))?;
        StrictlyPositive::new(self.density).map_err(invalid("density"))?;
        if let Some(k) = self.thermal_conductivity {
            StrictlyPositive::new(k).map_err(invalid("thermal conductivity"))?;
        }
        Ok(())
    }
}

/// A typical convection coefficient for a named situation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConvectionPreset {
    value: f64,
    #[serde(default)]
    range: String,
    #[serde(default)]
    description: String,
}

impl ConvectionPreset {
    #[must_use]
    pub fn coefficient(&self) -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(self.value)
    }

    /// Typical range as written in the catalog, e.g. `"5-25"`.
    #[must_use]
    pub fn range(&self) -> &str {
        &self.range
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Immutable lookup of materials and convection presets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
    #[serde(default)]
    convection_coefficients: BTreeMap<String, ConvectionPreset>,
}

impl MaterialCatalog {
    /// Loads the catalog bundled with this crate.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled data is corrupt.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN)
    }

    /// Parses and validates a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON,
    /// [`CatalogError::DuplicateId`] for repeated ids, and
    /// [`CatalogError::InvalidProperty`] for non-positive properties.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()
    }

    /// Parses and validates a catalog from a reader.
    ///
    /// # Errors
    ///
    /// Same as [`MaterialCatalog::from_json_str`].
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_reader(reader)?;
        catalog.validate()
    }

    /// Reads, parses, and validates a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be opened, otherwise
    /// the same errors as [`MaterialCatalog::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading material catalog");
        Self::from_reader(BufReader::new(file))
    }

    fn validate(self) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for material in &self.materials {
            if !ids.insert(material.id) {
                return Err(CatalogError::DuplicateId { id: material.id });
            }
            material.validate()?;
        }
        for (key, preset) in &self.convection_coefficients {
            StrictlyPositive::new(preset.value).map_err(|source| {
                CatalogError::InvalidProperty {
                    entry: key.clone(),
                    property: "convection coefficient",
                    source,
                }
            })?;
        }
        debug!(
            materials = self.materials.len(),
            presets = self.convection_coefficients.len(),
            "material catalog loaded"
        );
        Ok(self)
    }

    /// All materials in catalog order.
    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownMaterial`] if no material has this id.
    pub fn by_id(&self, id: u32) -> Result<&Material, CatalogError> {
        self.materials
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| CatalogError::UnknownMaterial {
                key: id.to_string(),
            })
    }

    /// Case-insensitive lookup by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownMaterial`] if no material has this name.
    pub fn by_name(&self, name: &str) -> Result<&Material, CatalogError> {
        self.materials
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| CatalogError::UnknownMaterial {
                key: name.to_owned(),
            })
    }

    /// Looks up by id when `key` is a number, otherwise by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownMaterial`] if nothing matches.
    pub fn lookup(&self, key: &str) -> Result<&Material, CatalogError> {
        match key.trim().parse::<u32>() {
            Ok(id) => self.by_id(id),
            Err(_) => self.by_name(key),
        }
    }

    /// Convection presets keyed by name, in key order.
    pub fn convection_presets(&self) -> impl Iterator<Item = (&str, &ConvectionPreset)> {
        self.convection_coefficients
            .iter()
            .map(|(key, preset)| (key.as_str(), preset))
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownConvection`] if no preset has this key.
    pub fn convection_coefficient(&self, key: &str) -> Result<&ConvectionPreset, CatalogError> {
        self.convection_coefficients
            .get(key)
            .ok_or_else(|| CatalogError::UnknownConvection {
                key: key.to_owned(),
            })
    }
}
