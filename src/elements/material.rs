//! Material properties and the fixed material catalog

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};

/// Material properties for structural analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Material name as known to the catalog
    pub name: String,
    /// Elastic modulus (MPa)
    pub e: f64,
    /// Yield strength (MPa)
    pub fy: f64,
    /// Density (kg/m³)
    pub density: f64,
    /// Human-readable description
    pub description: String,
}

impl Material {
    /// Structural steel (A36)
    pub fn steel() -> Self {
        Self {
            name: "steel".to_string(),
            e: 200_000.0,
            fy: 250.0,
            density: 7850.0,
            description: "Structural Steel (A36)".to_string(),
        }
    }

    /// Aluminum alloy (6061-T6)
    pub fn aluminum() -> Self {
        Self {
            name: "aluminum".to_string(),
            e: 69_000.0,
            fy: 270.0,
            density: 2700.0,
            description: "Aluminum Alloy (6061-T6)".to_string(),
        }
    }

    /// Wood (Southern Pine)
    pub fn wood() -> Self {
        Self {
            name: "wood".to_string(),
            e: 12_000.0,
            fy: 40.0,
            density: 550.0,
            description: "Wood (Southern Pine)".to_string(),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::steel()
    }
}

/// Immutable lookup table of named materials.
///
/// The catalog is passed into the solver rather than held as global state,
/// so a solve call has no hidden inputs.
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    materials: BTreeMap<String, Material>,
}

impl MaterialCatalog {
    /// The fixed builtin catalog: steel, aluminum, wood
    pub fn builtin() -> Self {
        let mut materials = BTreeMap::new();
        for material in [Material::steel(), Material::aluminum(), Material::wood()] {
            materials.insert(material.name.clone(), material);
        }
        Self { materials }
    }

    /// Look up a material by name (case-insensitive).
    ///
    /// Unknown names are a configuration error; analysis never starts.
    pub fn get(&self, name: &str) -> SolverResult<&Material> {
        self.materials
            .get(&name.to_lowercase())
            .ok_or_else(|| SolverError::UnknownMaterial {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    /// Names of all materials in the catalog, sorted
    pub fn names(&self) -> Vec<String> {
        self.materials.keys().cloned().collect()
    }

    /// Iterate over all materials in the catalog
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = MaterialCatalog::builtin();
        assert_eq!(catalog.names(), vec!["aluminum", "steel", "wood"]);

        let steel = catalog.get("steel").unwrap();
        assert_eq!(steel.e, 200_000.0);
        assert_eq!(steel.fy, 250.0);
        assert_eq!(steel.density, 7850.0);
        assert!(steel.description.contains("A36"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = MaterialCatalog::builtin();
        assert_eq!(catalog.get("STEEL").unwrap().name, "steel");
        assert_eq!(catalog.get("Aluminum").unwrap().name, "aluminum");
    }

    #[test]
    fn test_unknown_material_is_error() {
        let catalog = MaterialCatalog::builtin();
        let err = catalog.get("concrete").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("concrete"));
        assert!(message.contains("steel"));
    }

    #[test]
    fn test_relative_stiffness() {
        let catalog = MaterialCatalog::builtin();
        let steel = catalog.get("steel").unwrap();
        let aluminum = catalog.get("aluminum").unwrap();
        let wood = catalog.get("wood").unwrap();
        assert!(steel.e > aluminum.e);
        assert!(aluminum.e > wood.e);
        assert!(steel.density > aluminum.density);
    }
}
