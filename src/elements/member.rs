//! Member element - a 2D bar or beam connecting two nodes

use serde::{Deserialize, Serialize};

fn default_material() -> String {
    "steel".to_string()
}

/// A structural member connecting two nodes.
///
/// Whether the member carries axial force only or full in-plane bending is
/// decided by the model's [`StructureKind`](crate::model::StructureKind),
/// not per member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique member identifier
    pub id: String,
    /// Id of the start node
    pub start_node: String,
    /// Id of the end node
    pub end_node: String,
    /// Name of the material, resolved against the material catalog
    #[serde(default = "default_material")]
    pub material: String,
}

impl Member {
    /// Create a new member with the default steel material
    pub fn new(id: &str, start_node: &str, end_node: &str) -> Self {
        Self {
            id: id.to_string(),
            start_node: start_node.to_string(),
            end_node: end_node.to_string(),
            material: default_material(),
        }
    }

    /// Set the member material name
    pub fn with_material(mut self, material: &str) -> Self {
        self.material = material.to_string();
        self
    }
}
