//! Load cases - named, physically meaningful groups of loads

use serde::{Deserialize, Serialize};

use super::Load;

/// Category of a load case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadCategory {
    Dead,
    Live,
    Wind,
    Snow,
    Seismic,
    #[default]
    Other,
}

/// A load case groups related loads under a common name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCase {
    /// Name of the load case, referenced by combinations
    pub name: String,
    /// Category tag
    #[serde(rename = "type", default)]
    pub category: LoadCategory,
    /// Loads belonging to this case
    pub loads: Vec<Load>,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LoadCase {
    /// Create a new load case
    pub fn new(name: &str, category: LoadCategory, loads: Vec<Load>) -> Self {
        Self {
            name: name.to_string(),
            category,
            loads,
            description: None,
        }
    }

    /// Set a description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Create a dead load case
    pub fn dead(name: &str, loads: Vec<Load>) -> Self {
        Self::new(name, LoadCategory::Dead, loads)
    }

    /// Create a live load case
    pub fn live(name: &str, loads: Vec<Load>) -> Self {
        Self::new(name, LoadCategory::Live, loads)
    }

    /// Create a wind load case
    pub fn wind(name: &str, loads: Vec<Load>) -> Self {
        Self::new(name, LoadCategory::Wind, loads)
    }
}
