//! Cross-section properties and the per-structure-kind section catalog

use serde::{Deserialize, Serialize};

use crate::model::StructureKind;

/// Cross-section properties for a member.
///
/// Units follow the model: mm², mm⁴, mm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Section {
    /// Cross-sectional area (mm²)
    pub a: f64,
    /// Moment of inertia about the bending axis (mm⁴)
    pub i: f64,
    /// Torsional constant (mm⁴)
    pub j: f64,
    /// Section depth (mm), used for extreme-fiber bending stress
    pub depth: f64,
}

impl Section {
    /// Create a section with the given properties
    pub fn new(a: f64, i: f64, j: f64, depth: f64) -> Self {
        Self { a, i, j, depth }
    }

    /// Fixed profile for pin-jointed truss members
    pub fn truss() -> Self {
        Self::new(500.0, 5000.0, 10_000.0, 30.0)
    }

    /// Fixed profile for moment-resisting frame members
    pub fn frame() -> Self {
        Self::new(2000.0, 200_000.0, 400_000.0, 60.0)
    }

    /// Radius of gyration r = sqrt(I/A) (mm)
    pub fn radius_of_gyration(&self) -> f64 {
        (self.i / self.a).sqrt()
    }

    /// Elastic section modulus S = I / (depth/2) (mm³)
    pub fn section_modulus(&self) -> f64 {
        self.i / (self.depth / 2.0)
    }
}

/// Fixed cross-section lookup by structure kind.
///
/// The engine performs section-property lookup, not section design: every
/// member of a model shares the profile of its structure kind.
#[derive(Debug, Clone, Copy)]
pub struct SectionCatalog {
    truss: Section,
    frame: Section,
}

impl SectionCatalog {
    /// The builtin catalog with the fixed truss and frame profiles
    pub fn builtin() -> Self {
        Self {
            truss: Section::truss(),
            frame: Section::frame(),
        }
    }

    /// Get the section profile for a structure kind
    pub fn for_kind(&self, kind: StructureKind) -> &Section {
        match kind {
            StructureKind::Truss => &self.truss,
            StructureKind::Frame => &self.frame,
        }
    }
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
