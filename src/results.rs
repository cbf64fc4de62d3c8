//! Result types produced by the analysis engine

use serde::{Deserialize, Serialize};

/// Overall safety verdict derived from the maximum stress ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SafetyStatus {
    /// Maximum stress ratio below 0.8
    Pass,
    /// Maximum stress ratio in [0.8, 1.0)
    Warning,
    /// Maximum stress ratio at or above 1.0
    Fail,
}

impl std::fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SafetyStatus::Pass => write!(f, "PASS"),
            SafetyStatus::Warning => write!(f, "WARNING"),
            SafetyStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// Internal forces and derived stress for one member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberForce {
    /// Member identifier
    pub member_id: String,
    /// Axial force (N, tension positive)
    pub axial: f64,
    /// Maximum shear force along the member (N)
    pub shear: f64,
    /// Maximum bending moment along the member (N·mm)
    pub moment: f64,
    /// Combined axial + bending stress (MPa)
    pub stress: f64,
    /// Stress divided by the material yield strength
    pub stress_ratio: f64,
}

/// Reaction force at a supported node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reaction {
    /// Node identifier
    pub node_id: String,
    /// Horizontal reaction (N)
    pub rx: f64,
    /// Vertical reaction (N)
    pub ry: f64,
}

/// Computed displacement at a node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Node identifier
    pub node_id: String,
    /// Horizontal displacement (mm)
    pub dx: f64,
    /// Vertical displacement (mm)
    pub dy: f64,
    /// In-plane rotation (rad); zero for truss analysis
    pub rotation: f64,
}

impl NodeDisplacement {
    /// Euclidean translation magnitude (mm)
    pub fn magnitude(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2)).sqrt()
    }
}

/// Complete results of one solve.
///
/// Produced fresh on every solve and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Forces and stresses per member, in model member order
    pub member_forces: Vec<MemberForce>,
    /// Reactions per support, in model support order
    pub reactions: Vec<Reaction>,
    /// Largest nodal translation magnitude (mm)
    pub max_deflection: f64,
    /// Overall safety verdict
    pub safety_status: SafetyStatus,
    /// Largest member stress ratio
    pub max_stress_ratio: f64,
    /// Displacements per node, in model node order
    pub displacements: Vec<NodeDisplacement>,
}
