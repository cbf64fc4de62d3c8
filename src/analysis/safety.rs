//! Safety evaluation - member stress, stress ratio, and the overall verdict

use crate::elements::{Material, Section};
use crate::model::StructureKind;
use crate::results::SafetyStatus;

/// Stress ratio at or above this is a WARNING
pub const WARNING_THRESHOLD: f64 = 0.8;
/// Stress ratio at or above this is a FAIL
pub const FAIL_THRESHOLD: f64 = 1.0;

/// Compute the governing stress for a member (MPa).
///
/// Truss members carry axial stress only. Frame members superpose axial and
/// extreme-fiber bending stress with no interaction reduction; the AISC
/// combined check is where interaction is applied.
pub fn member_stress(kind: StructureKind, axial: f64, moment: f64, section: &Section) -> f64 {
    let axial_stress = axial.abs() / section.a;
    match kind {
        StructureKind::Truss => axial_stress,
        StructureKind::Frame => {
            axial_stress + moment.abs() * (section.depth / 2.0) / section.i
        }
    }
}

/// Stress divided by the material yield strength
pub fn stress_ratio(stress: f64, material: &Material) -> f64 {
    stress / material.fy
}

/// Derive the tri-state verdict from the maximum stress ratio
pub fn status(max_stress_ratio: f64) -> SafetyStatus {
    if max_stress_ratio >= FAIL_THRESHOLD {
        SafetyStatus::Fail
    } else if max_stress_ratio >= WARNING_THRESHOLD {
        SafetyStatus::Warning
    } else {
        SafetyStatus::Pass
    }
}
