//! AISC 360-16 style steel design checks
//!
//! Pure functions over member geometry and forces; independent of the
//! stiffness solver. Axial force follows the solver convention: tension
//! positive, compression negative.

use std::f64::consts::PI;

use super::{CheckStatus, CodeCheckResult, DesignCode};
use crate::elements::Material;

/// Effective length factor, pinned-end assumption
const K: f64 = 1.0;

/// Limiting slenderness ratio for compression members (E2)
const SLENDERNESS_LIMIT: f64 = 200.0;

/// Resistance factor for compression, tension yielding, and flexure
const PHI: f64 = 0.90;

/// Ratio reported when a capacity is invalid
const INVALID_CAPACITY_RATIO: f64 = 999.0;

/// Check the slenderness ratio KL/r against the E2 limit of 200
pub fn check_slenderness(length: f64, radius_of_gyration: f64) -> CodeCheckResult {
    let slenderness = if radius_of_gyration > 0.0 {
        K * length / radius_of_gyration
    } else {
        0.0
    };
    let ratio = slenderness / SLENDERNESS_LIMIT;

    CodeCheckResult {
        code: DesignCode::Aisc,
        check_name: "Slenderness Ratio".to_string(),
        status: if slenderness <= SLENDERNESS_LIMIT {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        },
        ratio,
        reference: "AISC 360-16 Section E2".to_string(),
        details: format!("KL/r = {slenderness:.1}, Limit = {SLENDERNESS_LIMIT:.1}"),
    }
}

/// Design compressive capacity Pc = 0.90 * Fcr * A (N).
///
/// Fcr uses the Chapter E column curve: inelastic buckling
/// 0.658^(fy/Fe) * fy when Fe >= 0.44 fy, elastic buckling 0.877 Fe
/// otherwise, with Fe the Euler stress pi^2 E / (KL/r)^2.
pub fn compression_capacity(
    area: f64,
    length: f64,
    radius_of_gyration: f64,
    material: &Material,
) -> f64 {
    let fe = if radius_of_gyration > 0.0 {
        let kl_r = K * length / radius_of_gyration;
        PI.powi(2) * material.e / kl_r.powi(2)
    } else {
        0.0
    };

    let fcr = if fe >= 0.44 * material.fy {
        0.658_f64.powf(material.fy / fe) * material.fy
    } else {
        0.877 * fe
    };

    PHI * fcr * area
}

/// Design tensile capacity Pt = 0.90 * fy * A (N)
pub fn tension_capacity(area: f64, material: &Material) -> f64 {
    PHI * material.fy * area
}

/// Design moment capacity Mc = 0.90 * fy * S (N·mm)
pub fn moment_capacity(section_modulus: f64, material: &Material) -> f64 {
    PHI * material.fy * section_modulus
}

/// Check compression capacity per Chapter E.
///
/// Tension members report PASS with ratio 0 (not applicable).
pub fn check_compression_capacity(
    area: f64,
    length: f64,
    radius_of_gyration: f64,
    material: &Material,
    axial_force: f64,
) -> CodeCheckResult {
    let reference = "AISC 360-16 Chapter E".to_string();

    if axial_force >= 0.0 {
        return CodeCheckResult {
            code: DesignCode::Aisc,
            check_name: "Compression Capacity".to_string(),
            status: CheckStatus::Pass,
            ratio: 0.0,
            reference,
            details: "Member in tension, compression check not applicable".to_string(),
        };
    }

    let pc = compression_capacity(area, length, radius_of_gyration, material);
    let demand = axial_force.abs();
    let ratio = if pc > 0.0 {
        demand / pc
    } else {
        INVALID_CAPACITY_RATIO
    };

    CodeCheckResult {
        code: DesignCode::Aisc,
        check_name: "Compression Capacity".to_string(),
        status: if ratio <= 1.0 {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        },
        ratio,
        reference,
        details: format!("Pu = {demand:.1} N, φPn = {pc:.1} N, Ratio = {ratio:.3}"),
    }
}

/// Check tension capacity per Chapter D.
///
/// Compression members report PASS with ratio 0 (not applicable).
pub fn check_tension_capacity(
    area: f64,
    material: &Material,
    axial_force: f64,
) -> CodeCheckResult {
    let reference = "AISC 360-16 Chapter D".to_string();

    if axial_force <= 0.0 {
        return CodeCheckResult {
            code: DesignCode::Aisc,
            check_name: "Tension Capacity".to_string(),
            status: CheckStatus::Pass,
            ratio: 0.0,
            reference,
            details: "Member in compression, tension check not applicable".to_string(),
        };
    }

    let pt = tension_capacity(area, material);
    let ratio = if pt > 0.0 {
        axial_force / pt
    } else {
        INVALID_CAPACITY_RATIO
    };

    CodeCheckResult {
        code: DesignCode::Aisc,
        check_name: "Tension Capacity".to_string(),
        status: if ratio <= 1.0 {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        },
        ratio,
        reference,
        details: format!("Pu = {axial_force:.1} N, φPn = {pt:.1} N, Ratio = {ratio:.3}"),
    }
}

/// Check combined axial and bending per the Chapter H interaction
/// equations: H1-1a when Pu/Pc >= 0.2, H1-1b otherwise.
pub fn check_combined_loading(
    axial_force: f64,
    moment: f64,
    pc: f64,
    mc: f64,
) -> CodeCheckResult {
    let reference = "AISC 360-16 Chapter H".to_string();

    if pc <= 0.0 || mc <= 0.0 {
        return CodeCheckResult {
            code: DesignCode::Aisc,
            check_name: "Combined Loading".to_string(),
            status: CheckStatus::Fail,
            ratio: INVALID_CAPACITY_RATIO,
            reference,
            details: "Invalid capacity values".to_string(),
        };
    }

    let pu = axial_force.abs();
    let mu = moment.abs();
    let axial_ratio = pu / pc;

    let ratio = if axial_ratio >= 0.2 {
        // H1-1a: (Pr/Pc) + (8/9)(Mr/Mc)
        axial_ratio + (8.0 / 9.0) * (mu / mc)
    } else {
        // H1-1b: (Pr/2Pc) + (Mr/Mc)
        axial_ratio / 2.0 + mu / mc
    };

    CodeCheckResult {
        code: DesignCode::Aisc,
        check_name: "Combined Loading".to_string(),
        status: if ratio <= 1.0 {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        },
        ratio,
        reference,
        details: format!(
            "Pu/Pc = {axial_ratio:.3}, Mu/Mc = {:.3}, Interaction = {ratio:.3}",
            mu / mc
        ),
    }
}
