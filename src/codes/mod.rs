//! Building code compliance checks

pub mod aisc;
pub mod nds;

use serde::{Deserialize, Serialize};

use crate::elements::{Material, MaterialCatalog, Section, SectionCatalog};
use crate::error::SolverResult;
use crate::model::StructuralModel;
use crate::results::AnalysisResults;

/// Moments below this magnitude (N·mm) skip the combined-loading check
const MOMENT_THRESHOLD: f64 = 1.0;

/// Design code a check belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DesignCode {
    Aisc,
    Nds,
}

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Pass,
    Fail,
}

/// Result of one code compliance check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeCheckResult {
    /// Design code the check belongs to
    pub code: DesignCode,
    /// Name of the check
    pub check_name: String,
    /// Pass/fail outcome
    pub status: CheckStatus,
    /// Demand/capacity ratio
    pub ratio: f64,
    /// Code section reference
    pub reference: String,
    /// Human-readable detail string
    pub details: String,
}

/// Code check results for one member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCodeCheck {
    /// Member identifier
    pub member_id: String,
    /// Individual check results
    pub checks: Vec<CodeCheckResult>,
    /// FAIL if any individual check failed
    pub overall_status: CheckStatus,
}

/// Run the check suite for one member.
///
/// For AISC: slenderness always runs; the compression or tension capacity
/// check runs by axial sign; combined loading runs when the moment is
/// non-negligible, with the axial capacity taken from the governing
/// (compression or tension) formula. The NDS path is a fixed placeholder.
pub fn check_member(
    member_id: &str,
    length: f64,
    section: &Section,
    material: &Material,
    axial_force: f64,
    moment: f64,
    code: DesignCode,
) -> MemberCodeCheck {
    let mut checks = Vec::new();

    match code {
        DesignCode::Aisc => {
            let r = section.radius_of_gyration();
            checks.push(aisc::check_slenderness(length, r));

            if axial_force < 0.0 {
                checks.push(aisc::check_compression_capacity(
                    section.a,
                    length,
                    r,
                    material,
                    axial_force,
                ));
            } else if axial_force > 0.0 {
                checks.push(aisc::check_tension_capacity(
                    section.a,
                    material,
                    axial_force,
                ));
            }

            if moment.abs() > MOMENT_THRESHOLD {
                let pc = if axial_force < 0.0 {
                    aisc::compression_capacity(section.a, length, r, material)
                } else {
                    aisc::tension_capacity(section.a, material)
                };
                let mc = aisc::moment_capacity(section.section_modulus(), material);
                checks.push(aisc::check_combined_loading(axial_force, moment, pc, mc));
            }
        }
        DesignCode::Nds => {
            checks.push(nds::check_placeholder());
        }
    }

    let overall_status = if checks.iter().any(|c| c.status == CheckStatus::Fail) {
        CheckStatus::Fail
    } else {
        CheckStatus::Pass
    };

    MemberCodeCheck {
        member_id: member_id.to_string(),
        checks,
        overall_status,
    }
}

/// Run code checks for every member of a solved model.
///
/// Uses the builtin material and section catalogs, consistent with
/// [`solve`](crate::analysis::solve): one material and one section profile
/// for the whole model.
pub fn check_results(
    model: &StructuralModel,
    results: &AnalysisResults,
    material_name: &str,
    code: DesignCode,
) -> SolverResult<Vec<MemberCodeCheck>> {
    let materials = MaterialCatalog::builtin();
    let sections = SectionCatalog::builtin();
    let material = materials.get(material_name)?;
    let section = sections.for_kind(model.structure_kind);
    let index = model.node_index();

    let checks = model
        .members
        .iter()
        .zip(&results.member_forces)
        .map(|(member, force)| {
            let start = &model.nodes[index[member.start_node.as_str()]];
            let end = &model.nodes[index[member.end_node.as_str()]];
            check_member(
                &member.id,
                start.distance_to(end),
                section,
                material,
                force.axial,
                force.moment,
                code,
            )
        })
        .collect();

    Ok(checks)
}
