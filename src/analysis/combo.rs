//! Load combination engine - factored solves and envelope aggregation

use std::collections::BTreeMap;

use log::{debug, info};

use crate::elements::{MaterialCatalog, SectionCatalog};
use crate::error::{SolverError, SolverResult};
use crate::loads::{Load, LoadCase, LoadCombination};
use crate::model::StructuralModel;
use crate::results::{AnalysisResults, MemberForce};

use super::safety;
use super::solver::Solver;

impl<'a> Solver<'a> {
    /// Solve the model once per load combination.
    ///
    /// Loads from each referenced case are scaled by the combination's
    /// factor and accumulated per node, then the model is solved with the
    /// factored loads. A combination referencing an undefined load case
    /// fails the whole batch before any solve runs; partial results are
    /// never returned.
    pub fn solve_with_combinations(
        &self,
        model: &StructuralModel,
        cases: &[LoadCase],
        combinations: &[LoadCombination],
        material_name: &str,
    ) -> SolverResult<BTreeMap<String, AnalysisResults>> {
        let case_index: BTreeMap<&str, &LoadCase> =
            cases.iter().map(|case| (case.name.as_str(), case)).collect();

        // Fail fast on dangling case references before solving anything.
        for combo in combinations {
            for case_name in combo.factors.keys() {
                if !case_index.contains_key(case_name.as_str()) {
                    return Err(SolverError::LoadCaseNotFound {
                        combination: combo.name.clone(),
                        case: case_name.clone(),
                    });
                }
            }
        }

        let mut results = BTreeMap::new();
        for combo in combinations {
            let loads = factored_loads(combo, &case_index);
            debug!(
                "solving combination '{}': {} factored nodal loads",
                combo.name,
                loads.len()
            );
            let result = self.solve(model, &loads, material_name)?;
            results.insert(combo.name.clone(), result);
        }

        info!("solved {} load combinations", results.len());
        Ok(results)
    }
}

/// Sum each referenced case's loads scaled by its factor, accumulating
/// per-node components additively across cases.
fn factored_loads(
    combo: &LoadCombination,
    case_index: &BTreeMap<&str, &LoadCase>,
) -> Vec<Load> {
    let mut accumulated: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for (case_name, &factor) in &combo.factors {
        let case = case_index[case_name.as_str()];
        for load in &case.loads {
            let entry = accumulated.entry(load.node_id.as_str()).or_insert((0.0, 0.0));
            entry.0 += factor * load.fx;
            entry.1 += factor * load.fy;
        }
    }

    accumulated
        .into_iter()
        .map(|(node_id, (fx, fy))| Load::new(node_id, fx, fy))
        .collect()
}

/// Convenience entry point over the builtin material and section catalogs
pub fn solve_with_combinations(
    model: &StructuralModel,
    cases: &[LoadCase],
    combinations: &[LoadCombination],
    material_name: &str,
) -> SolverResult<BTreeMap<String, AnalysisResults>> {
    let materials = MaterialCatalog::builtin();
    let sections = SectionCatalog::builtin();
    Solver::new(&materials, &sections).solve_with_combinations(
        model,
        cases,
        combinations,
        material_name,
    )
}

/// Compute the worst-case envelope across combination results.
///
/// Per member, the envelope takes the force of greatest magnitude (sign
/// preserved) and the maximum stress and stress ratio observed in any
/// combination - a true per-member worst case, not a linear combination.
/// Reactions and displacements are reused from the governing combination,
/// the one with the highest overall stress ratio. All results must come
/// from the same model, so member lists line up by position.
pub fn envelope(results: &BTreeMap<String, AnalysisResults>) -> SolverResult<AnalysisResults> {
    let governing = results
        .values()
        .max_by(|a, b| a.max_stress_ratio.total_cmp(&b.max_stress_ratio))
        .ok_or(SolverError::EmptyEnvelope)?;

    let mut member_forces: Vec<MemberForce> = governing.member_forces.clone();
    let mut max_deflection = governing.max_deflection;

    for result in results.values() {
        max_deflection = max_deflection.max(result.max_deflection);
        for (enveloped, candidate) in member_forces.iter_mut().zip(&result.member_forces) {
            enveloped.axial = max_magnitude(enveloped.axial, candidate.axial);
            enveloped.shear = max_magnitude(enveloped.shear, candidate.shear);
            enveloped.moment = max_magnitude(enveloped.moment, candidate.moment);
            enveloped.stress = enveloped.stress.max(candidate.stress);
            enveloped.stress_ratio = enveloped.stress_ratio.max(candidate.stress_ratio);
        }
    }

    let max_stress_ratio = member_forces
        .iter()
        .map(|mf| mf.stress_ratio)
        .fold(0.0_f64, f64::max);

    Ok(AnalysisResults {
        member_forces,
        reactions: governing.reactions.clone(),
        max_deflection,
        safety_status: safety::status(max_stress_ratio),
        max_stress_ratio,
        displacements: governing.displacements.clone(),
    })
}

fn max_magnitude(a: f64, b: f64) -> f64 {
    if b.abs() > a.abs() {
        b
    } else {
        a
    }
}
