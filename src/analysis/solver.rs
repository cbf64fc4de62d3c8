//! Direct stiffness solver for 2D trusses and frames

use std::collections::HashMap;

use log::debug;

use crate::elements::{Material, MaterialCatalog, Section, SectionCatalog};
use crate::error::{SolverError, SolverResult};
use crate::loads::Load;
use crate::math::{self, Mat, Mat6, Vec6};
use crate::model::{StructuralModel, StructureKind};
use crate::results::{AnalysisResults, MemberForce, NodeDisplacement, Reaction};

use super::safety;

/// Degrees of freedom per node: two translations and the in-plane rotation
const DOFS_PER_NODE: usize = 3;

/// Relative tolerance for the post-solve equilibrium residual check
const RESIDUAL_TOL: f64 = 1e-6;

fn truss_local(material: &Material, section: &Section, length: f64) -> Mat6 {
    math::truss_local_stiffness(material.e, section.a, length)
}

fn frame_local(material: &Material, section: &Section, length: f64) -> Mat6 {
    math::frame_local_stiffness(material.e, section.a, section.i, length)
}

/// Per-member data cached between assembly and force extraction
struct MemberState {
    dofs: [usize; 6],
    k_local: Mat6,
    t: Mat6,
}

/// The stiffness solver.
///
/// Holds references to the immutable material and section catalogs; a
/// solve call has no other inputs and no shared mutable state, so distinct
/// solves are independent pure computations.
pub struct Solver<'a> {
    materials: &'a MaterialCatalog,
    sections: &'a SectionCatalog,
}

impl<'a> Solver<'a> {
    /// Create a solver over the given catalogs
    pub fn new(materials: &'a MaterialCatalog, sections: &'a SectionCatalog) -> Self {
        Self {
            materials,
            sections,
        }
    }

    /// Solve the model for the given loads.
    ///
    /// Fails with a configuration error before assembly when the model or
    /// material input is malformed, and with [`SolverError::Singular`] when
    /// the reduced system cannot be solved (unstable or under-constrained
    /// structure).
    pub fn solve(
        &self,
        model: &StructuralModel,
        loads: &[Load],
        material_name: &str,
    ) -> SolverResult<AnalysisResults> {
        model.validate()?;
        let material = self.materials.get(material_name)?;
        let section = self.sections.for_kind(model.structure_kind);
        let index = model.node_index();

        for load in loads {
            if !index.contains_key(load.node_id.as_str()) {
                return Err(SolverError::LoadNodeNotFound(load.node_id.clone()));
            }
        }

        let kind = model.structure_kind;
        let n_dofs = model.nodes.len() * DOFS_PER_NODE;

        // Stiffness formulation is resolved once per solve from the kind.
        let build_local: fn(&Material, &Section, f64) -> Mat6 = match kind {
            StructureKind::Truss => truss_local,
            StructureKind::Frame => frame_local,
        };

        let (k_global, members) =
            self.assemble(model, material, section, &index, build_local, n_dofs);

        let restrained = restrained_dofs(model, &index, n_dofs);
        let p = load_vector(loads, &index, n_dofs);

        let d_full = solve_displacements(&k_global, &p, &restrained)?;

        // Member end forces in local coordinates, then stress and ratio.
        let mut member_forces = Vec::with_capacity(model.members.len());
        let mut max_stress_ratio: f64 = 0.0;
        for (member, state) in model.members.iter().zip(&members) {
            let mut d_member = Vec6::zeros();
            for (a, &dof) in state.dofs.iter().enumerate() {
                d_member[a] = d_full[dof];
            }
            let f_local = state.k_local * (state.t * d_member);

            // Tension positive; maxima of the two end values.
            let axial = -f_local[0];
            let shear = f_local[1].abs().max(f_local[4].abs());
            let moment = f_local[2].abs().max(f_local[5].abs());

            let stress = safety::member_stress(kind, axial, moment, section);
            let stress_ratio = safety::stress_ratio(stress, material);
            max_stress_ratio = max_stress_ratio.max(stress_ratio);

            member_forces.push(MemberForce {
                member_id: member.id.clone(),
                axial,
                shear,
                moment,
                stress,
                stress_ratio,
            });
        }

        // Reactions are the residual forces at restrained DOFs.
        let residual = &k_global * &d_full - &p;
        let mut reactions = Vec::with_capacity(model.supports.len());
        for support in &model.supports {
            let base = index[support.node_id.as_str()] * DOFS_PER_NODE;
            let r = support.restraints(kind);
            reactions.push(Reaction {
                node_id: support.node_id.clone(),
                rx: if r[0] { residual[base] } else { 0.0 },
                ry: if r[1] { residual[base + 1] } else { 0.0 },
            });
        }

        let mut displacements = Vec::with_capacity(model.nodes.len());
        let mut max_deflection: f64 = 0.0;
        for (i, node) in model.nodes.iter().enumerate() {
            let base = i * DOFS_PER_NODE;
            let disp = NodeDisplacement {
                node_id: node.id.clone(),
                dx: d_full[base],
                dy: d_full[base + 1],
                rotation: d_full[base + 2],
            };
            max_deflection = max_deflection.max(disp.magnitude());
            displacements.push(disp);
        }

        Ok(AnalysisResults {
            member_forces,
            reactions,
            max_deflection,
            safety_status: safety::status(max_stress_ratio),
            max_stress_ratio,
            displacements,
        })
    }

    /// Build the global stiffness matrix and per-member state
    fn assemble(
        &self,
        model: &StructuralModel,
        material: &Material,
        section: &Section,
        index: &HashMap<&str, usize>,
        build_local: fn(&Material, &Section, f64) -> Mat6,
        n_dofs: usize,
    ) -> (Mat, Vec<MemberState>) {
        let mut k_global = Mat::zeros(n_dofs, n_dofs);
        let mut members = Vec::with_capacity(model.members.len());

        for member in &model.members {
            let i = index[member.start_node.as_str()];
            let j = index[member.end_node.as_str()];
            let i_node = &model.nodes[i];
            let j_node = &model.nodes[j];
            let length = i_node.distance_to(j_node);

            let k_local = build_local(material, section, length);
            let t = math::member_transformation_matrix(&i_node.coords(), &j_node.coords());

            // Transform to global: K = T^T * k * T, then accumulate by DOF.
            let k_member_global = t.transpose() * k_local * t;

            let i_dof = i * DOFS_PER_NODE;
            let j_dof = j * DOFS_PER_NODE;
            let dofs = [i_dof, i_dof + 1, i_dof + 2, j_dof, j_dof + 1, j_dof + 2];
            for a in 0..6 {
                for b in 0..6 {
                    k_global[(dofs[a], dofs[b])] += k_member_global[(a, b)];
                }
            }

            members.push(MemberState { dofs, k_local, t });
        }

        debug!(
            "assembled global stiffness: {} nodes, {} members, {} dofs",
            model.nodes.len(),
            model.members.len(),
            n_dofs
        );

        (k_global, members)
    }
}

/// Convenience entry point over the builtin material and section catalogs
pub fn solve(
    model: &StructuralModel,
    loads: &[Load],
    material_name: &str,
) -> SolverResult<AnalysisResults> {
    let materials = MaterialCatalog::builtin();
    let sections = SectionCatalog::builtin();
    Solver::new(&materials, &sections).solve(model, loads, material_name)
}

/// Mark restrained DOFs: support restraint patterns, plus the rotational
/// DOF at every node for truss analysis (pin-jointed connections carry no
/// rotational stiffness).
fn restrained_dofs(
    model: &StructuralModel,
    index: &HashMap<&str, usize>,
    n_dofs: usize,
) -> Vec<bool> {
    let mut restrained = vec![false; n_dofs];

    if model.structure_kind == StructureKind::Truss {
        for i in 0..model.nodes.len() {
            restrained[i * DOFS_PER_NODE + 2] = true;
        }
    }

    for support in &model.supports {
        let base = index[support.node_id.as_str()] * DOFS_PER_NODE;
        let pattern = support.restraints(model.structure_kind);
        for (d, &is_restrained) in pattern.iter().enumerate() {
            if is_restrained {
                restrained[base + d] = true;
            }
        }
    }

    restrained
}

/// Assemble the global load vector (forces only; moment loads are not
/// supported)
fn load_vector(loads: &[Load], index: &HashMap<&str, usize>, n_dofs: usize) -> math::Vec {
    let mut p = math::Vec::zeros(n_dofs);
    for load in loads {
        let base = index[load.node_id.as_str()] * DOFS_PER_NODE;
        p[base] += load.fx;
        p[base + 1] += load.fy;
    }
    p
}

/// Partition out restrained DOFs, solve the reduced system, and expand the
/// solution back to the full DOF vector.
fn solve_displacements(
    k_global: &Mat,
    p: &math::Vec,
    restrained: &[bool],
) -> SolverResult<math::Vec> {
    let free: Vec<usize> = (0..restrained.len()).filter(|&d| !restrained[d]).collect();
    if free.is_empty() {
        return Err(SolverError::NoFreeDofs);
    }

    let n_free = free.len();
    let mut k11 = Mat::zeros(n_free, n_free);
    let mut p1 = math::Vec::zeros(n_free);
    for (a, &da) in free.iter().enumerate() {
        p1[a] = p[da];
        for (b, &db) in free.iter().enumerate() {
            k11[(a, b)] = k_global[(da, db)];
        }
    }

    let d1 = math::solve_linear_system(&k11, &p1).ok_or_else(unstable)?;

    // LU can produce garbage on a near-singular system; reject anything
    // non-finite or violating equilibrium instead of returning it.
    if !d1.iter().all(|v| v.is_finite()) {
        return Err(unstable());
    }
    let residual = (&k11 * &d1 - &p1).norm();
    if !residual.is_finite() || residual > RESIDUAL_TOL * (1.0 + p1.norm()) {
        return Err(unstable());
    }

    debug!("solved reduced system: {} free dofs", n_free);

    let mut d_full = math::Vec::zeros(restrained.len());
    for (a, &da) in free.iter().enumerate() {
        d_full[da] = d1[a];
    }
    Ok(d_full)
}

fn unstable() -> SolverError {
    SolverError::Singular(
        "structure is unstable or under-constrained (insufficient supports, \
         disconnected members, or a degenerate topology)"
            .to_string(),
    )
}
