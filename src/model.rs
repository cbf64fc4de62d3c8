//! Structural model - the immutable input to the solver

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::elements::{Member, Node, Support};
use crate::error::{SolverError, SolverResult};

/// Whether members transfer moment at their connections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureKind {
    /// Pin-jointed: members carry axial force only
    #[default]
    Truss,
    /// Moment-connected: members carry axial, shear, and bending
    Frame,
}

/// Complete structural model definition.
///
/// Produced whole by the upstream geometry extractor and treated as
/// immutable by the solver. [`validate`](StructuralModel::validate) reports
/// configuration errors before any assembly happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuralModel {
    /// Connection behavior for every member in the model
    #[serde(default)]
    pub structure_kind: StructureKind,
    /// Nodes in the model
    pub nodes: Vec<Node>,
    /// Members connecting the nodes
    pub members: Vec<Member>,
    /// Support conditions
    pub supports: Vec<Support>,
}

impl StructuralModel {
    /// Create a model from its parts
    pub fn new(
        structure_kind: StructureKind,
        nodes: Vec<Node>,
        members: Vec<Member>,
        supports: Vec<Support>,
    ) -> Self {
        Self {
            structure_kind,
            nodes,
            members,
            supports,
        }
    }

    /// Map node id -> position in the node list.
    ///
    /// Positions double as DOF block indices during assembly.
    pub fn node_index(&self) -> HashMap<&str, usize> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.as_str(), i))
            .collect()
    }

    /// Check model consistency: unique ids, members referencing existing
    /// nodes with nonzero length, at most one support per node, supports
    /// placed on existing nodes.
    pub fn validate(&self) -> SolverResult<()> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        for (i, node) in self.nodes.iter().enumerate() {
            if index.insert(node.id.as_str(), i).is_some() {
                return Err(SolverError::DuplicateNode(node.id.clone()));
            }
        }

        let mut member_ids: HashSet<&str> = HashSet::new();
        for member in &self.members {
            if !member_ids.insert(member.id.as_str()) {
                return Err(SolverError::DuplicateMember(member.id.clone()));
            }
            for node_id in [&member.start_node, &member.end_node] {
                if !index.contains_key(node_id.as_str()) {
                    return Err(SolverError::NodeNotFound {
                        member: member.id.clone(),
                        node: node_id.clone(),
                    });
                }
            }
            let start = &self.nodes[index[member.start_node.as_str()]];
            let end = &self.nodes[index[member.end_node.as_str()]];
            if member.start_node == member.end_node || start.distance_to(end) < 1e-10 {
                return Err(SolverError::ZeroLengthMember(member.id.clone()));
            }
        }

        let mut supported: HashSet<&str> = HashSet::new();
        for support in &self.supports {
            if !index.contains_key(support.node_id.as_str()) {
                return Err(SolverError::SupportNodeNotFound(support.node_id.clone()));
            }
            if !supported.insert(support.node_id.as_str()) {
                return Err(SolverError::DuplicateSupport(support.node_id.clone()));
            }
        }

        Ok(())
    }
}
