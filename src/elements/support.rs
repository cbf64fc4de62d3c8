//! Support conditions

use serde::{Deserialize, Serialize};

use crate::model::StructureKind;

/// The constraint pattern a support applies at its node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportKind {
    /// Restrains both translations, rotation free
    Pin,
    /// Restrains the vertical translation only
    Roller,
    /// Restrains both translations and, for frames, rotation
    Fixed,
}

/// A support record at a node.
///
/// Each node may carry at most one support record; the model validator
/// rejects duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Support {
    /// Id of the supported node
    pub node_id: String,
    /// Constraint kind
    #[serde(rename = "type")]
    pub kind: SupportKind,
}

impl Support {
    /// Create a pin support at a node
    pub fn pin(node_id: &str) -> Self {
        Self {
            node_id: node_id.to_string(),
            kind: SupportKind::Pin,
        }
    }

    /// Create a roller support at a node
    pub fn roller(node_id: &str) -> Self {
        Self {
            node_id: node_id.to_string(),
            kind: SupportKind::Roller,
        }
    }

    /// Create a fixed support at a node
    pub fn fixed(node_id: &str) -> Self {
        Self {
            node_id: node_id.to_string(),
            kind: SupportKind::Fixed,
        }
    }

    /// Restraint pattern [ux, uy, rz] for this support under the given
    /// structure kind.
    ///
    /// Truss analysis restrains rz at every node already, so a fixed
    /// support only adds rotational restraint in frame analysis.
    pub fn restraints(&self, kind: StructureKind) -> [bool; 3] {
        match self.kind {
            SupportKind::Pin => [true, true, false],
            SupportKind::Roller => [false, true, false],
            SupportKind::Fixed => [true, true, kind == StructureKind::Frame],
        }
    }
}
