//! Point loads applied directly to nodes

use serde::{Deserialize, Serialize};

/// A point load applied to a node.
///
/// Components are in Newtons in global coordinates. Multiple loads at one
/// node are additive. Moment loads are not supported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Load {
    /// Id of the loaded node
    pub node_id: String,
    /// Force in X direction (N)
    #[serde(default)]
    pub fx: f64,
    /// Force in Y direction (N)
    #[serde(default)]
    pub fy: f64,
}

impl Load {
    /// Create a load with both components
    pub fn new(node_id: &str, fx: f64, fy: f64) -> Self {
        Self {
            node_id: node_id.to_string(),
            fx,
            fy,
        }
    }

    /// Create a horizontal load
    pub fn fx(node_id: &str, value: f64) -> Self {
        Self::new(node_id, value, 0.0)
    }

    /// Create a vertical load
    pub fn fy(node_id: &str, value: f64) -> Self {
        Self::new(node_id, 0.0, value)
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            node_id: self.node_id.clone(),
            fx: self.fx * factor,
            fy: self.fy * factor,
        }
    }
}
