//! structural-core - a native Rust 2D structural analysis engine
//!
//! This library turns a geometric model (nodes, members, supports) plus
//! applied loads into member forces, support reactions, deflections,
//! code-compliance checks, and a pass/fail safety verdict, supporting:
//! - Pin-jointed trusses (axial-only members)
//! - Moment-connected frames (full in-plane bending)
//! - Linear static analysis by the direct stiffness method
//! - AISC-style steel design checks
//! - Factored load combinations with envelope aggregation
//!
//! ## Example
//! ```rust
//! use structural_core::prelude::*;
//!
//! let model = StructuralModel::new(
//!     StructureKind::Truss,
//!     vec![
//!         Node::new("N1", 0.0, 0.0),
//!         Node::new("N2", 1000.0, 0.0),
//!         Node::new("N3", 500.0, 866.0),
//!     ],
//!     vec![
//!         Member::new("M1", "N1", "N2"),
//!         Member::new("M2", "N2", "N3"),
//!         Member::new("M3", "N3", "N1"),
//!     ],
//!     vec![Support::pin("N1"), Support::roller("N2")],
//! );
//!
//! let loads = vec![Load::fy("N3", -1000.0)];
//! let results = solve(&model, &loads, "steel").unwrap();
//!
//! assert_eq!(results.member_forces.len(), 3);
//! assert_eq!(results.safety_status, SafetyStatus::Pass);
//! ```

pub mod analysis;
pub mod codes;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{envelope, solve, solve_with_combinations, Solver};
    pub use crate::codes::{
        check_member, check_results, CheckStatus, CodeCheckResult, DesignCode, MemberCodeCheck,
    };
    pub use crate::elements::{
        Material, MaterialCatalog, Member, Node, Section, SectionCatalog, Support, SupportKind,
    };
    pub use crate::error::{SolverError, SolverResult};
    pub use crate::loads::{Load, LoadCase, LoadCategory, LoadCombination};
    pub use crate::model::{StructuralModel, StructureKind};
    pub use crate::results::{
        AnalysisResults, MemberForce, NodeDisplacement, Reaction, SafetyStatus,
    };
}
