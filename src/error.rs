//! Error types for the structural analysis engine

use thiserror::Error;

/// Main error type for analysis operations.
///
/// Variants fall into three groups: configuration errors (bad model or
/// material input, reported before assembly starts), solver errors (the
/// assembled system cannot be solved), and combination errors (a load
/// combination references an undefined load case).
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Unknown material '{name}'. Available materials: {available}")]
    UnknownMaterial { name: String, available: String },

    #[error("Member '{member}' references node '{node}' which is not in the model")]
    NodeNotFound { member: String, node: String },

    #[error("Support references node '{0}' which is not in the model")]
    SupportNodeNotFound(String),

    #[error("Load applied to node '{0}' which is not in the model")]
    LoadNodeNotFound(String),

    #[error("Duplicate node id '{0}'")]
    DuplicateNode(String),

    #[error("Duplicate member id '{0}'")]
    DuplicateMember(String),

    #[error("Node '{0}' has more than one support record")]
    DuplicateSupport(String),

    #[error("Member '{0}' has zero length")]
    ZeroLengthMember(String),

    #[error("Singular stiffness matrix: {0}")]
    Singular(String),

    #[error("No free degrees of freedom: every DOF in the model is restrained")]
    NoFreeDofs,

    #[error("Load case '{case}' referenced by combination '{combination}' not found")]
    LoadCaseNotFound { combination: String, case: String },

    #[error("No load combination results to envelope")]
    EmptyEnvelope,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for analysis operations
pub type SolverResult<T> = Result<T, SolverError>;
