//! NDS wood design checks - placeholder
//!
//! A real NDS rule set is not specified yet; this path returns a fixed
//! placeholder result so report plumbing downstream has a stable shape.

use super::{CheckStatus, CodeCheckResult, DesignCode};

/// Fixed placeholder NDS check result (PASS, ratio 0.5)
pub fn check_placeholder() -> CodeCheckResult {
    CodeCheckResult {
        code: DesignCode::Nds,
        check_name: "NDS Check".to_string(),
        status: CheckStatus::Pass,
        ratio: 0.5,
        reference: "NDS 2018 (placeholder)".to_string(),
        details: "NDS checks not yet implemented".to_string(),
    }
}
