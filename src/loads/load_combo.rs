//! Load combinations - weighted sums of load cases

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A load combination maps load case names to scalar factors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Name of the combination (e.g. "1.2D+1.6L")
    pub name: String,
    /// Factors keyed by load case name
    pub factors: HashMap<String, f64>,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LoadCombination {
    /// Create a new empty combination
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            factors: HashMap::new(),
            description: None,
        }
    }

    /// Add a load case with a factor
    pub fn with_case(mut self, case: &str, factor: f64) -> Self {
        self.factors.insert(case.to_string(), factor);
        self
    }

    /// Set a description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Get the factor for a load case (0.0 if not included)
    pub fn factor(&self, case: &str) -> f64 {
        *self.factors.get(case).unwrap_or(&0.0)
    }

    /// ASCE 7 LRFD: 1.4D
    pub fn lrfd_dead_only(dead: &str) -> Self {
        Self::new("1.4D").with_case(dead, 1.4)
    }

    /// ASCE 7 LRFD: 1.2D + 1.6L
    pub fn lrfd_dead_live(dead: &str, live: &str) -> Self {
        Self::new("1.2D+1.6L")
            .with_case(dead, 1.2)
            .with_case(live, 1.6)
    }

    /// ASCE 7 LRFD: 1.2D + 1.0L + 1.0W
    pub fn lrfd_dead_live_wind(dead: &str, live: &str, wind: &str) -> Self {
        Self::new("1.2D+1.0L+1.0W")
            .with_case(dead, 1.2)
            .with_case(live, 1.0)
            .with_case(wind, 1.0)
    }

    /// ASCE 7 LRFD uplift: 0.9D + 1.0W
    pub fn lrfd_wind_uplift(dead: &str, wind: &str) -> Self {
        Self::new("0.9D+1.0W")
            .with_case(dead, 0.9)
            .with_case(wind, 1.0)
    }

    /// ASCE 7 ASD: D + L
    pub fn asd_dead_live(dead: &str, live: &str) -> Self {
        Self::new("D+L").with_case(dead, 1.0).with_case(live, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors() {
        let combo = LoadCombination::new("1.2D+1.6L")
            .with_case("Dead", 1.2)
            .with_case("Live", 1.6);
        assert_eq!(combo.factor("Dead"), 1.2);
        assert_eq!(combo.factor("Live"), 1.6);
        assert_eq!(combo.factor("Wind"), 0.0);
    }

    #[test]
    fn test_standard_combinations() {
        let combo = LoadCombination::lrfd_dead_live("D", "L");
        assert_eq!(combo.name, "1.2D+1.6L");
        assert_eq!(combo.factor("D"), 1.2);

        let uplift = LoadCombination::lrfd_wind_uplift("D", "W");
        assert_eq!(uplift.factor("D"), 0.9);
        assert_eq!(uplift.factor("W"), 1.0);
    }
}
