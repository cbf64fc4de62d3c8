//! Load combination engine and envelope aggregation

use approx::assert_relative_eq;
use structural_core::prelude::*;

fn two_span_beam() -> StructuralModel {
    StructuralModel::new(
        StructureKind::Frame,
        vec![
            Node::new("A", 0.0, 0.0),
            Node::new("B", 1000.0, 0.0),
            Node::new("C", 2000.0, 0.0),
        ],
        vec![Member::new("m1", "A", "B"), Member::new("m2", "B", "C")],
        vec![Support::pin("A"), Support::roller("C")],
    )
}

fn triangle_truss() -> StructuralModel {
    StructuralModel::new(
        StructureKind::Truss,
        vec![
            Node::new("A", 0.0, 0.0),
            Node::new("B", 1000.0, 0.0),
            Node::new("C", 500.0, 500.0),
        ],
        vec![
            Member::new("m1", "A", "C"),
            Member::new("m2", "B", "C"),
            Member::new("m3", "A", "B"),
        ],
        vec![Support::pin("A"), Support::roller("B")],
    )
}

#[test]
fn test_single_combination() {
    let dead = LoadCase::dead("Dead", vec![Load::fy("B", -500.0)]);
    let live = LoadCase::live("Live", vec![Load::fy("B", -1000.0)]);
    let combo = LoadCombination::new("1.2D+1.6L")
        .with_case("Dead", 1.2)
        .with_case("Live", 1.6);

    let results =
        solve_with_combinations(&two_span_beam(), &[dead, live], &[combo], "steel").unwrap();

    assert_eq!(results.len(), 1);
    let result = &results["1.2D+1.6L"];
    assert_eq!(result.member_forces.len(), 2);

    // Factored total: 1.2 * 500 + 1.6 * 1000 = 2200 N down
    let total_ry: f64 = result.reactions.iter().map(|r| r.ry).sum();
    assert_relative_eq!(total_ry, 2200.0, epsilon = 1e-6);
}

#[test]
fn test_multiple_combinations() {
    let dead = LoadCase::dead("Dead", vec![Load::fy("B", -500.0)]);
    let live = LoadCase::live("Live", vec![Load::fy("B", -1000.0)]);
    let wind = LoadCase::wind("Wind", vec![Load::fx("B", 800.0)]);

    let combos = vec![
        LoadCombination::new("1.4D").with_case("Dead", 1.4),
        LoadCombination::new("1.2D+1.6L")
            .with_case("Dead", 1.2)
            .with_case("Live", 1.6),
        LoadCombination::new("1.2D+1.0L+1.0W")
            .with_case("Dead", 1.2)
            .with_case("Live", 1.0)
            .with_case("Wind", 1.0),
    ];

    let results =
        solve_with_combinations(&two_span_beam(), &[dead, live, wind], &combos, "steel").unwrap();

    assert_eq!(results.len(), 3);
    assert!(results.contains_key("1.4D"));
    assert!(results.contains_key("1.2D+1.6L"));
    assert!(results.contains_key("1.2D+1.0L+1.0W"));
    for result in results.values() {
        assert_eq!(result.member_forces.len(), 2);
    }
}

#[test]
fn test_factors_scale_linearly() {
    let dead = LoadCase::dead("Dead", vec![Load::fy("C", -10_000.0)]);
    let combos = vec![
        LoadCombination::new("1.0D").with_case("Dead", 1.0),
        LoadCombination::new("1.4D").with_case("Dead", 1.4),
    ];

    let results =
        solve_with_combinations(&triangle_truss(), &[dead], &combos, "steel").unwrap();

    let ratio_1d = results["1.0D"].max_stress_ratio;
    let ratio_14d = results["1.4D"].max_stress_ratio;
    assert!(ratio_14d > ratio_1d);
    assert_relative_eq!(ratio_14d / ratio_1d, 1.4, epsilon = 1e-9);
}

#[test]
fn test_missing_load_case_fails_whole_batch() {
    let dead = LoadCase::dead("Dead", vec![Load::fy("B", -500.0)]);
    // References "Live" which is not defined
    let combo = LoadCombination::new("1.2D+1.6L")
        .with_case("Dead", 1.2)
        .with_case("Live", 1.6);

    let err =
        solve_with_combinations(&two_span_beam(), &[dead], &[combo], "steel").unwrap_err();

    assert!(matches!(
        err,
        SolverError::LoadCaseNotFound { ref case, .. } if case == "Live"
    ));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_envelope_takes_worst_case_per_member() {
    let dead = LoadCase::dead("Dead", vec![Load::fy("B", -500.0)]);
    let live = LoadCase::live("Live", vec![Load::fy("B", -1000.0)]);
    let combos = vec![
        LoadCombination::new("1.4D").with_case("Dead", 1.4),
        LoadCombination::new("1.2D+1.6L")
            .with_case("Dead", 1.2)
            .with_case("Live", 1.6),
    ];

    let results =
        solve_with_combinations(&two_span_beam(), &[dead, live], &combos, "steel").unwrap();
    let worst = envelope(&results).unwrap();

    // Envelope stress ratio equals the max across combinations
    let expected_max = results
        .values()
        .map(|r| r.max_stress_ratio)
        .fold(0.0_f64, f64::max);
    assert_relative_eq!(worst.max_stress_ratio, expected_max, epsilon = 1e-12);

    // Per member, the enveloped ratio is the max observed in any combination
    for (m, enveloped) in worst.member_forces.iter().enumerate() {
        let expected = results
            .values()
            .map(|r| r.member_forces[m].stress_ratio)
            .fold(0.0_f64, f64::max);
        assert_relative_eq!(enveloped.stress_ratio, expected, epsilon = 1e-12);
    }

    // Reactions come from the governing combination (1.2D+1.6L here)
    let governing = &results["1.2D+1.6L"];
    for (a, b) in worst.reactions.iter().zip(&governing.reactions) {
        assert_eq!(a.node_id, b.node_id);
        assert_relative_eq!(a.ry, b.ry, epsilon = 1e-12);
    }

    // Global max deflection across combinations
    let expected_deflection = results
        .values()
        .map(|r| r.max_deflection)
        .fold(0.0_f64, f64::max);
    assert_relative_eq!(worst.max_deflection, expected_deflection, epsilon = 1e-12);
}

#[test]
fn test_opposing_loads_envelope_preserves_sign_of_worst() {
    // Wind pushes one way, seismic the other; the envelope keeps the
    // larger-magnitude axial with its sign
    let wind = LoadCase::wind("Wind", vec![Load::fx("C", 2000.0)]);
    let seismic = LoadCase::new(
        "Seismic",
        LoadCategory::Seismic,
        vec![Load::fx("C", -3000.0)],
    );
    let combos = vec![
        LoadCombination::new("W").with_case("Wind", 1.0),
        LoadCombination::new("E").with_case("Seismic", 1.0),
    ];

    let results =
        solve_with_combinations(&triangle_truss(), &[wind, seismic], &combos, "steel").unwrap();
    let worst = envelope(&results).unwrap();

    for (m, enveloped) in worst.member_forces.iter().enumerate() {
        let governing_axial = results
            .values()
            .map(|r| r.member_forces[m].axial)
            .fold(0.0_f64, |acc, v| if v.abs() > acc.abs() { v } else { acc });
        assert_relative_eq!(enveloped.axial, governing_axial, epsilon = 1e-9);
    }
}

#[test]
fn test_standard_asce_combinations() {
    let dead = LoadCase::dead("D", vec![Load::fy("B", -500.0)]);
    let live = LoadCase::live("L", vec![Load::fy("B", -800.0)]);
    let wind = LoadCase::wind("W", vec![Load::fx("B", 600.0)]);

    let combos = vec![
        LoadCombination::lrfd_dead_only("D"),
        LoadCombination::lrfd_dead_live("D", "L"),
        LoadCombination::lrfd_dead_live_wind("D", "L", "W"),
        LoadCombination::lrfd_wind_uplift("D", "W"),
    ];

    let results =
        solve_with_combinations(&two_span_beam(), &[dead, live, wind], &combos, "steel").unwrap();

    assert_eq!(results.len(), 4);
    for (name, result) in &results {
        assert_eq!(result.member_forces.len(), 2, "combination {name}");
        // Each combination is a fresh, independent solve
        let total_ry: f64 = result.reactions.iter().map(|r| r.ry).sum();
        assert!(total_ry > 0.0);
    }
}

#[test]
fn test_combination_results_match_direct_solve() {
    // A single 1.0-factored combination equals solving the raw loads
    let loads = vec![Load::fy("B", -750.0)];
    let case = LoadCase::dead("D", loads.clone());
    let combo = LoadCombination::new("1.0D").with_case("D", 1.0);

    let direct = solve(&two_span_beam(), &loads, "steel").unwrap();
    let combined =
        solve_with_combinations(&two_span_beam(), &[case], &[combo], "steel").unwrap();
    let result = &combined["1.0D"];

    for (a, b) in direct.member_forces.iter().zip(&result.member_forces) {
        assert_relative_eq!(a.axial, b.axial, epsilon = 1e-9);
        assert_relative_eq!(a.moment, b.moment, epsilon = 1e-9);
    }
    assert_relative_eq!(
        direct.max_deflection,
        result.max_deflection,
        epsilon = 1e-12
    );
}
