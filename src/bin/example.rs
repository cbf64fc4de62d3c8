//! Example - portal frame with ASCE load combinations

use anyhow::Result;
use structural_core::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== structural-core example: Portal Frame ===\n");

    // Simple portal frame (mm):
    //
    //     C -------- D
    //     |          |
    //     |          |
    //     A          B
    //     ^          ^
    //   Fixed      Fixed
    //
    let height = 3000.0;
    let span = 5000.0;

    let model = StructuralModel::new(
        StructureKind::Frame,
        vec![
            Node::new("A", 0.0, 0.0),
            Node::new("B", span, 0.0),
            Node::new("C", 0.0, height),
            Node::new("D", span, height),
        ],
        vec![
            Member::new("col1", "A", "C"),
            Member::new("col2", "B", "D"),
            Member::new("beam", "C", "D"),
        ],
        vec![Support::fixed("A"), Support::fixed("B")],
    );

    // Gravity on the beam ends, wind at roof level
    let dead = LoadCase::dead(
        "Dead",
        vec![Load::fy("C", -8000.0), Load::fy("D", -8000.0)],
    );
    let wind = LoadCase::wind("Wind", vec![Load::fx("C", 4000.0)]);

    let combos = vec![
        LoadCombination::lrfd_dead_only("Dead"),
        LoadCombination::new("1.2D+1.0W")
            .with_case("Dead", 1.2)
            .with_case("Wind", 1.0),
    ];

    let results = solve_with_combinations(&model, &[dead, wind], &combos, "steel")?;

    for (combo_name, result) in &results {
        println!("=== Results for {combo_name} ===");
        println!(
            "  status: {}  max stress ratio: {:.3}  max deflection: {:.3} mm",
            result.safety_status, result.max_stress_ratio, result.max_deflection
        );
        for mf in &result.member_forces {
            println!(
                "  {}: axial = {:.1} N, shear = {:.1} N, moment = {:.1} N·mm",
                mf.member_id, mf.axial, mf.shear, mf.moment
            );
        }
        for reaction in &result.reactions {
            println!(
                "  reaction at {}: rx = {:.1} N, ry = {:.1} N",
                reaction.node_id, reaction.rx, reaction.ry
            );
        }
        println!();
    }

    let worst = envelope(&results)?;
    println!("=== Envelope across combinations ===");
    println!(
        "  status: {}  max stress ratio: {:.3}",
        worst.safety_status, worst.max_stress_ratio
    );

    // Code checks against the governing envelope forces
    let checks = check_results(&model, &worst, "steel", DesignCode::Aisc)?;
    println!("\n=== AISC code checks ===");
    for member_check in &checks {
        println!(
            "  {}: {:?}",
            member_check.member_id, member_check.overall_status
        );
        for check in &member_check.checks {
            println!(
                "    {} [{:?}] ratio = {:.3} ({})",
                check.check_name, check.status, check.ratio, check.reference
            );
        }
    }

    println!("\n{}", serde_json::to_string_pretty(&worst)?);

    Ok(())
}
