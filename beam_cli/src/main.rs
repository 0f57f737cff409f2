//! # Beam Statics CLI
//!
//! Solves one single-span beam scenario and prints the results.
//!
//! ```text
//! beam_cli                              # HEB200, 6 m, 100 kN at midspan, pinned-pinned
//! beam_cli scenario.json                # any scenario file
//! beam_cli scenario.json result.json    # also save the result JSON
//! ```
//!
//! Set `RUST_LOG=beam_core=debug` to see solver decisions.

use std::path::Path;
use std::process;

use beam_core::calculations::{analyze, ProfileSource, StaticsResult};
use beam_core::errors::{CalcError, CalcResult};
use beam_core::file_io::save_json;
use beam_core::scenario::BeamScenario;
use beam_core::units::{
    KilonewtonMeters, Kilonewtons, KilonewtonsPerMeter, Meters, Millimeters, NewtonMeters, Newtons, NewtonsPerMeter,
};

fn kn(value_n: f64) -> f64 {
    Kilonewtons::from(Newtons(value_n)).0
}

fn knm(value_nm: f64) -> f64 {
    KilonewtonMeters::from(NewtonMeters(value_nm)).0
}

fn kn_per_m(value_n_per_m: f64) -> f64 {
    KilonewtonsPerMeter::from(NewtonsPerMeter(value_n_per_m)).0
}

fn mm(value_m: f64) -> f64 {
    Millimeters::from(Meters(value_m)).0
}

fn load_scenario() -> CalcResult<BeamScenario> {
    match std::env::args().nth(1) {
        Some(path) => BeamScenario::from_json_file(Path::new(&path)),
        None => {
            log::info!("no scenario file given, using the default beam");
            Ok(BeamScenario::default())
        }
    }
}

fn print_report(scenario: &BeamScenario, result: &StaticsResult) {
    println!("═══════════════════════════════════════");
    println!("  BEAM STATICS RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    if !scenario.label.is_empty() {
        println!("  Label:    {}", scenario.label);
    }
    println!("  Span:     {:.2} m", scenario.span_m);
    println!("  Section:  {}", scenario.section.describe());
    println!("  Supports: {}", scenario.supports);
    if let Some(p) = &scenario.loads.point {
        println!("  Point:    {:.2} kN at x = {:.3} m", kn(p.magnitude_n), p.position_m);
    }
    if let Some(q) = &scenario.loads.distributed {
        println!(
            "  Patch:    {:.2} kN/m from {:.3} m to {:.3} m (resultant {:.2} kN at x = {:.3} m)",
            kn_per_m(q.intensity_n_per_m),
            q.start_m,
            q.end_m,
            kn(q.resultant_n()),
            q.centroid_m()
        );
    }
    println!();

    println!("Reactions:");
    println!("  R1 = {:.2} kN", kn(result.reactions.left_n));
    println!("  R2 = {:.2} kN", kn(result.reactions.right_n));
    println!();

    let summary = &result.summary;
    let source = match result.source {
        ProfileSource::ClosedForm => "closed form",
        ProfileSource::Numerical => "numerical",
        ProfileSource::Unloaded => "no load",
    };
    println!("Maxima ({}, {} samples):", source, result.profile.len());
    println!(
        "  V_max = {:.2} kN at x = {:.3} m",
        kn(summary.max_shear_n),
        summary.max_shear_position_m
    );
    println!(
        "  M_max = {:.2} kNm at x = {:.3} m",
        knm(summary.max_moment_nm),
        summary.max_moment_position_m
    );
    println!(
        "  y_max = {:.2} mm at x = {:.3} m",
        mm(summary.max_deflection_m),
        summary.max_deflection_position_m
    );

    if let Some(reference) = &result.reference {
        println!();
        println!("Closed-form reference (midspan point load):");
        println!(
            "  R     = {:<14} = {:.2} / {:.2} kN",
            reference.shear_formula,
            kn(reference.reaction_left_n),
            kn(reference.reaction_right_n)
        );
        println!("  M_max = {:<14} = {:.2} kNm", reference.moment_formula, knm(reference.max_moment_nm));
        println!("  y_max = {:<14} = {:.2} mm", reference.deflection_formula, mm(reference.max_deflection_m));
    }
    println!("═══════════════════════════════════════");
}

fn print_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let outcome = load_scenario().and_then(|scenario| analyze(&scenario).map(|result| (scenario, result)));

    match outcome {
        Ok((scenario, result)) => {
            print_report(&scenario, &result);

            if let Some(path) = std::env::args().nth(2) {
                if let Err(e) = save_json(&result, Path::new(&path)) {
                    print_error(&e);
                    process::exit(1);
                }
                println!();
                println!("Result saved to {}", path);
            }

            println!();
            println!("JSON Output:");
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    print_error(&CalcError::from(e));
                    process::exit(1);
                }
            }
        }
        Err(e) => {
            print_error(&e);
            process::exit(1);
        }
    }
}
