//! # Beam CLI Application
//!
//! Command-line front end for `beam_core`: analyzes a JSON request, prints a
//! summary, and optionally writes the CSV diagram table and the JSON export.
//!
//! Set `BEAM_LOG=debug` to see the engine's reaction and maxima logs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use beam_core::calculations::input::{DEFAULT_DEFLECTION_LIMIT_RATIO, DEFAULT_SEGMENTS};
use beam_core::calculations::{
    analyze, AnalysisInput, AnalysisResult, AnalysisSettings, MomentLoadMode,
};
use beam_core::errors::CalcError;
use beam_core::export::{diagram_csv, ExportBundle};
use beam_core::file_io::{load_input, save_json, save_text};
use beam_core::loads::Load;
use beam_core::materials::{Material, MaterialKey};
use beam_core::section::{CrossSectionSpec, SectionShape};

const ABOUT: &str = "
Static analysis of a beam on two supports: reactions, shear/moment/deflection/stress
diagrams, safety factors and buckling checks.";

#[derive(Parser)]
#[command(author, version, about = ABOUT, name = "beam")]
struct Opt {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a beam described by a JSON request file.
    Analyze {
        /// Path to the request file.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Number of sampling segments along the beam.
        #[arg(short, long, default_value_t = DEFAULT_SEGMENTS)]
        segments: usize,

        /// Serviceability limit divisor (deflection limit = L / ratio).
        #[arg(long, default_value_t = DEFAULT_DEFLECTION_LIMIT_RATIO)]
        limit_ratio: f64,

        /// Let concentrated moments introduce a jump in the moment diagram.
        #[arg(long)]
        moment_jumps: bool,

        /// Write the diagram table as CSV.
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,

        /// Write the full JSON export document.
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,

        /// Analyst name recorded in the JSON export.
        #[arg(long, default_value = "User")]
        analyst: String,

        /// Free-form notes recorded in the JSON export.
        #[arg(long, default_value = "")]
        notes: String,

        /// Report every validation problem instead of only the first.
        #[arg(long)]
        all_errors: bool,
    },

    /// List the material catalog.
    Materials,

    /// Run the 10 m / 10 kN midspan example.
    Demo,
}

pub fn main() {
    if let Err(err) = try_main() {
        eprintln!("Error: {:#}", err);
        if let Some(calc) = err.downcast_ref::<CalcError>() {
            if let Ok(json) = serde_json::to_string_pretty(calc) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let _ = env_logger::Builder::from_env("BEAM_LOG").try_init();

    let opt = Opt::parse();

    match opt.command {
        Command::Analyze {
            input,
            segments,
            limit_ratio,
            moment_jumps,
            csv,
            json,
            analyst,
            notes,
            all_errors,
        } => {
            let request = load_input(&input)
                .with_context(|| format!("Failed to load {}", input.display()))?;

            if all_errors {
                request.validate_all()?;
            }

            let mode = if moment_jumps {
                MomentLoadMode::Discontinuous
            } else {
                MomentLoadMode::ReactionsOnly
            };
            let settings = AnalysisSettings::default()
                .with_segments(segments)
                .with_deflection_limit_ratio(limit_ratio)
                .with_moment_load_mode(mode);
            settings.validate()?;

            let result = analyze(&request, &settings)?;
            print_summary(&request, &result);

            if let Some(path) = csv {
                save_text(&diagram_csv(&result), &path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("wrote diagram table to {}", path.display());
                println!("CSV written to {}", path.display());
            }

            if let Some(path) = json {
                let bundle = ExportBundle::new(&request, &result, analyst, notes);
                save_json(&bundle, &path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("wrote export document to {}", path.display());
                println!("JSON export written to {}", path.display());
            }
        }
        Command::Materials => print_materials(),
        Command::Demo => {
            let section = CrossSectionSpec::new(SectionShape::Rectangular, 0.1, 0.2);
            let request = AnalysisInput::simply_supported(10.0, MaterialKey::Steel, section)
                .with_load(Load::point(10.0, 5.0).with_id("P1"))
                .with_label("Demo");
            let result = analyze(&request, &AnalysisSettings::default())?;
            print_summary(&request, &result);

            println!();
            println!("JSON Output:");
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

fn print_materials() {
    println!(
        "{:<16} {:<26} {:>8} {:>8} {:>8} {:>8}",
        "KEY", "NAME", "E (GPa)", "fy (MPa)", "fu (MPa)", "ρ (kg/m³)"
    );
    for key in MaterialKey::ALL {
        let m = Material::lookup(key);
        println!(
            "{:<16} {:<26} {:>8.1} {:>8.0} {:>8.0} {:>8.0}",
            key.code(),
            m.name,
            m.e_pa / 1e9,
            m.yield_strength_pa / 1e6,
            m.ultimate_strength_pa / 1e6,
            m.density_kg_m3
        );
    }
}

fn print_summary(input: &AnalysisInput, result: &AnalysisResult) {
    let material = input.material_record();

    println!("═══════════════════════════════════════");
    println!("  BEAM ANALYSIS RESULTS {}", input.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Length:   {:.2} m", input.beam_length_m);
    println!(
        "  Section:  {} ({:.3} x {:.3} m)",
        input.section.shape.formula().display_name,
        input.section.width_m,
        input.section.height_m
    );
    println!("  Material: {}", material.name);
    println!("  Loads:    {} (factor {:.2})", input.loads.len(), result.applied_load_factor);
    println!(
        "  Self-wt:  {:.3} kN {}",
        result.self_weight_kn,
        if result.include_self_weight { "(applied)" } else { "(not applied)" }
    );
    println!(
        "  A = {:.2} cm², I = {:.2} cm⁴",
        result.section.area_cm2, result.section.inertia_cm4
    );
    println!();
    println!("Supports:");
    for support in &input.supports {
        println!("  {:>6.2} m  {}", support.position_m, support.kind.description());
    }
    println!();
    println!("Reactions:");
    println!("  R1 = {:.3} kN @ {:.2} m", result.reactions.r1_kn, result.reactions.r1_position_m);
    println!("  R2 = {:.3} kN @ {:.2} m", result.reactions.r2_kn, result.reactions.r2_position_m);
    println!();
    println!("Demand:");
    println!("  V_max = {:.3} kN", result.max_shear_kn);
    println!("  M_max = {:.3} kN·m", result.max_moment_knm);
    println!("  δ_max = {:.3} mm", result.max_deflection_mm);
    println!("  σ_max = {:.2} MPa", result.max_stress_mpa);
    println!(
        "  τ = {:.3} MPa, σ_vm = {:.2} MPa",
        result.combined_stress.shear_stress_mpa, result.combined_stress.von_mises_mpa
    );
    println!();
    println!("Checks:");
    println!(
        "  Yield:      SF {:.2}, utilization {:.1}% {}",
        result.safety.yield_safety_factor,
        result.safety.utilization_pct,
        status_icon(result.safety.utilization_pct <= 100.0)
    );
    println!("  Ultimate:   SF {:.2}", result.safety.ultimate_safety_factor);
    println!(
        "  Deflection: {:.2} (limit {:.2} mm) {}",
        result.deflection_check.ratio,
        result.deflection_check.limit_mm,
        status_icon(result.deflection_check.compliant)
    );
    println!(
        "  Buckling:   Pcr {:.1} kN, λ {:.1}, risk {}",
        result.buckling.critical_load_kn, result.buckling.slenderness_ratio, result.buckling.risk
    );
    println!(
        "  LTB:        Mcr {:.1} kN·m, SF {:.2}",
        result.ltb.critical_moment_knm, result.ltb.safety_factor
    );
    println!("═══════════════════════════════════════");
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
