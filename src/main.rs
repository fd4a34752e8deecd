use ascent_sim::compare::Comparison;
use ascent_sim::io::json::FlightSummary;
use ascent_sim::io::telemetry::Source;
use ascent_sim::io::{csv, json, Telemetry};
use ascent_sim::sim::runner::simulate;
use ascent_sim::types::{Environment, PitchProfile, SimConfig};
use ascent_sim::vehicle::presets;

fn main() {
    let telemetry_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ksp_flight_data.csv".into());
    let csv_out = std::env::args().nth(2);
    let report_out = std::env::args().nth(3);

    // -----------------------------------------------------------------------
    // Simulate the reference two-stage ascent
    // -----------------------------------------------------------------------
    let mission = presets::kerbin_two_stage();
    let env = Environment::kerbin();
    let profile = PitchProfile::default();
    let config = SimConfig::default();

    let flight = simulate(&mission, &env, &profile, &config);
    let summary = FlightSummary::from_flight(&flight);

    // -----------------------------------------------------------------------
    // Load recorded telemetry and compare
    // -----------------------------------------------------------------------
    let telemetry = Telemetry::load(&telemetry_path);
    let comparison = Comparison::new(&flight, &telemetry.samples);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  ASCENT SIMULATION — {}", mission.name);
    println!("====================================================================");
    println!();
    println!("  Vehicle");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Launch mass:   {:>9.0} kg   Stack mass:  {:>9.0} kg",
             mission.launch_mass, mission.stack_mass());
    for (i, s) in mission.stages.iter().enumerate() {
        println!(
            "  Stage {}: {:<10} wet {:>7.0} kg  fuel {:>7.0} kg  thrust {:>9.0} N  burn {:>5.1} s",
            i + 1, s.name, s.wet_mass, s.fuel_mass, s.thrust, s.burn_time
        );
    }
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for event in &flight.events {
        println!("  {}", event);
    }
    println!();

    println!("  Performance");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Final altitude: {:>9.0} m   ({:.2} km)",
             summary.final_altitude, summary.final_altitude / 1000.0);
    println!("  Final speed:    {:>9.1} m/s", summary.final_speed);
    println!("  Max speed:      {:>9.1} m/s", summary.max_speed);
    println!("  Downrange:      {:>9.0} m", summary.downrange);
    println!("  Displacement:   {:>9.0} m", summary.displacement);
    println!("  Flight time:    {:>9.1} s   ({} samples)",
             summary.flight_time, flight.samples.len());
    println!();

    if summary.non_finite_samples > 0 {
        eprintln!(
            "  WARNING: {} non-finite trajectory samples — solver diverged",
            summary.non_finite_samples
        );
    }

    println!("  Telemetry Comparison");
    println!("  ──────────────────────────────────────────────────────────────────");
    match &telemetry.source {
        Source::Recorded(path) => {
            println!("  Source: {} ({} samples)", path.display(), telemetry.samples.len());
        }
        Source::Fallback(err) => {
            println!("  Source: SYNTHETIC PLACEHOLDER ({} samples)", telemetry.samples.len());
            println!("  Reason: {}", err);
            println!("  Error figures below do not validate the model.");
        }
    }
    println!();
    println!(
        "  {:<22} {:>8} {:>14} {:>14}",
        "channel", "points", "mean |err|", "max |err|"
    );
    println!("  {}", "─".repeat(62));
    for ch in &comparison.channels {
        println!(
            "  {:<22} {:>8} {:>14.3} {:>14.3}",
            ch.name,
            ch.defined_points(),
            ch.mean_abs_error(),
            ch.max_abs_error()
        );
    }
    println!();
    println!("====================================================================");
    println!();

    // -----------------------------------------------------------------------
    // Optional exports
    // -----------------------------------------------------------------------
    if let Some(path) = csv_out {
        match csv::write_trajectory_file(&path, &flight.samples) {
            Ok(()) => println!("  Trajectory written to {}", path),
            Err(e) => eprintln!("  Failed to write trajectory CSV: {}", e),
        }
    }
    if let Some(path) = report_out {
        match json::write_report_file(&path, &mission, &summary, &telemetry, &comparison) {
            Ok(()) => println!("  Report written to {}", path),
            Err(e) => eprintln!("  Failed to write report: {}", e),
        }
    }
}
