use std::io::{self, Write};

use crate::compare::Comparison;
use crate::io::telemetry::{Source, Telemetry};
use crate::sim::runner::Flight;
use crate::vehicle::Mission;

/// Summary statistics computed from an ascent trajectory.
#[derive(Debug, Clone)]
pub struct FlightSummary {
    pub final_altitude: f64,
    pub final_speed: f64,
    pub max_speed: f64,
    pub downrange: f64,
    pub displacement: f64,
    pub flight_time: f64,
    pub non_finite_samples: usize,
}

impl FlightSummary {
    /// Compute summary from the concatenated trajectory.
    pub fn from_flight(flight: &Flight) -> Self {
        let last = flight.samples.last().expect("empty trajectory");
        let max_speed = flight
            .samples
            .iter()
            .map(|s| s.speed())
            .fold(0.0_f64, f64::max);

        FlightSummary {
            final_altitude: last.pos.y,
            final_speed: last.speed(),
            max_speed,
            downrange: last.pos.x,
            displacement: last.displacement(),
            flight_time: last.time,
            non_finite_samples: flight.non_finite_samples(),
        }
    }
}

/// Write the flight report as JSON: mission, performance, telemetry
/// provenance, and per-channel comparison statistics.
pub fn write_report<W: Write>(
    writer: &mut W,
    mission: &Mission,
    summary: &FlightSummary,
    telemetry: &Telemetry,
    comparison: &Comparison,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"mission\": {{")?;
    writeln!(writer, "    \"name\": \"{}\",", mission.name)?;
    writeln!(writer, "    \"stages\": {},", mission.stages.len())?;
    writeln!(writer, "    \"launch_mass_kg\": {:.1}", mission.launch_mass)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"performance\": {{")?;
    writeln!(writer, "    \"final_altitude_m\": {:.2},", summary.final_altitude)?;
    writeln!(writer, "    \"final_speed_ms\": {:.2},", summary.final_speed)?;
    writeln!(writer, "    \"max_speed_ms\": {:.2},", summary.max_speed)?;
    writeln!(writer, "    \"downrange_m\": {:.2},", summary.downrange)?;
    writeln!(writer, "    \"displacement_m\": {:.2},", summary.displacement)?;
    writeln!(writer, "    \"flight_time_s\": {:.2},", summary.flight_time)?;
    writeln!(writer, "    \"non_finite_samples\": {}", summary.non_finite_samples)?;
    writeln!(writer, "  }},")?;

    let source = match &telemetry.source {
        Source::Recorded(path) => format!("\"recorded\", \"path\": \"{}\"", path.display()),
        Source::Fallback(err) => format!("\"synthetic\", \"reason\": \"{}\"", err),
    };
    writeln!(writer, "  \"telemetry\": {{")?;
    writeln!(writer, "    \"source\": {},", source)?;
    writeln!(writer, "    \"samples\": {}", telemetry.samples.len())?;
    writeln!(writer, "  }},")?;

    writeln!(writer, "  \"comparison\": [")?;
    for (i, ch) in comparison.channels.iter().enumerate() {
        let comma = if i + 1 < comparison.channels.len() { "," } else { "" };
        writeln!(
            writer,
            "    {{ \"channel\": \"{}\", \"points\": {}, \"mean_abs_error\": {:.4}, \"max_abs_error\": {:.4} }}{}",
            ch.name,
            ch.defined_points(),
            ch.mean_abs_error(),
            ch.max_abs_error(),
            comma,
        )?;
    }
    writeln!(writer, "  ]")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write the flight report to a file.
pub fn write_report_file(
    path: &str,
    mission: &Mission,
    summary: &FlightSummary,
    telemetry: &Telemetry,
    comparison: &Comparison,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_report(&mut file, mission, summary, telemetry, comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::SimConfig;
    use crate::gnc::guidance::PitchProfile;
    use crate::io::telemetry::synthetic_telemetry;
    use crate::physics::environment::Environment;
    use crate::sim::runner::simulate;
    use crate::vehicle::presets;

    #[test]
    fn report_contains_expected_keys() {
        let mission = presets::kerbin_two_stage();
        let flight = simulate(
            &mission,
            &Environment::kerbin(),
            &PitchProfile::default(),
            &SimConfig { steps_per_stage: 50 },
        );
        let summary = FlightSummary::from_flight(&flight);
        let telemetry = Telemetry {
            samples: synthetic_telemetry(),
            source: Source::Recorded("test.csv".into()),
        };
        let comparison = Comparison::new(&flight, &telemetry.samples);

        let mut buf = Vec::new();
        write_report(&mut buf, &mission, &summary, &telemetry, &comparison).unwrap();
        let json = String::from_utf8(buf).unwrap();

        assert!(json.contains("\"mission\""));
        assert!(json.contains("\"Kerbin Ascent\""));
        assert!(json.contains("\"flight_time_s\": 137.00"));
        assert!(json.contains("\"channel\": \"altitude\""));
        assert!(json.contains("\"source\": \"recorded\""));
    }

    #[test]
    fn summary_final_time_matches_total_burn() {
        let mission = presets::kerbin_two_stage();
        let flight = simulate(
            &mission,
            &Environment::kerbin(),
            &PitchProfile::default(),
            &SimConfig { steps_per_stage: 50 },
        );
        let summary = FlightSummary::from_flight(&flight);
        assert!((summary.flight_time - mission.total_burn_time()).abs() < 1e-9);
    }
}
