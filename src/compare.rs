use crate::io::telemetry::TelemetrySample;
use crate::sim::runner::Flight;

// ---------------------------------------------------------------------------
// Resampling: evaluate a simulated channel at external time points
// ---------------------------------------------------------------------------

/// Linear interpolation of (xs, ys) at each query point.
///
/// Queries outside [xs.first(), xs.last()] yield NaN — an explicit
/// "undefined" marker, never a clamped boundary value. `xs` must be
/// strictly increasing and the same length as `ys`.
pub fn resample(xs: &[f64], ys: &[f64], query: &[f64]) -> Vec<f64> {
    assert_eq!(xs.len(), ys.len(), "mismatched sample arrays");

    query
        .iter()
        .map(|&q| {
            if xs.is_empty() || q < xs[0] || q > xs[xs.len() - 1] {
                return f64::NAN;
            }
            // index of the first grid point >= q
            let hi = xs.partition_point(|&x| x < q);
            if hi == 0 {
                return ys[0];
            }
            let lo = hi - 1;
            if xs[hi] == xs[lo] {
                return ys[lo];
            }
            let frac = (q - xs[lo]) / (xs[hi] - xs[lo]);
            ys[lo] + frac * (ys[hi] - ys[lo])
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Per-channel error series
// ---------------------------------------------------------------------------

/// One compared channel: reference samples, resampled simulation, and the
/// signed pointwise error (reference - simulated; NaN where the simulation
/// does not cover the reference time).
#[derive(Debug, Clone)]
pub struct ChannelComparison {
    pub name: &'static str,
    pub reference: Vec<f64>,
    pub simulated: Vec<f64>,
    pub error: Vec<f64>,
}

impl ChannelComparison {
    pub fn new(name: &'static str, reference: Vec<f64>, simulated: Vec<f64>) -> Self {
        let error = reference
            .iter()
            .zip(&simulated)
            .map(|(r, s)| r - s)
            .collect();
        Self { name, reference, simulated, error }
    }

    /// Number of reference points the simulation covers.
    pub fn defined_points(&self) -> usize {
        self.error.iter().filter(|e| e.is_finite()).count()
    }

    pub fn mean_abs_error(&self) -> f64 {
        let defined: Vec<f64> = self.error.iter().filter(|e| e.is_finite()).cloned().collect();
        if defined.is_empty() {
            return f64::NAN;
        }
        defined.iter().map(|e| e.abs()).sum::<f64>() / defined.len() as f64
    }

    pub fn max_abs_error(&self) -> f64 {
        self.error
            .iter()
            .filter(|e| e.is_finite())
            .map(|e| e.abs())
            .fold(f64::NAN, f64::max)
    }
}

// ---------------------------------------------------------------------------
// Full comparison: the five plotted channels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Comparison {
    /// Reference time base the simulation was resampled onto.
    pub times: Vec<f64>,
    pub channels: Vec<ChannelComparison>,
}

impl Comparison {
    /// Resample the simulated trajectory onto the recorded time base and
    /// compute pointwise error per channel. The recorded drag column is
    /// carried in telemetry but has no simulated counterpart channel.
    pub fn new(flight: &Flight, telemetry: &[TelemetrySample]) -> Self {
        let sim_t = flight.times();
        let query: Vec<f64> = telemetry.iter().map(|s| s.time).collect();

        let channel = |name, reference: Vec<f64>, sim_channel: Vec<f64>| {
            ChannelComparison::new(name, reference, resample(&sim_t, &sim_channel, &query))
        };

        let channels = vec![
            channel(
                "altitude",
                telemetry.iter().map(|s| s.altitude).collect(),
                flight.altitudes(),
            ),
            channel(
                "vertical velocity",
                telemetry.iter().map(|s| s.vertical_velocity).collect(),
                flight.vertical_velocities(),
            ),
            channel(
                "horizontal velocity",
                telemetry.iter().map(|s| s.horizontal_velocity).collect(),
                flight.horizontal_velocities(),
            ),
            channel(
                "total velocity",
                telemetry.iter().map(|s| s.total_velocity).collect(),
                flight.speeds(),
            ),
            channel(
                "displacement",
                telemetry.iter().map(|s| s.displacement).collect(),
                flight.displacements(),
            ),
        ];

        Self { times: query, channels }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
