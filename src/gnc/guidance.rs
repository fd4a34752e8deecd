// ---------------------------------------------------------------------------
// Guidance: commanded pitch angle as a function of altitude
// ---------------------------------------------------------------------------

/// Pitch program parameters.
#[derive(Debug, Clone)]
pub struct PitchProfile {
    /// Altitude at which the turn completes and commanded pitch reaches 0.
    pub turn_end: f64,
}

impl Default for PitchProfile {
    fn default() -> Self {
        Self { turn_end: 70_000.0 }
    }
}

/// Commanded pitch in degrees from local horizontal (90 = straight up).
///
/// Linear profile: 90 * (1 - altitude / turn_end) below `turn_end`,
/// 0 at and above it. Callers convert to radians before trigonometry.
pub fn commanded_pitch_deg(altitude: f64, profile: &PitchProfile) -> f64 {
    if altitude < profile.turn_end {
        90.0 * (1.0 - altitude / profile.turn_end)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vertical_on_the_pad() {
        let p = PitchProfile::default();
        assert_relative_eq!(commanded_pitch_deg(0.0, &p), 90.0);
    }

    #[test]
    fn horizontal_at_turn_end() {
        let p = PitchProfile::default();
        assert_relative_eq!(commanded_pitch_deg(70_000.0, &p), 0.0);
        assert_relative_eq!(commanded_pitch_deg(100_000.0, &p), 0.0);
    }

    #[test]
    fn non_increasing_over_the_turn() {
        let p = PitchProfile::default();
        let mut prev = commanded_pitch_deg(0.0, &p);
        for i in 1..=70 {
            let pitch = commanded_pitch_deg(i as f64 * 1000.0, &p);
            assert!(pitch <= prev, "pitch must not increase with altitude");
            prev = pitch;
        }
    }

    #[test]
    fn midpoint_is_45() {
        let p = PitchProfile::default();
        assert_relative_eq!(commanded_pitch_deg(35_000.0, &p), 45.0);
    }
}
