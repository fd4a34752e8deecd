// ---------------------------------------------------------------------------
// Planetary environment: atmosphere + gravity parameters
// ---------------------------------------------------------------------------

/// Immutable planetary parameters used by the dynamics.
///
/// Bundles every body-specific constant (sea-level density, atmosphere scale
/// height, gravitational parameter, radius, drag coefficient) so alternate
/// bodies can be substituted in tests.
#[derive(Debug, Clone)]
pub struct Environment {
    pub air_density_sl: f64, // kg/m^3 at sea level
    pub scale_height: f64,   // m
    pub mu: f64,             // G*M, m^3/s^2
    pub radius: f64,         // m
    pub drag_coeff: f64,
}

impl Environment {
    /// Kerbin: the stock home body of the game the reference telemetry
    /// was recorded in.
    pub fn kerbin() -> Self {
        Self {
            air_density_sl: 1.225,
            scale_height: 4000.0,
            mu: 6.674_30e-11 * 5.291_579_3e22,
            radius: 600_000.0,
            drag_coeff: 2.0,
        }
    }

    /// Exponential atmosphere: rho = rho_0 * exp(-h / H). Always positive.
    pub fn air_density(&self, altitude: f64) -> f64 {
        self.air_density_sl * (-altitude / self.scale_height).exp()
    }

    /// Inverse-square gravitational acceleration at a given altitude.
    pub fn gravity_accel(&self, altitude: f64) -> f64 {
        let r = self.radius + altitude;
        self.mu / (r * r)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sea_level_density() {
        let env = Environment::kerbin();
        assert_relative_eq!(env.air_density(0.0), 1.225, max_relative = 1e-12);
    }

    #[test]
    fn density_positive_and_strictly_decreasing() {
        let env = Environment::kerbin();
        let mut prev = env.air_density(0.0);
        for h in [1_000.0, 5_000.0, 20_000.0, 70_000.0, 120_000.0] {
            let rho = env.air_density(h);
            assert!(rho > 0.0, "density must stay positive, got {} at {}", rho, h);
            assert!(rho < prev, "density must decrease with altitude");
            prev = rho;
        }
    }

    #[test]
    fn surface_gravity_near_9_81() {
        let env = Environment::kerbin();
        // Kerbin surface gravity is tuned to ~1 g
        assert_relative_eq!(env.gravity_accel(0.0), 9.81, max_relative = 1e-3);
    }

    #[test]
    fn gravity_decreases_with_altitude() {
        let env = Environment::kerbin();
        assert!(env.gravity_accel(70_000.0) < env.gravity_accel(0.0));
        assert!(env.gravity_accel(600_000.0) < env.gravity_accel(70_000.0));
    }
}
