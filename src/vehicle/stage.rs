// ---------------------------------------------------------------------------
// Stage definition (one stage of a multi-stage rocket)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Stage {
    pub name: String,
    pub wet_mass: f64,        // kg, structure + propellant
    pub fuel_mass: f64,       // kg
    pub thrust: f64,          // N
    pub burn_time: f64,       // s
    pub ejection_force: f64,  // N, residual thrust near burnout
    pub ejection_window: f64, // s before burnout during which it applies
    pub area: f64,            // m^2, cross-section for drag
}

impl Stage {
    pub fn dry_mass(&self) -> f64 {
        self.wet_mass - self.fuel_mass
    }

    /// Propellant drain rate, kg/s. Constant over the burn.
    pub fn drain_rate(&self) -> f64 {
        self.fuel_mass / self.burn_time
    }

    /// Vehicle mass after burning for `t` seconds from `start_mass`.
    /// Clamped at the dry floor so integrating past burnout cannot drive
    /// the mass below what is physically left.
    pub fn mass_at(&self, start_mass: f64, t: f64) -> f64 {
        (start_mass - self.drain_rate() * t).max(start_mass - self.fuel_mass)
    }

    /// True while the ejection impulse applies (final seconds of the burn).
    pub fn in_ejection_window(&self, t: f64) -> bool {
        t >= self.burn_time - self.ejection_window
    }
}

// ---------------------------------------------------------------------------
// Stage builder
// ---------------------------------------------------------------------------

pub struct StageBuilder {
    name: String,
    wet_mass: f64,
    fuel_mass: f64,
    thrust: f64,
    burn_time: f64,
    ejection_force: f64,
    ejection_window: f64,
    area: f64,
}

impl StageBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wet_mass: 1000.0,
            fuel_mass: 800.0,
            thrust: 20_000.0,
            burn_time: 60.0,
            ejection_force: 0.0,
            ejection_window: 7.0,
            area: 1.0,
        }
    }

    pub fn wet_mass(mut self, v: f64) -> Self { self.wet_mass = v; self }
    pub fn fuel_mass(mut self, v: f64) -> Self { self.fuel_mass = v; self }
    pub fn thrust(mut self, v: f64) -> Self { self.thrust = v; self }
    pub fn burn_time(mut self, v: f64) -> Self { self.burn_time = v; self }
    pub fn ejection_force(mut self, v: f64) -> Self { self.ejection_force = v; self }
    pub fn ejection_window(mut self, v: f64) -> Self { self.ejection_window = v; self }
    pub fn area(mut self, v: f64) -> Self { self.area = v; self }

    pub fn build(self) -> Stage {
        debug_assert!(self.fuel_mass <= self.wet_mass, "fuel exceeds wet mass");
        debug_assert!(self.burn_time > 0.0, "burn time must be positive");
        Stage {
            name: self.name,
            wet_mass: self.wet_mass,
            fuel_mass: self.fuel_mass,
            thrust: self.thrust,
            burn_time: self.burn_time,
            ejection_force: self.ejection_force,
            ejection_window: self.ejection_window,
            area: self.area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn booster() -> Stage {
        StageBuilder::new("Booster")
            .wet_mass(117_000.0)
            .fuel_mass(101_000.0)
            .thrust(2_816_500.0)
            .burn_time(90.0)
            .ejection_force(100.0)
            .area(10.0)
            .build()
    }

    #[test]
    fn derived_masses() {
        let s = booster();
        assert_relative_eq!(s.dry_mass(), 16_000.0);
        assert_relative_eq!(s.drain_rate(), 101_000.0 / 90.0, max_relative = 1e-12);
    }

    #[test]
    fn mass_non_increasing_over_burn() {
        let s = booster();
        let start = 209_946.0;
        let mut prev = s.mass_at(start, 0.0);
        for i in 1..=90 {
            let m = s.mass_at(start, i as f64);
            assert!(m <= prev, "mass must not increase during the burn");
            prev = m;
        }
        assert_relative_eq!(s.mass_at(start, 0.0), start);
        assert_relative_eq!(s.mass_at(start, 90.0), start - 101_000.0, max_relative = 1e-12);
    }

    #[test]
    fn mass_clamped_at_dry_floor_past_burnout() {
        let s = booster();
        let start = 209_946.0;
        assert_relative_eq!(s.mass_at(start, 500.0), start - s.fuel_mass);
    }

    #[test]
    fn ejection_window_covers_final_seconds() {
        let s = booster();
        assert!(!s.in_ejection_window(82.9));
        assert!(s.in_ejection_window(83.0));
        assert!(s.in_ejection_window(90.0));
    }

    #[test]
    fn zero_window_disables_ejection_during_burn() {
        let s = StageBuilder::new("NoEject").ejection_window(0.0).build();
        assert!(!s.in_ejection_window(s.burn_time - 0.001));
        assert!(s.in_ejection_window(s.burn_time));
    }
}
