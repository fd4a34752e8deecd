use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Planar kinematic state
// ---------------------------------------------------------------------------

/// Kinematic state at a single point in time.
/// Frame: launch-site plane, x downrange, y altitude.
#[derive(Debug, Clone)]
pub struct State {
    pub time: f64,         // s, global (across stages)
    pub pos: Vector2<f64>, // m   [downrange, altitude]
    pub vel: Vector2<f64>, // m/s
}

impl State {
    /// Initial condition: origin, at rest.
    pub fn at_rest() -> State {
        State {
            time: 0.0,
            pos: Vector2::zeros(),
            vel: Vector2::zeros(),
        }
    }

    /// Advance state by a derivative scaled by dt (used inside RK4).
    pub fn apply(&self, d: &Deriv, dt: f64) -> State {
        State {
            time: self.time + dt,
            pos: self.pos + d.dpos * dt,
            vel: self.vel + d.dvel * dt,
        }
    }

    pub fn altitude(&self) -> f64 {
        self.pos.y
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    /// Straight-line distance from the launch point.
    pub fn displacement(&self) -> f64 {
        self.pos.norm()
    }

    pub fn is_finite(&self) -> bool {
        self.time.is_finite()
            && self.pos.x.is_finite()
            && self.pos.y.is_finite()
            && self.vel.x.is_finite()
            && self.vel.y.is_finite()
    }
}

// ---------------------------------------------------------------------------
// State derivative (dp/dt, dv/dt)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Deriv {
    pub dpos: Vector2<f64>, // velocity
    pub dvel: Vector2<f64>, // acceleration
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Samples on each stage's uniform time grid (grid spans [0, burn_time]).
    pub steps_per_stage: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { steps_per_stage: 1000 }
    }
}
