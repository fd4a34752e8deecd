use nalgebra::Vector2;

use crate::dynamics::state::{Deriv, State};
use crate::gnc::guidance::{commanded_pitch_deg, PitchProfile};
use crate::physics::environment::Environment;
use crate::vehicle::Stage;

// ---------------------------------------------------------------------------
// Equations of motion (2-DOF point mass, powered ascent)
// ---------------------------------------------------------------------------

/// Compute state derivatives at stage-local time `t_stage`.
///
/// Forces modeled:
///   1. Thrust minus drag, resolved along the commanded pitch
///   2. Gravity — inverse-square, radial
///   3. Centrifugal pseudo-force from downrange velocity
///   4. Ejection impulse during the final seconds of the burn
pub fn derivatives(
    state: &State,
    t_stage: f64,
    stage: &Stage,
    start_mass: f64,
    env: &Environment,
    profile: &PitchProfile,
) -> Deriv {
    let alt = state.altitude();
    let mass = stage.mass_at(start_mass, t_stage);

    let speed2 = state.vel.norm_squared();
    let pitch = commanded_pitch_deg(alt, profile).to_radians();

    // --- Forces ---
    let f_gravity = mass * env.gravity_accel(alt);
    let f_drag = 0.5 * env.drag_coeff * env.air_density(alt) * speed2 * stage.area;
    let f_centrifugal = mass * state.vel.x * state.vel.x / (env.radius + alt);

    let mut a_vert = ((stage.thrust - f_drag) * pitch.sin() + f_centrifugal - f_gravity) / mass;
    let mut a_horiz = (stage.thrust - f_drag) * pitch.cos() / mass;

    // Residual thrust / separation effects near burnout
    if stage.in_ejection_window(t_stage) {
        a_horiz += (stage.ejection_force / mass) * pitch.cos();
        a_vert += (stage.ejection_force / mass) * pitch.sin();
    }

    Deriv {
        dpos: state.vel,
        dvel: Vector2::new(a_horiz, a_vert),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::presets;
    use approx::assert_relative_eq;

    fn setup() -> (Stage, f64, Environment, PitchProfile) {
        let mission = presets::kerbin_two_stage();
        let start = mission.start_mass_for_stage(0);
        (mission.stages[0].clone(), start, Environment::kerbin(), PitchProfile::default())
    }

    #[test]
    fn net_upward_accel_on_pad() {
        let (stage, start, env, profile) = setup();
        let d = derivatives(&State::at_rest(), 0.0, &stage, start, &env, &profile);
        assert!(d.dvel.y > 0.0, "TWR > 1 should lift off, got {}", d.dvel.y);
    }

    #[test]
    fn no_horizontal_thrust_while_vertical() {
        let (stage, start, env, profile) = setup();
        // On the pad pitch is 90 deg, cos = 0
        let d = derivatives(&State::at_rest(), 0.0, &stage, start, &env, &profile);
        assert_relative_eq!(d.dvel.x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn drag_reduces_vertical_accel() {
        let (stage, start, env, profile) = setup();
        let still = State::at_rest();
        let moving = State {
            vel: nalgebra::Vector2::new(0.0, 300.0),
            ..State::at_rest()
        };
        let d_still = derivatives(&still, 10.0, &stage, start, &env, &profile);
        let d_moving = derivatives(&moving, 10.0, &stage, start, &env, &profile);
        assert!(d_moving.dvel.y < d_still.dvel.y, "drag must oppose the ascent");
    }

    #[test]
    fn ejection_impulse_adds_accel_near_burnout() {
        let (mut stage, start, env, profile) = setup();
        stage.ejection_force = 50_000.0;
        let s = State::at_rest();
        let before = derivatives(&s, stage.burn_time - stage.ejection_window - 1.0,
                                 &stage, start, &env, &profile);
        let inside = derivatives(&s, stage.burn_time - stage.ejection_window + 1.0,
                                 &stage, start, &env, &profile);
        // Less propellant burned at the earlier time, so isolate the impulse
        // by comparing against the same time with the force disabled
        let mut quiet = stage.clone();
        quiet.ejection_force = 0.0;
        let inside_quiet = derivatives(&s, stage.burn_time - stage.ejection_window + 1.0,
                                       &quiet, start, &env, &profile);
        assert!(inside.dvel.y > inside_quiet.dvel.y);
        assert_relative_eq!(before.dvel.x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn derivative_position_rate_is_velocity() {
        let (stage, start, env, profile) = setup();
        let s = State {
            vel: nalgebra::Vector2::new(120.0, 340.0),
            ..State::at_rest()
        };
        let d = derivatives(&s, 5.0, &stage, start, &env, &profile);
        assert_relative_eq!(d.dpos.x, 120.0);
        assert_relative_eq!(d.dpos.y, 340.0);
    }
}
