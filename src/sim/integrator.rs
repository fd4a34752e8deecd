use crate::dynamics;
use crate::dynamics::state::State;
use crate::gnc::guidance::PitchProfile;
use crate::physics::environment::Environment;
use crate::vehicle::Stage;

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta integrator
// ---------------------------------------------------------------------------

/// Single RK4 step: advance state by dt, starting at stage-local time
/// `t_stage`. State.time carries the global (concatenated) time axis.
pub fn rk4_step(
    state: &State,
    t_stage: f64,
    dt: f64,
    stage: &Stage,
    start_mass: f64,
    env: &Environment,
    profile: &PitchProfile,
) -> State {
    let k1 = dynamics::derivatives(state, t_stage, stage, start_mass, env, profile);
    let k2 = dynamics::derivatives(&state.apply(&k1, dt * 0.5), t_stage + dt * 0.5,
                                   stage, start_mass, env, profile);
    let k3 = dynamics::derivatives(&state.apply(&k2, dt * 0.5), t_stage + dt * 0.5,
                                   stage, start_mass, env, profile);
    let k4 = dynamics::derivatives(&state.apply(&k3, dt), t_stage + dt,
                                   stage, start_mass, env, profile);

    State {
        time: state.time + dt,
        pos: state.pos + (k1.dpos + 2.0 * k2.dpos + 2.0 * k3.dpos + k4.dpos) * (dt / 6.0),
        vel: state.vel + (k1.dvel + 2.0 * k2.dvel + 2.0 * k3.dvel + k4.dvel) * (dt / 6.0),
    }
}
