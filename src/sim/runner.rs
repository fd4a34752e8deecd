use crate::dynamics::state::{SimConfig, State};
use crate::gnc::guidance::PitchProfile;
use crate::physics::environment::Environment;
use crate::vehicle::{Mission, Stage};

use super::event::{EventKind, FlightEvent};
use super::integrator::rk4_step;

// ---------------------------------------------------------------------------
// Per-stage integration
// ---------------------------------------------------------------------------

/// Integrate one stage over its burn on a uniform time grid.
///
/// `initial` carries the global time offset; the returned samples include
/// both endpoints (ignition and burnout states).
pub fn simulate_stage(
    stage: &Stage,
    start_mass: f64,
    initial: State,
    env: &Environment,
    profile: &PitchProfile,
    config: &SimConfig,
) -> Vec<State> {
    let n = config.steps_per_stage.max(2);
    let dt = stage.burn_time / (n - 1) as f64;

    let mut samples = Vec::with_capacity(n);
    let mut state = initial;
    samples.push(state.clone());
    for i in 0..n - 1 {
        let t_stage = i as f64 * dt;
        state = rk4_step(&state, t_stage, dt, stage, start_mass, env, profile);
        samples.push(state.clone());
    }
    samples
}

// ---------------------------------------------------------------------------
// Full ascent: stage 1, staging, stage 2
// ---------------------------------------------------------------------------

/// Concatenated trajectory of a full staged ascent.
#[derive(Debug, Clone)]
pub struct Flight {
    pub samples: Vec<State>,
    pub events: Vec<FlightEvent>,
}

/// Simulate the whole mission from the pad.
///
/// Each stage starts from the previous stage's final state (position and
/// velocity are continuous across separation) with the start mass reset from
/// the mission's per-stage table. The duplicated boundary sample is dropped
/// so the concatenated time axis is strictly increasing.
pub fn simulate(
    mission: &Mission,
    env: &Environment,
    profile: &PitchProfile,
    config: &SimConfig,
) -> Flight {
    let mut samples: Vec<State> = Vec::new();
    let mut events: Vec<FlightEvent> = Vec::new();
    let mut state = State::at_rest();

    for (idx, stage) in mission.stages.iter().enumerate() {
        let start_mass = mission.start_mass_for_stage(idx);
        let ignition_time = state.time;

        events.push(FlightEvent {
            time: ignition_time,
            kind: EventKind::Ignition { stage: idx },
        });
        if stage.ejection_window > 0.0 {
            events.push(FlightEvent {
                time: ignition_time + stage.burn_time - stage.ejection_window,
                kind: EventKind::EjectionWindow { stage: idx },
            });
        }

        let stage_samples = simulate_stage(stage, start_mass, state, env, profile, config);
        let skip = if samples.is_empty() { 0 } else { 1 };
        samples.extend(stage_samples.into_iter().skip(skip));

        state = samples.last().unwrap().clone();
        events.push(FlightEvent {
            time: state.time,
            kind: EventKind::Burnout { stage: idx },
        });
        if idx + 1 < mission.stages.len() {
            events.push(FlightEvent {
                time: state.time,
                kind: EventKind::Staging { from: idx, to: idx + 1 },
            });
        }
    }

    Flight { samples, events }
}

// ---------------------------------------------------------------------------
// Channel accessors
// ---------------------------------------------------------------------------

impl Flight {
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    pub fn altitudes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.pos.y).collect()
    }

    pub fn vertical_velocities(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.vel.y).collect()
    }

    pub fn horizontal_velocities(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.vel.x).collect()
    }

    pub fn speeds(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.speed()).collect()
    }

    pub fn displacements(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.displacement()).collect()
    }

    /// Samples with any non-finite component. Reported, never masked.
    pub fn non_finite_samples(&self) -> usize {
        self.samples.iter().filter(|s| !s.is_finite()).count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
