use super::stage::{Stage, StageBuilder};

// ---------------------------------------------------------------------------
// Mission: ordered sequence of stages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Mission {
    pub name: String,
    pub stages: Vec<Stage>,
    /// Full lift-off mass. May exceed the summed stage wet masses when the
    /// stack carries payload/fairing mass not itemized per stage.
    pub launch_mass: f64,
}

impl Mission {
    /// Summed wet mass of the stage stack alone.
    pub fn stack_mass(&self) -> f64 {
        self.stages.iter().map(|s| s.wet_mass).sum()
    }

    /// Mass at ignition of the given stage.
    ///
    /// Stage 0 lifts the whole vehicle; each later stage starts at its own
    /// wet mass, the spent stages below it having been jettisoned.
    pub fn start_mass_for_stage(&self, idx: usize) -> f64 {
        if idx == 0 {
            self.launch_mass
        } else {
            self.stages[idx].wet_mass
        }
    }

    /// Total burn time across all stages.
    pub fn total_burn_time(&self) -> f64 {
        self.stages.iter().map(|s| s.burn_time).sum()
    }

    pub fn active_stage(&self, idx: usize) -> Option<&Stage> {
        self.stages.get(idx)
    }
}

// ---------------------------------------------------------------------------
// Mission builder
// ---------------------------------------------------------------------------

pub struct MissionBuilder {
    name: String,
    stages: Vec<Stage>,
    launch_mass: Option<f64>,
}

impl MissionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), stages: vec![], launch_mass: None }
    }

    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn launch_mass(mut self, v: f64) -> Self {
        self.launch_mass = Some(v);
        self
    }

    pub fn build(self) -> Mission {
        let stack: f64 = self.stages.iter().map(|s| s.wet_mass).sum();
        Mission {
            name: self.name,
            stages: self.stages,
            launch_mass: self.launch_mass.unwrap_or(stack),
        }
    }
}

// ---------------------------------------------------------------------------
// Preset missions
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// The two-stage vehicle the reference telemetry was flown on.
    pub fn kerbin_two_stage() -> Mission {
        MissionBuilder::new("Kerbin Ascent")
            .stage(
                StageBuilder::new("S1-Booster")
                    .wet_mass(117_000.0)
                    .fuel_mass(101_000.0)
                    .thrust(2_816_500.0)
                    .burn_time(90.0)
                    .ejection_force(100.0)
                    .area(10.0)
                    .build(),
            )
            .stage(
                StageBuilder::new("S2-Upper")
                    .wet_mass(63_800.0)
                    .fuel_mass(33_400.0)
                    .thrust(875_820.0)
                    .burn_time(47.0)
                    .ejection_force(100.0)
                    .area(8.0)
                    .build(),
            )
            .launch_mass(209_946.0)
            .build()
    }
}
