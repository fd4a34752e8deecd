pub mod stage;
pub mod mission;

pub use stage::{Stage, StageBuilder};
pub use mission::{presets, Mission, MissionBuilder};
