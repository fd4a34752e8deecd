pub mod guidance;

pub use guidance::{commanded_pitch_deg, PitchProfile};
