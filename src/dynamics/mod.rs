pub mod state;
pub mod planar;

pub use planar::derivatives;
pub use state::{Deriv, SimConfig, State};
