pub mod physics;
pub mod gnc;
pub mod vehicle;
pub mod dynamics;
pub mod sim;
pub mod compare;
pub mod io;

// Convenience re-exports for the common types
pub mod types {
    pub use crate::dynamics::state::{Deriv, SimConfig, State};
    pub use crate::gnc::guidance::PitchProfile;
    pub use crate::physics::environment::Environment;
    pub use crate::sim::runner::Flight;
    pub use crate::vehicle::{Mission, Stage};
}
