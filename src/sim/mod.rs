pub mod integrator;
pub mod runner;
pub mod event;

pub use event::{EventKind, FlightEvent};
pub use integrator::rk4_step;
pub use runner::{simulate, simulate_stage, Flight};
