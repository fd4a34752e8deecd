use std::fmt;

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

/// Kinds of events emitted by the stage sequencer.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Ignition { stage: usize },
    EjectionWindow { stage: usize },
    Burnout { stage: usize },
    Staging { from: usize, to: usize },
}

/// A discrete event on the global time axis.
#[derive(Debug, Clone)]
pub struct FlightEvent {
    pub time: f64,
    pub kind: EventKind,
}

impl fmt::Display for FlightEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EventKind::Ignition { stage } => {
                write!(f, "IGNITION  t={:>6.1}s  stage {}", self.time, stage + 1)
            }
            EventKind::EjectionWindow { stage } => {
                write!(f, "EJECTION  t={:>6.1}s  stage {}", self.time, stage + 1)
            }
            EventKind::Burnout { stage } => {
                write!(f, "BURNOUT   t={:>6.1}s  stage {}", self.time, stage + 1)
            }
            EventKind::Staging { from, to } => {
                write!(f, "STAGING   t={:>6.1}s  {} -> {}", self.time, from + 1, to + 1)
            }
        }
    }
}
