use serde::Serialize;

use crate::dynamics::state::ProjectileState;

// ---------------------------------------------------------------------------
// Simulation events
// ---------------------------------------------------------------------------

/// Kinds of flight events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    ThrustCutoff,
    Apex,
    Landing,
}

impl EventKind {
    pub fn label(self) -> &'static str {
        match self {
            EventKind::ThrustCutoff => "CUTOFF",
            EventKind::Apex => "APEX",
            EventKind::Landing => "LANDING",
        }
    }
}

/// A discrete event that occurred during simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimEvent {
    pub kind: EventKind,
    pub state: ProjectileState,
}

impl SimEvent {
    pub fn time(&self) -> f64 {
        self.state.time
    }
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive states and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &ProjectileState, current: &ProjectileState) -> Option<EventKind>;
}

/// Detects the step on which thrust is removed.
#[derive(Debug, Default)]
pub struct CutoffDetector {
    fired: bool,
}

impl EventDetector for CutoffDetector {
    fn check(&mut self, prev: &ProjectileState, current: &ProjectileState) -> Option<EventKind> {
        if !self.fired && prev.is_thrusting() && !current.is_thrusting() {
            self.fired = true;
            Some(EventKind::ThrustCutoff)
        } else {
            None
        }
    }
}

/// Detects the apex (vertical velocity going from rising to not rising).
#[derive(Debug, Default)]
pub struct ApexDetector {
    fired: bool,
}

impl EventDetector for ApexDetector {
    fn check(&mut self, prev: &ProjectileState, current: &ProjectileState) -> Option<EventKind> {
        if !self.fired && prev.vel.y > 0.0 && current.vel.y <= 0.0 {
            self.fired = true;
            Some(EventKind::Apex)
        } else {
            None
        }
    }
}

/// Detects the ground crossing that ends the run.
pub struct LandingDetector;

impl EventDetector for LandingDetector {
    fn check(&mut self, prev: &ProjectileState, current: &ProjectileState) -> Option<EventKind> {
        if prev.pos.y >= 0.0 && current.pos.y < 0.0 {
            Some(EventKind::Landing)
        } else {
            None
        }
    }
}

/// The detector set used by the simulation driver.
pub fn default_detectors() -> Vec<Box<dyn EventDetector>> {
    vec![
        Box::new(CutoffDetector::default()),
        Box::new(ApexDetector::default()),
        Box::new(LandingDetector),
    ]
}
