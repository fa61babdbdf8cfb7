use serde::Serialize;
use tracing::debug;

use crate::dynamics::state::{AnglePolicy, ProjectileState, SimConfig};
use super::event::{default_detectors, SimEvent};
use super::integrator::Steps;
use super::schedule::DisplaySchedule;

// ---------------------------------------------------------------------------
// Trace samples
// ---------------------------------------------------------------------------

/// One row of the trace table. Height is already clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub angle_deg: f64,
}

impl Sample {
    pub fn from_state(state: &ProjectileState, policy: AnglePolicy) -> Self {
        Sample {
            time: state.time,
            x: state.pos.x,
            y: state.reported_height(),
            vx: state.vel.x,
            vy: state.vel.y,
            angle_deg: state.flight_path_angle(policy),
        }
    }
}

/// Receives trace samples as the run produces them.
///
/// Implement this to stream rows somewhere other than a `Vec`.
pub trait SampleSink {
    fn record(&mut self, sample: Sample);
}

impl SampleSink for Vec<Sample> {
    fn record(&mut self, sample: Sample) {
        self.push(sample);
    }
}

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Termination {
    Landed,
    TimeLimit,
}

#[derive(Debug, Clone)]
pub struct FlightReport {
    pub final_state: ProjectileState,
    pub max_height: f64,
    pub steps: usize,
    pub termination: Termination,
    pub events: Vec<SimEvent>,
}

impl FlightReport {
    /// Final `(x, y)` with y clamped at ground level.
    pub fn reported_position(&self) -> (f64, f64) {
        (self.final_state.pos.x, self.final_state.reported_height())
    }

    pub fn flight_time(&self) -> f64 {
        self.final_state.time
    }
}

// ---------------------------------------------------------------------------
// Full simulation
// ---------------------------------------------------------------------------

/// Run to completion, streaming trace samples into `sink`.
///
/// Samples are only produced when `config.display` is set.
pub fn simulate_with(
    initial: ProjectileState,
    config: &SimConfig,
    sink: &mut dyn SampleSink,
) -> FlightReport {
    debug!(
        dt = config.dt,
        thrust_time = config.thrust_time,
        sim_time = config.sim_time,
        gravity = config.gravity,
        "starting run"
    );

    let mut schedule = DisplaySchedule::new(config.display_interval);
    let mut detectors = default_detectors();
    let mut events = Vec::new();
    let mut max_height = initial.pos.y;
    let mut prev = initial;
    let mut steps = 0usize;

    for state in Steps::new(initial, config) {
        steps += 1;

        if config.display && schedule.poll(state.time) {
            sink.record(Sample::from_state(&state, config.angle_policy));
        }

        if state.pos.y > max_height {
            max_height = state.pos.y;
        }

        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&prev, &state) {
                debug!(event = kind.label(), t = state.time, x = state.pos.x, y = state.pos.y);
                events.push(SimEvent { kind, state });
            }
        }

        prev = state;
    }

    let termination = if prev.pos.y < 0.0 {
        Termination::Landed
    } else {
        Termination::TimeLimit
    };

    debug!(steps, t = prev.time, max_height, ?termination, "run finished");

    FlightReport { final_state: prev, max_height, steps, termination, events }
}

/// Run to completion, collecting trace samples.
pub fn simulate(initial: ProjectileState, config: &SimConfig) -> (FlightReport, Vec<Sample>) {
    let mut samples = Vec::new();
    let report = simulate_with(initial, config, &mut samples);
    (report, samples)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
