pub mod integrator;
pub mod runner;
pub mod event;
pub mod schedule;

pub use runner::{simulate, simulate_with, FlightReport, Sample, SampleSink, Termination};
pub use integrator::{step, steps, Steps};
