pub mod prompt;
pub mod scenario;

use std::fmt;
use std::io::{BufRead, Write};

use clap::ValueEnum;
use tracing::warn;

use crate::dynamics::state::{
    AnglePolicy, SimConfig, DEFAULT_DISPLAY_INTERVAL, DEFAULT_DT, DEFAULT_SIM_TIME,
};
use crate::error::{InputError, InputResult};
use crate::launch::{LaunchParams, ThrustSpec};

pub use prompt::Prompter;
pub use scenario::Scenario;

// ---------------------------------------------------------------------------
// Input variants
// ---------------------------------------------------------------------------

/// Which thrust question the interactive front end asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThrustInput {
    /// Thrust acceleration in m/s^2.
    #[default]
    Acceleration,
    /// Vehicle mass in kg, then thrust force in N.
    Force,
}

// ---------------------------------------------------------------------------
// Fallbacks for out-of-range values
// ---------------------------------------------------------------------------

/// A substitution made for an invalid input value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fallback {
    SimTime { given: f64 },
    DisplayInterval { given: f64 },
    TimeStep { given: f64 },
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::SimTime { given } => write!(
                f,
                "Invalid simulation time ({given}). Using default value of {DEFAULT_SIM_TIME} seconds."
            ),
            Fallback::DisplayInterval { given } => write!(
                f,
                "Invalid display interval ({given}). Using default value of {DEFAULT_DISPLAY_INTERVAL} seconds."
            ),
            Fallback::TimeStep { given } => write!(
                f,
                "Invalid time step ({given}). Using default value of {DEFAULT_DT} seconds."
            ),
        }
    }
}

/// Replace out-of-range timing values in `config` with their defaults.
///
/// `sim_time == 0` is valid and means "no limit"; negative or non-finite
/// values fall back. Interval and step must be strictly positive.
pub fn apply_fallbacks(config: &mut SimConfig) -> Vec<Fallback> {
    let mut applied = Vec::new();

    if !(config.sim_time >= 0.0 && config.sim_time.is_finite()) {
        applied.push(Fallback::SimTime { given: config.sim_time });
        config.sim_time = DEFAULT_SIM_TIME;
    }
    if !(config.display_interval > 0.0 && config.display_interval.is_finite()) {
        applied.push(Fallback::DisplayInterval { given: config.display_interval });
        config.display_interval = DEFAULT_DISPLAY_INTERVAL;
    }
    if !(config.dt > 0.0 && config.dt.is_finite()) {
        applied.push(Fallback::TimeStep { given: config.dt });
        config.dt = DEFAULT_DT;
    }

    for fb in &applied {
        warn!(?fb, "input fallback");
    }
    applied
}

// ---------------------------------------------------------------------------
// Resolved run
// ---------------------------------------------------------------------------

/// Everything needed to start a run.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub launch: LaunchParams,
    pub config: SimConfig,
}

/// Fill in a run from `scenario`, prompting for whatever it leaves out.
///
/// Prompts come in the fixed order position, speed, thrust, thrust time,
/// angle, time limit, display interval, trace. Fallback warnings are printed
/// through the prompter as they happen.
pub fn gather<R: BufRead, W: Write>(
    scenario: &Scenario,
    mode: ThrustInput,
    prompter: &mut Prompter<R, W>,
) -> InputResult<RunPlan> {
    if scenario.acceleration.is_some() && (scenario.force.is_some() || scenario.mass.is_some()) {
        return Err(InputError::ConflictingThrust);
    }
    let gravity = finite(scenario.resolved_gravity(), "gravity")?;
    if gravity >= 0.0 {
        return Err(InputError::InvalidGravity(gravity));
    }
    let dt = scenario.dt.map(|v| finite(v, "time step")).transpose()?;

    let (x, y) = match (scenario.x, scenario.y) {
        (Some(x), Some(y)) => (finite(x, "position")?, finite(y, "position")?),
        _ => {
            let [x, y] = prompter.read_numbers::<2>("Initial position (x y): ", "position")?;
            (x, y)
        }
    };

    let speed = ask(prompter, scenario.speed, "Initial velocity (m/s): ", "initial velocity")?;

    let thrust = if let Some(a) = scenario.acceleration {
        ThrustSpec::Acceleration(finite(a, "acceleration")?)
    } else if scenario.force.is_some() || scenario.mass.is_some() || mode == ThrustInput::Force {
        let mass = ask(prompter, scenario.mass, "Mass (kg): ", "mass")?;
        let force = ask(prompter, scenario.force, "Thrust (N): ", "thrust")?;
        ThrustSpec::Force { force, mass }
    } else {
        ThrustSpec::Acceleration(ask(prompter, None, "Acceleration (m/s^2): ", "acceleration")?)
    };

    let thrust_time = ask(prompter, scenario.thrust_time, "Thrust time (seconds): ", "thrust time")?;
    let angle_deg = ask(prompter, scenario.angle_deg, "Initial angle (degrees): ", "angle")?;

    let mut config = SimConfig {
        dt: dt.unwrap_or(DEFAULT_DT),
        thrust_time,
        gravity,
        angle_policy: if scenario.legacy_angle.unwrap_or(false) {
            AnglePolicy::AlwaysUp
        } else {
            AnglePolicy::SignAware
        },
        ..SimConfig::default()
    };

    config.sim_time = ask(prompter, scenario.sim_time, "Simulation time (seconds): ", "simulation time")?;
    report_fallbacks(prompter, &mut config)?;

    config.display_interval = ask(
        prompter,
        scenario.display_interval,
        "Output display interval (seconds): ",
        "display interval",
    )?;
    report_fallbacks(prompter, &mut config)?;

    config.display = match scenario.trace {
        Some(t) => t,
        None => prompter.read_yes_no("Simulate (y/n): ", "trace choice")?,
    };

    let launch = LaunchParams {
        x,
        y,
        speed,
        thrust,
        angle_deg,
        vertical_thrust_on_right_angles: scenario.vertical_right_angles.unwrap_or(false),
    };

    Ok(RunPlan { launch, config })
}

fn ask<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    preset: Option<f64>,
    prompt: &str,
    field: &'static str,
) -> InputResult<f64> {
    match preset {
        Some(v) => finite(v, field),
        None => prompter.read_f64(prompt, field),
    }
}

/// Values from flags and scenario files skip the prompter, so check them here.
fn finite(value: f64, field: &'static str) -> InputResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotFinite { field, value })
    }
}

/// Apply fallbacks now so each warning follows the prompt it belongs to.
fn report_fallbacks<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &mut SimConfig,
) -> InputResult<()> {
    for fb in apply_fallbacks(config) {
        prompter.say(&fb.to_string())?;
    }
    Ok(())
}
