use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{debug, error};

use thrust_sim::error::InputResult;
use thrust_sim::input::{self, Prompter, RunPlan, Scenario, ThrustInput};
use thrust_sim::io::json::FlightSummary;
use thrust_sim::io::{csv, json, table};
use thrust_sim::physics::Body;
use thrust_sim::sim;
use thrust_sim::types::ProjectileState;

const EXIT_INPUT_ERROR: u8 = 2;
const EXIT_OUTPUT_ERROR: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Fixed-width trace table and summary block
    Table,
    /// Trace samples as CSV
    Csv,
    /// Run summary as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Powered-then-ballistic 2D projectile simulator",
    long_about = None
)]
struct Cli {
    /// YAML scenario file; flags override its values, the rest is prompted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Which thrust question to ask when prompting
    #[arg(long, value_enum, default_value_t = ThrustInput::Acceleration)]
    variant: ThrustInput,

    /// Initial x position (m)
    #[arg(long, allow_hyphen_values = true)]
    x: Option<f64>,

    /// Initial y position (m)
    #[arg(long, allow_hyphen_values = true)]
    y: Option<f64>,

    /// Initial speed (m/s)
    #[arg(long)]
    speed: Option<f64>,

    /// Thrust acceleration (m/s^2)
    #[arg(long, conflicts_with_all = ["force", "mass"])]
    acceleration: Option<f64>,

    /// Thrust force (N), used with --mass
    #[arg(long)]
    force: Option<f64>,

    /// Vehicle mass (kg), used with --force
    #[arg(long)]
    mass: Option<f64>,

    /// Thrust duration (s)
    #[arg(long)]
    thrust_time: Option<f64>,

    /// Launch angle (degrees from horizontal)
    #[arg(long, allow_hyphen_values = true)]
    angle: Option<f64>,

    /// Simulation time limit (s); 0 runs until ground impact
    #[arg(long, allow_hyphen_values = true)]
    sim_time: Option<f64>,

    /// Trace sampling interval (s)
    #[arg(long, allow_hyphen_values = true)]
    display_interval: Option<f64>,

    /// Print the trace table without asking
    #[arg(long, conflicts_with = "no_trace")]
    trace: bool,

    /// Skip the trace table without asking
    #[arg(long)]
    no_trace: bool,

    /// Integration timestep (s)
    #[arg(long)]
    dt: Option<f64>,

    /// Body whose surface gravity to use
    #[arg(long, value_enum)]
    body: Option<Body>,

    /// Signed vertical gravity (m/s^2), overrides --body
    #[arg(long, allow_hyphen_values = true)]
    gravity: Option<f64>,

    /// Report +90° for every vertical flight path, ignoring direction
    #[arg(long)]
    legacy_angle: bool,

    /// Force straight-up thrust when the angle is a multiple of 90°
    #[arg(long)]
    vertical_right_angles: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only warnings and errors on stderr
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn overrides(&self) -> Scenario {
        let trace = match (self.trace, self.no_trace) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => match self.format {
                Format::Csv => Some(true),
                Format::Json => Some(false),
                Format::Table => None,
            },
        };
        Scenario {
            x: self.x,
            y: self.y,
            speed: self.speed,
            acceleration: self.acceleration,
            force: self.force,
            mass: self.mass,
            thrust_time: self.thrust_time,
            angle_deg: self.angle,
            sim_time: self.sim_time,
            display_interval: self.display_interval,
            trace,
            dt: self.dt,
            body: self.body,
            gravity: self.gravity,
            legacy_angle: self.legacy_angle.then_some(true),
            vertical_right_angles: self.vertical_right_angles.then_some(true),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let plan = match resolve_plan(&cli) {
        Ok(plan) => plan,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(EXIT_INPUT_ERROR);
        }
    };

    let initial = match plan.launch.initial_state() {
        Ok(s) => s,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(EXIT_INPUT_ERROR);
        }
    };

    match run(&plan, initial, cli.format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to write output: {}", e);
            ExitCode::from(EXIT_OUTPUT_ERROR)
        }
    }
}

fn resolve_plan(cli: &Cli) -> InputResult<RunPlan> {
    let base = match &cli.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };
    let scenario = base.merged_with(cli.overrides());
    debug!(?scenario, "resolved scenario");

    let stdin = io::stdin();
    // Keep stdout clean for machine-readable formats.
    let prompt_out: Box<dyn Write> = match cli.format {
        Format::Table => Box::new(io::stdout()),
        Format::Csv | Format::Json => Box::new(io::stderr()),
    };
    let mut prompter = Prompter::new(stdin.lock(), prompt_out);
    input::gather(&scenario, cli.variant, &mut prompter)
}

fn run(plan: &RunPlan, initial: ProjectileState, format: Format) -> io::Result<()> {
    let config = &plan.config;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        Format::Table => {
            table::write_initial_conditions(&mut out, &initial, config.gravity)?;
            if config.display {
                writeln!(out, "Simulating...")?;
                table::write_header(&mut out)?;
            }

            let mut sink = table::TableSink::new(&mut out);
            let report = sim::simulate_with(initial, config, &mut sink);
            sink.finish()?;

            if config.display {
                table::write_header(&mut out)?;
                writeln!(out, "Simulation complete.")?;
            }
            table::write_summary(&mut out, &report)?;
        }
        Format::Csv => {
            let (_, samples) = sim::simulate(initial, config);
            csv::write_samples(&mut out, &samples)?;
        }
        Format::Json => {
            let (report, _) = sim::simulate(initial, config);
            json::write_summary(&mut out, &FlightSummary::from_report(&report))?;
        }
    }

    out.flush()
}
