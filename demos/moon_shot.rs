use std::io::Write;

use thrust_sim::dynamics::state::SimConfig;
use thrust_sim::io::table;
use thrust_sim::launch::presets;
use thrust_sim::physics::Body;
use thrust_sim::sim;

fn main() -> std::io::Result<()> {
    let launch = presets::textbook_lob();
    let initial = launch.initial_state().expect("preset is valid");

    let mut out = std::io::stdout().lock();
    for body in [Body::Earth, Body::Mars, Body::Moon] {
        let config = SimConfig { gravity: body.surface_gravity(), ..SimConfig::default() };
        let (report, _) = sim::simulate(initial, &config);

        writeln!(out, "== {} (g = {} m/s^2)", body.name(), body.surface_gravity())?;
        table::write_summary(&mut out, &report)?;
        writeln!(out)?;
    }
    Ok(())
}
