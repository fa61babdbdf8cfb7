use crate::dynamics;
use crate::dynamics::state::{ProjectileState, SimConfig};

// ---------------------------------------------------------------------------
// Fixed-step integrator with thrust cutoff
// ---------------------------------------------------------------------------

/// Single step: advance time, integrate x then y, then apply the cutoff rule.
///
/// Once `time >= thrust_time` the thrust vector is zeroed for good; later
/// steps never restore it.
pub fn step(state: &mut ProjectileState, config: &SimConfig) {
    state.time += config.dt;
    dynamics::advance(state, config.thrust_time, config.gravity, config.dt);

    if state.time >= config.thrust_time {
        state.thrust.x = 0.0;
        state.thrust.y = 0.0;
    }
}

// ---------------------------------------------------------------------------
// Lazy step sequence
// ---------------------------------------------------------------------------

/// Finite iterator over per-step snapshots of one run.
///
/// Yields the state after every completed step and stops as soon as the loop
/// predicate (`y >= 0` and inside `sim_time`) fails before a step. Cloning a
/// fresh `Steps` from the same initial state replays the run exactly.
#[derive(Debug, Clone)]
pub struct Steps<'a> {
    state: ProjectileState,
    config: &'a SimConfig,
}

impl<'a> Steps<'a> {
    pub fn new(initial: ProjectileState, config: &'a SimConfig) -> Self {
        Self { state: initial, config }
    }

    /// State after the most recent step (the initial state before any).
    pub fn current(&self) -> &ProjectileState {
        &self.state
    }
}

impl Iterator for Steps<'_> {
    type Item = ProjectileState;

    fn next(&mut self) -> Option<ProjectileState> {
        if !self.config.keeps_running(&self.state) {
            return None;
        }
        step(&mut self.state, self.config);
        Some(self.state)
    }
}

/// Convenience: iterate a run from `initial`.
pub fn steps(initial: ProjectileState, config: &SimConfig) -> Steps<'_> {
    Steps::new(initial, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn powered(thrust_time: f64) -> (ProjectileState, SimConfig) {
        let s = ProjectileState::new(
            Vector2::zeros(),
            Vector2::new(10.0, 10.0),
            Vector2::new(5.0, 30.0),
        );
        let config = SimConfig { thrust_time, dt: 0.01, ..SimConfig::default() };
        (s, config)
    }

    #[test]
    fn time_advances_by_dt() {
        let (s, config) = powered(1.0);
        let mut prev = s.time;
        for (i, snap) in steps(s, &config).enumerate().take(500) {
            let expected = config.dt * (i + 1) as f64;
            assert!((snap.time - expected).abs() < 1e-9, "step {} at t={}", i, snap.time);
            assert!(snap.time > prev);
            prev = snap.time;
        }
    }

    #[test]
    fn thrust_cut_after_thrust_time() {
        let (s, config) = powered(1.0);
        let traj: Vec<_> = steps(s, &config).collect();
        assert!(traj.iter().any(|s| s.time < config.thrust_time && s.is_thrusting()));
        for snap in traj.iter().filter(|s| s.time >= config.thrust_time) {
            assert!(!snap.is_thrusting(), "thrust still on at t={}", snap.time);
        }
    }

    #[test]
    fn ends_on_first_negative_height() {
        let (s, config) = powered(0.5);
        let traj: Vec<_> = steps(s, &config).collect();
        let last = traj.last().unwrap();
        assert!(last.pos.y < 0.0);
        assert!(traj[..traj.len() - 1].iter().all(|s| s.pos.y >= 0.0));
    }

    #[test]
    fn replay_is_deterministic() {
        let (s, config) = powered(0.7);
        let a: Vec<_> = steps(s, &config).collect();
        let b: Vec<_> = steps(s, &config).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_thrust_time_is_ballistic() {
        let (s, config) = powered(0.0);
        let powered_run: Vec<_> = steps(s, &config).collect();

        // Same start with x-thrust applied once, then nothing.
        let mut ballistic = s;
        ballistic.thrust = Vector2::zeros();
        let coast: Vec<_> = steps(ballistic, &config).collect();

        assert_eq!(powered_run.len(), coast.len());
        for (p, c) in powered_run.iter().zip(&coast) {
            assert_eq!(p.pos.y, c.pos.y, "y must not see thrust at t={}", p.time);
            assert_eq!(p.vel.y, c.vel.y);
        }
    }

    #[test]
    fn sim_time_bounds_iterations() {
        let s = ProjectileState::new(Vector2::zeros(), Vector2::new(0.0, 1000.0), Vector2::zeros());
        let config = SimConfig { sim_time: 2.0, dt: 0.01, ..SimConfig::default() };
        let n = steps(s, &config).count();
        assert!(n as f64 <= config.sim_time / config.dt + 2.0, "ran {} steps", n);
        assert!(n as f64 >= config.sim_time / config.dt, "ran {} steps", n);
    }
}
