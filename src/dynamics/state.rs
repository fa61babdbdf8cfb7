use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

/// Signed surface gravity used when no other body is selected, m/s^2.
pub const EARTH_GRAVITY: f64 = -9.8;

/// Fixed integration timestep, s.
pub const DEFAULT_DT: f64 = 0.001;

pub const DEFAULT_DISPLAY_INTERVAL: f64 = 0.1; // s
pub const DEFAULT_SIM_TIME: f64 = 50.0;        // s

// ---------------------------------------------------------------------------
// Projectile state
// ---------------------------------------------------------------------------

/// Point-mass state at a single instant.
/// Frame: x downrange, y up, origin at ground level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileState {
    pub time: f64,              // s
    pub pos: Vector2<f64>,      // m
    pub vel: Vector2<f64>,      // m/s
    pub thrust: Vector2<f64>,   // m/s^2, zeroed after cutoff
}

impl ProjectileState {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, thrust: Vector2<f64>) -> Self {
        Self { time: 0.0, pos, vel, thrust }
    }

    /// Unpowered state at rest at `(x, y)`.
    pub fn at_rest(x: f64, y: f64) -> Self {
        Self::new(Vector2::new(x, y), Vector2::zeros(), Vector2::zeros())
    }

    pub fn is_thrusting(&self) -> bool {
        self.thrust.x != 0.0 || self.thrust.y != 0.0
    }

    /// Height as shown to the user. The stored value may dip below zero on the
    /// final step.
    pub fn reported_height(&self) -> f64 {
        self.pos.y.max(0.0)
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    /// Flight-path angle in degrees, measured from the +x axis.
    pub fn flight_path_angle(&self, policy: AnglePolicy) -> f64 {
        if self.vel.x != 0.0 {
            (self.vel.y / self.vel.x).atan().to_degrees()
        } else {
            match policy {
                AnglePolicy::SignAware if self.vel.y < 0.0 => -90.0,
                AnglePolicy::SignAware | AnglePolicy::AlwaysUp => 90.0,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Angle policy for purely vertical motion
// ---------------------------------------------------------------------------

/// How the flight-path angle is reported when `vx == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnglePolicy {
    /// +90° when climbing or hovering, -90° when falling.
    #[default]
    SignAware,
    /// Always +90°, regardless of the sign of `vy`.
    AlwaysUp,
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,                // integration timestep, s
    pub thrust_time: f64,       // thrust cutoff, s
    pub sim_time: f64,          // hard stop, s (0 = until ground impact)
    pub display_interval: f64,  // trace sampling interval, s
    pub display: bool,          // emit trace samples
    pub gravity: f64,           // signed vertical gravity, m/s^2
    pub angle_policy: AnglePolicy,
}

impl SimConfig {
    pub fn is_unbounded(&self) -> bool {
        self.sim_time == 0.0
    }

    /// Loop predicate: still above ground and inside the time limit.
    pub fn keeps_running(&self, state: &ProjectileState) -> bool {
        state.pos.y >= 0.0 && (self.is_unbounded() || state.time <= self.sim_time)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            thrust_time: 0.0,
            sim_time: 0.0,
            display_interval: DEFAULT_DISPLAY_INTERVAL,
            display: false,
            gravity: EARTH_GRAVITY,
            angle_policy: AnglePolicy::SignAware,
        }
    }
}
