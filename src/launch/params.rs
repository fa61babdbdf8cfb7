use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::dynamics::state::ProjectileState;
use crate::error::{InputError, InputResult};

// ---------------------------------------------------------------------------
// Thrust input
// ---------------------------------------------------------------------------

/// How the thrust magnitude was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThrustSpec {
    /// Thrust acceleration magnitude, m/s^2.
    Acceleration(f64),
    /// Thrust force (N) acting on a mass (kg).
    Force { force: f64, mass: f64 },
}

impl ThrustSpec {
    /// Thrust acceleration magnitude, m/s^2.
    pub fn acceleration(self) -> InputResult<f64> {
        match self {
            ThrustSpec::Acceleration(a) => Ok(a),
            ThrustSpec::Force { force, mass } => {
                if !(mass.is_finite() && mass > 0.0) {
                    return Err(InputError::InvalidMass(mass));
                }
                Ok(force / mass)
            }
        }
    }
}

impl Default for ThrustSpec {
    fn default() -> Self {
        ThrustSpec::Acceleration(0.0)
    }
}

// ---------------------------------------------------------------------------
// Launch parameters
// ---------------------------------------------------------------------------

/// User-facing launch description, converted into an initial state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchParams {
    pub x: f64,               // m
    pub y: f64,               // m
    pub speed: f64,           // m/s
    pub thrust: ThrustSpec,
    pub angle_deg: f64,       // deg from +x, counter-clockwise
    /// Legacy behaviour: when the truncated angle is a multiple of 90°,
    /// point all thrust straight up regardless of the launch angle.
    #[serde(default)]
    pub vertical_thrust_on_right_angles: bool,
}

impl LaunchParams {
    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }

    fn is_right_angle(&self) -> bool {
        (self.angle_deg.trunc() as i64) % 90 == 0
    }

    /// Resolve speed, thrust and angle into state components.
    pub fn initial_state(&self) -> InputResult<ProjectileState> {
        let theta = self.angle_rad();
        let a = self.thrust.acceleration()?;

        let vel = Vector2::new(self.speed * theta.cos(), self.speed * theta.sin());
        let thrust = if self.vertical_thrust_on_right_angles && self.is_right_angle() {
            Vector2::new(0.0, a)
        } else {
            Vector2::new(a * theta.cos(), a * theta.sin())
        };

        Ok(ProjectileState::new(Vector2::new(self.x, self.y), vel, thrust))
    }
}

// ---------------------------------------------------------------------------
// Launch builder
// ---------------------------------------------------------------------------

pub struct LaunchBuilder {
    x: f64,
    y: f64,
    speed: f64,
    thrust: ThrustSpec,
    angle_deg: f64,
    vertical_thrust_on_right_angles: bool,
}

impl LaunchBuilder {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            speed: 0.0,
            thrust: ThrustSpec::default(),
            angle_deg: 45.0,
            vertical_thrust_on_right_angles: false,
        }
    }

    pub fn position(mut self, x: f64, y: f64) -> Self { self.x = x; self.y = y; self }
    pub fn speed(mut self, v: f64) -> Self { self.speed = v; self }
    pub fn angle_deg(mut self, v: f64) -> Self { self.angle_deg = v; self }
    pub fn acceleration(mut self, v: f64) -> Self { self.thrust = ThrustSpec::Acceleration(v); self }
    pub fn force(mut self, force: f64, mass: f64) -> Self { self.thrust = ThrustSpec::Force { force, mass }; self }
    pub fn vertical_thrust_on_right_angles(mut self, v: bool) -> Self { self.vertical_thrust_on_right_angles = v; self }

    pub fn build(self) -> LaunchParams {
        LaunchParams {
            x: self.x,
            y: self.y,
            speed: self.speed,
            thrust: self.thrust,
            angle_deg: self.angle_deg,
            vertical_thrust_on_right_angles: self.vertical_thrust_on_right_angles,
        }
    }
}

impl Default for LaunchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
