use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::dynamics::state::EARTH_GRAVITY;

pub const MOON_GRAVITY: f64 = -1.62;
pub const MARS_GRAVITY: f64 = -3.71;

/// Bodies with a known uniform surface gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    #[default]
    Earth,
    Moon,
    Mars,
}

impl Body {
    /// Signed vertical gravity (negative = down), m/s^2.
    pub fn surface_gravity(self) -> f64 {
        match self {
            Body::Earth => EARTH_GRAVITY,
            Body::Moon => MOON_GRAVITY,
            Body::Mars => MARS_GRAVITY,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Earth => "Earth",
            Body::Moon => "Moon",
            Body::Mars => "Mars",
        }
    }
}

/// Peak height above launch for a vertical launch speed `vy` under `gravity`.
pub fn ballistic_apex(vy: f64, gravity: f64) -> f64 {
    if vy <= 0.0 || gravity >= 0.0 {
        return 0.0;
    }
    vy * vy / (-2.0 * gravity)
}

/// Time to return to launch height for a vertical launch speed `vy`.
pub fn ballistic_flight_time(vy: f64, gravity: f64) -> f64 {
    if vy <= 0.0 || gravity >= 0.0 {
        return 0.0;
    }
    2.0 * vy / -gravity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_points_down() {
        for body in [Body::Earth, Body::Moon, Body::Mars] {
            assert!(body.surface_gravity() < 0.0, "{} gravity must be negative", body.name());
        }
    }

    #[test]
    fn earth_apex_closed_form() {
        let vy = 50.0 * 45.0_f64.to_radians().sin();
        let h = ballistic_apex(vy, Body::Earth.surface_gravity());
        assert!((h - 63.78).abs() < 0.01, "got {}", h);
    }

    #[test]
    fn weaker_gravity_flies_longer() {
        let t_earth = ballistic_flight_time(10.0, Body::Earth.surface_gravity());
        let t_moon = ballistic_flight_time(10.0, Body::Moon.surface_gravity());
        assert!(t_moon > t_earth);
    }
}
