use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::InputResult;
use crate::physics::gravity::Body;

/// Partially specified run, from a YAML file and/or command-line flags.
///
/// Every field is optional; whatever is still missing after merging is
/// prompted for.
///
/// ```yaml
/// x: 0.0
/// y: 0.0
/// speed: 50.0
/// acceleration: 0.0
/// thrust_time: 0.0
/// angle_deg: 45.0
/// sim_time: 0.0          # 0 = until ground impact
/// display_interval: 0.5
/// trace: true
/// body: moon             # or `gravity: -1.62`
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub speed: Option<f64>,
    pub acceleration: Option<f64>,
    pub force: Option<f64>,
    pub mass: Option<f64>,
    pub thrust_time: Option<f64>,
    pub angle_deg: Option<f64>,
    pub sim_time: Option<f64>,
    pub display_interval: Option<f64>,
    pub trace: Option<bool>,
    pub dt: Option<f64>,
    pub body: Option<Body>,
    pub gravity: Option<f64>,
    pub legacy_angle: Option<bool>,
    pub vertical_right_angles: Option<bool>,
}

impl Scenario {
    pub fn from_yaml_str(text: &str) -> InputResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> InputResult<Self> {
        debug!(path = %path.display(), "loading scenario");
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Field-wise merge; values set in `overrides` win.
    pub fn merged_with(self, overrides: Scenario) -> Scenario {
        Scenario {
            x: overrides.x.or(self.x),
            y: overrides.y.or(self.y),
            speed: overrides.speed.or(self.speed),
            acceleration: overrides.acceleration.or(self.acceleration),
            force: overrides.force.or(self.force),
            mass: overrides.mass.or(self.mass),
            thrust_time: overrides.thrust_time.or(self.thrust_time),
            angle_deg: overrides.angle_deg.or(self.angle_deg),
            sim_time: overrides.sim_time.or(self.sim_time),
            display_interval: overrides.display_interval.or(self.display_interval),
            trace: overrides.trace.or(self.trace),
            dt: overrides.dt.or(self.dt),
            body: overrides.body.or(self.body),
            gravity: overrides.gravity.or(self.gravity),
            legacy_angle: overrides.legacy_angle.or(self.legacy_angle),
            vertical_right_angles: overrides.vertical_right_angles.or(self.vertical_right_angles),
        }
    }

    /// Signed gravity: an explicit value wins over a named body.
    pub fn resolved_gravity(&self) -> f64 {
        self.gravity
            .unwrap_or_else(|| self.body.unwrap_or_default().surface_gravity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::EARTH_GRAVITY;
    use crate::error::InputError;

    #[test]
    fn parses_partial_yaml() {
        let s = Scenario::from_yaml_str("speed: 50\nangle_deg: 45\nbody: moon\n").unwrap();
        assert_eq!(s.speed, Some(50.0));
        assert_eq!(s.angle_deg, Some(45.0));
        assert_eq!(s.body, Some(Body::Moon));
        assert!(s.x.is_none());
        assert!((s.resolved_gravity() + 1.62).abs() < 1e-12);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Scenario::from_yaml_str("sped: 50\n").unwrap_err();
        assert!(matches!(err, InputError::Scenario(_)));
    }

    #[test]
    fn overrides_win() {
        let file = Scenario { speed: Some(10.0), angle_deg: Some(30.0), ..Default::default() };
        let flags = Scenario { speed: Some(20.0), ..Default::default() };
        let merged = file.merged_with(flags);
        assert_eq!(merged.speed, Some(20.0));
        assert_eq!(merged.angle_deg, Some(30.0));
    }

    #[test]
    fn explicit_gravity_beats_body() {
        let s = Scenario { body: Some(Body::Mars), gravity: Some(-2.0), ..Default::default() };
        assert_eq!(s.resolved_gravity(), -2.0);
        assert_eq!(Scenario::default().resolved_gravity(), EARTH_GRAVITY);
    }
}
