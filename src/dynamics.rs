pub mod state;

use crate::dynamics::state::ProjectileState;

// ---------------------------------------------------------------------------
// Equations of motion (2D point mass, constant thrust then coast)
// ---------------------------------------------------------------------------

/// Advance the horizontal axis by one step.
///
/// Gravity does not act on x; position moves with the current velocity, then
/// velocity picks up the thrust term.
pub fn update_x(state: &mut ProjectileState, dt: f64) {
    state.pos.x += state.vel.x * dt;
    state.vel.x += state.thrust.x * dt;
}

/// Advance the vertical axis by one step.
///
/// While `time <= thrust_time` the vertical thrust adds to gravity. The
/// position uses the current velocity plus the quadratic term, and velocity
/// is updated afterwards.
pub fn update_y(state: &mut ProjectileState, thrust_time: f64, gravity: f64, dt: f64) {
    let accel = if state.time <= thrust_time {
        state.thrust.y + gravity
    } else {
        gravity
    };
    state.pos.y += state.vel.y * dt + 0.5 * accel * dt * dt;
    state.vel.y += accel * dt;
}

/// One full kinematic step: x first, then y. Time is not advanced here.
pub fn advance(state: &mut ProjectileState, thrust_time: f64, gravity: f64, dt: f64) {
    update_x(state, dt);
    update_y(state, thrust_time, gravity, dt);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::EARTH_GRAVITY;
    use nalgebra::Vector2;

    fn state(vel: (f64, f64), thrust: (f64, f64)) -> ProjectileState {
        ProjectileState::new(
            Vector2::zeros(),
            Vector2::new(vel.0, vel.1),
            Vector2::new(thrust.0, thrust.1),
        )
    }

    #[test]
    fn x_uses_old_velocity_for_position() {
        let mut s = state((10.0, 0.0), (2.0, 0.0));
        update_x(&mut s, 0.5);
        assert!((s.pos.x - 5.0).abs() < 1e-12);
        assert!((s.vel.x - 11.0).abs() < 1e-12);
    }

    #[test]
    fn x_ignores_gravity() {
        let mut s = state((3.0, 0.0), (0.0, 0.0));
        for _ in 0..100 {
            update_x(&mut s, 0.01);
        }
        assert!((s.vel.x - 3.0).abs() < 1e-12);
        assert!((s.pos.x - 3.0).abs() < 1e-9);
    }

    #[test]
    fn y_thrust_phase_adds_thrust_to_gravity() {
        let mut s = state((0.0, 5.0), (0.0, 20.0));
        s.time = 1.0;
        update_y(&mut s, 2.0, EARTH_GRAVITY, 0.1);
        let a = 20.0 + EARTH_GRAVITY;
        assert!((s.pos.y - (5.0 * 0.1 + 0.5 * a * 0.01)).abs() < 1e-12);
        assert!((s.vel.y - (5.0 + a * 0.1)).abs() < 1e-12);
    }

    #[test]
    fn y_coast_phase_ignores_thrust() {
        let mut s = state((0.0, 5.0), (0.0, 20.0));
        s.time = 2.5;
        update_y(&mut s, 2.0, EARTH_GRAVITY, 0.1);
        assert!((s.pos.y - (0.5 + 0.5 * EARTH_GRAVITY * 0.01)).abs() < 1e-12);
        assert!((s.vel.y - (5.0 + EARTH_GRAVITY * 0.1)).abs() < 1e-12);
    }

    #[test]
    fn thrust_boundary_is_inclusive() {
        let mut s = state((0.0, 0.0), (0.0, 20.0));
        s.time = 2.0;
        update_y(&mut s, 2.0, 0.0, 1.0);
        assert!((s.vel.y - 20.0).abs() < 1e-12, "t == thrust_time is still powered");
    }

    #[test]
    fn alternate_gravity_is_honoured() {
        let mut s = state((0.0, 0.0), (0.0, 0.0));
        update_y(&mut s, 0.0, -1.62, 1.0);
        assert!((s.vel.y + 1.62).abs() < 1e-12);
    }
}
