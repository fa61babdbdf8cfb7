pub mod params;

pub use params::{LaunchBuilder, LaunchParams, ThrustSpec};

// ---------------------------------------------------------------------------
// Preset scenarios
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Unpowered 50 m/s shot at 45° from the origin.
    pub fn textbook_lob() -> LaunchParams {
        LaunchBuilder::new().speed(50.0).angle_deg(45.0).build()
    }

    /// Model rocket: 2 kg, 60 N motor, launched at 80°.
    pub fn model_rocket() -> LaunchParams {
        LaunchBuilder::new().speed(0.0).force(60.0, 2.0).angle_deg(80.0).build()
    }

    pub const MODEL_ROCKET_BURN: f64 = 3.0; // s
}
