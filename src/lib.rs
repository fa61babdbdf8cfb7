pub mod dynamics;
pub mod physics;
pub mod launch;
pub mod sim;
pub mod io;
pub mod input;
pub mod error;

pub mod types {
    pub use crate::dynamics::state::{
        AnglePolicy, ProjectileState, SimConfig, DEFAULT_DISPLAY_INTERVAL, DEFAULT_DT,
        DEFAULT_SIM_TIME, EARTH_GRAVITY,
    };
    pub use crate::launch::{LaunchParams, ThrustSpec};
    pub use crate::physics::Body;
}
