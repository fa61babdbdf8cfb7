pub mod gravity;

pub use gravity::Body;
