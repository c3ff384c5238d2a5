pub mod aerodynamics;
pub mod atmosphere;
pub mod gravity;

pub use aerodynamics::{drag_force, dynamic_pressure};
pub use atmosphere::density;
pub use gravity::gravity_accel;
