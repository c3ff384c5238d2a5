pub mod rocket;
pub mod stage;

pub use rocket::{presets, Rocket};
pub use stage::{Stage, StageBuilder};
