pub mod guidance;

pub use guidance::{pitch_program, GuidanceParams};
