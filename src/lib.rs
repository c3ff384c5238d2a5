//! Planar two-stage rocket ascent simulation.
//!
//! A fixed-step RK4 kernel integrates thrust, drag and gravity for a
//! two-stage vehicle flying a pitch-program gravity turn, and records
//! pitch, thrust, dynamic pressure and active stage per sample.
//!
//! ```no_run
//! use ascent_sim::{presets, simulate, GuidanceParams, SimConfig};
//!
//! let rocket = presets::demo();
//! let config = SimConfig { t_final: 220.0, dt: 0.05, guidance: GuidanceParams::demo() };
//! let out = simulate(&rocket, &config);
//! println!("final altitude: {:.0} m", out.final_state().unwrap().pos.y);
//! ```

pub mod dynamics;
pub mod error;
pub mod gnc;
pub mod io;
pub mod physics;
pub mod sim;
pub mod vehicle;

pub use dynamics::state::{SimConfig, State, G0};
pub use dynamics::{active_stage, ActiveStage};
pub use error::{ConfigError, Error};
pub use gnc::{pitch_program, GuidanceParams};
pub use sim::{simulate, SimOutput};
pub use vehicle::{presets, Rocket, Stage, StageBuilder};

/// Validate both configuration halves, then run the kernel.
pub fn run(rocket: &Rocket, config: &SimConfig) -> Result<SimOutput, ConfigError> {
    rocket.validate()?;
    config.validate()?;
    Ok(simulate(rocket, config))
}
