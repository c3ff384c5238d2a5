use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gnc::GuidanceParams;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G0: f64 = 9.80665; // standard gravity, m/s^2

// ---------------------------------------------------------------------------
// Planar state: downrange/altitude position, velocity, mass
// ---------------------------------------------------------------------------

/// Vehicle state at one sample.
/// Frame: x = downrange, y = altitude (up), origin at the pad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub pos: Vector2<f64>, // m   [downrange, altitude]
    pub vel: Vector2<f64>, // m/s
    pub mass: f64,         // kg
}

impl State {
    /// Vehicle sitting on the pad with the given mass.
    pub fn on_pad(mass: f64) -> Self {
        Self {
            pos: Vector2::zeros(),
            vel: Vector2::zeros(),
            mass,
        }
    }

    /// Advance state by a derivative scaled by dt (used inside RK4).
    pub fn apply(&self, d: &Deriv, dt: f64) -> State {
        State {
            pos: self.pos + d.dpos * dt,
            vel: self.vel + d.dvel * dt,
            mass: self.mass + d.dmass * dt,
        }
    }

    pub fn altitude(&self) -> f64 {
        self.pos.y
    }

    pub fn downrange(&self) -> f64 {
        self.pos.x
    }

    pub fn speed(&self) -> f64 {
        self.vel.x.hypot(self.vel.y)
    }

    /// Flat `[x, y, vx, vy, m]` view.
    pub fn to_array(&self) -> [f64; 5] {
        [self.pos.x, self.pos.y, self.vel.x, self.vel.y, self.mass]
    }
}

// ---------------------------------------------------------------------------
// State derivative (dp/dt, dv/dt, dm/dt)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deriv {
    pub dpos: Vector2<f64>, // velocity
    pub dvel: Vector2<f64>, // acceleration
    pub dmass: f64,         // negative while a stage burns
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub t_final: f64, // total simulated duration, s
    pub dt: f64,      // fixed integration step, s
    pub guidance: GuidanceParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            t_final: 250.0,
            dt: 0.05, // 20 Hz
            guidance: GuidanceParams::default(),
        }
    }
}

impl SimConfig {
    /// Number of stored samples, including the initial condition at t = 0.
    pub fn sample_count(&self) -> usize {
        (self.t_final / self.dt).floor() as usize + 1
    }

    /// Time of sample `i`. Computed by multiplication so that boundary
    /// comparisons do not pick up accumulated rounding.
    pub fn sample_time(&self, i: usize) -> f64 {
        i as f64 * self.dt
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_positive("t_final", self.t_final)?;
        ConfigError::check_positive("dt", self.dt)?;
        self.guidance.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_includes_initial_condition() {
        let config = SimConfig {
            t_final: 220.0,
            dt: 0.05,
            ..Default::default()
        };
        assert_eq!(config.sample_count(), 4401);
    }

    #[test]
    fn sample_count_truncates_uneven_step() {
        let config = SimConfig {
            t_final: 1.0,
            dt: 0.3,
            ..Default::default()
        };
        assert_eq!(config.sample_count(), 4);
        assert!((config.sample_time(3) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn apply_scales_derivative() {
        let s = State::on_pad(100.0);
        let d = Deriv {
            dpos: Vector2::new(1.0, 2.0),
            dvel: Vector2::new(0.5, -9.8),
            dmass: -4.0,
        };
        let n = s.apply(&d, 0.5);
        assert_eq!(n.to_array(), [0.5, 1.0, 0.25, -4.9, 98.0]);
    }

    #[test]
    fn zero_step_rejected() {
        let config = SimConfig {
            dt: 0.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("dt"));
    }
}
