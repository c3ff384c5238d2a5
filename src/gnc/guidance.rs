use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Guidance: commanded pitch angle as a function of time and altitude
// ---------------------------------------------------------------------------

/// Pitch program parameters. Missing fields take the documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidanceParams {
    /// Time to hold vertical before any pitch-over, s (default 5.0).
    pub hold_time: f64,
    /// Minimum altitude before pitch-over, m (default 500.0).
    pub turn_start_h: f64,
    /// Pitch decrease rate once turning, deg/s (default 0.7).
    pub turn_rate_deg_s: f64,
    /// Pitch floor, deg (default 5.0).
    pub min_pitch_deg: f64,
}

impl Default for GuidanceParams {
    fn default() -> Self {
        Self {
            hold_time: 5.0,
            turn_start_h: 500.0,
            turn_rate_deg_s: 0.7,
            min_pitch_deg: 5.0,
        }
    }
}

impl GuidanceParams {
    /// Schedule used by the reference ascent.
    pub fn demo() -> Self {
        Self {
            hold_time: 6.0,
            turn_start_h: 1200.0,
            turn_rate_deg_s: 0.9,
            min_pitch_deg: 5.0,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_finite("guidance.hold_time", self.hold_time)?;
        ConfigError::check_finite("guidance.turn_start_h", self.turn_start_h)?;
        ConfigError::check_finite("guidance.turn_rate_deg_s", self.turn_rate_deg_s)?;
        ConfigError::check_finite("guidance.min_pitch_deg", self.min_pitch_deg)
    }
}

/// Pitch program: commanded pitch in degrees from horizontal (90 = vertical).
///
/// - Held vertical while `t < hold_time` or `altitude < turn_start_h`.
/// - Otherwise 90 - turn_rate * (t - hold_time), floored at `min_pitch_deg`.
///
/// No memory between calls: an altitude dip below `turn_start_h` after the
/// turn has begun re-holds vertical for that call only.
pub fn pitch_program(t: f64, altitude: f64, params: &GuidanceParams) -> f64 {
    if t < params.hold_time || altitude < params.turn_start_h {
        return 90.0;
    }

    let pitch = 90.0 - params.turn_rate_deg_s * (t - params.hold_time);
    pitch.max(params.min_pitch_deg)
}
