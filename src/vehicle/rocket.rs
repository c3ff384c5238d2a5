use serde::{Deserialize, Serialize};

use super::stage::Stage;
use crate::dynamics::state::G0;
use crate::error::ConfigError;
use crate::physics::gravity;

// ---------------------------------------------------------------------------
// Rocket: two stages in series plus payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    pub stage1: Stage,
    pub stage2: Stage,
    pub payload_mass: f64, // kg
}

impl Rocket {
    pub fn new(stage1: Stage, stage2: Stage, payload_mass: f64) -> Self {
        Self { stage1, stage2, payload_mass }
    }

    /// Lift-off mass: payload plus dry and propellant mass of both stages.
    pub fn initial_mass(&self) -> f64 {
        self.payload_mass + self.stage1.total_mass() + self.stage2.total_mass()
    }

    /// Time at which the second stage stops burning.
    pub fn final_burnout_time(&self) -> f64 {
        self.stage1.burn_time + self.stage2.burn_time
    }

    /// Thrust-to-weight ratio on the pad.
    pub fn liftoff_twr(&self) -> f64 {
        self.stage1.thrust / gravity::weight(0.0, self.initial_mass())
    }

    /// Ideal delta-v (Tsiolkovsky), each stage burning its scheduled
    /// propellant with everything above it as payload.
    pub fn ideal_delta_v(&self) -> f64 {
        let m0 = self.initial_mass();
        let m1 = m0 - self.stage1.propellant_burned();
        let m2 = m1 - self.stage1.dry_mass;
        let m3 = m2 - self.stage2.propellant_burned();
        self.stage1.isp * G0 * (m0 / m1).ln() + self.stage2.isp * G0 * (m2 / m3).ln()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.stage1.validate("stage1")?;
        self.stage2.validate("stage2")?;
        ConfigError::check_non_negative("payload_mass", self.payload_mass)
    }
}

// ---------------------------------------------------------------------------
// Preset vehicles
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;
    use crate::vehicle::StageBuilder;

    /// Reference two-stage vehicle (illustrative, not a real design).
    pub fn demo() -> Rocket {
        Rocket {
            stage1: StageBuilder::new()
                .dry_mass(1200.0)
                .propellant_mass(4500.0)
                .thrust(140_000.0)
                .isp(260.0)
                .burn_time(75.0)
                .cd(0.35)
                .area(0.9)
                .build(),
            stage2: StageBuilder::new()
                .dry_mass(350.0)
                .propellant_mass(1500.0)
                .thrust(45_000.0)
                .isp(310.0)
                .burn_time(90.0)
                .cd(0.25)
                .area(0.5)
                .build(),
            payload_mass: 150.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_mass_sums_five_components() {
        let r = presets::demo();
        assert_eq!(r.initial_mass(), 150.0 + 1200.0 + 4500.0 + 350.0 + 1500.0);
    }

    #[test]
    fn demo_vehicle_lifts_off() {
        let r = presets::demo();
        assert!(r.liftoff_twr() > 1.0, "TWR {}", r.liftoff_twr());
        assert_eq!(r.final_burnout_time(), 165.0);
    }

    #[test]
    fn delta_v_is_positive() {
        let dv = presets::demo().ideal_delta_v();
        assert!(dv > 2_000.0 && dv < 8_000.0, "delta-v {dv}");
    }

    #[test]
    fn negative_payload_rejected() {
        let mut r = presets::demo();
        r.payload_mass = -1.0;
        assert!(r.validate().unwrap_err().to_string().starts_with("payload_mass"));
    }

    #[test]
    fn stage_errors_carry_stage_label() {
        let mut r = presets::demo();
        r.stage1.burn_time = 0.0;
        assert!(r.validate().unwrap_err().to_string().starts_with("stage1.burn_time"));
    }
}
