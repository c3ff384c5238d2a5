use serde::{Deserialize, Serialize};

use crate::dynamics::state::G0;
use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Stage definition (one stage of the two-stage rocket)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub dry_mass: f64,        // kg
    pub propellant_mass: f64, // kg
    pub thrust: f64,          // N, constant during the burn
    pub isp: f64,             // s
    pub burn_time: f64,       // s
    pub cd: f64,
    pub area: f64, // m^2
}

impl Stage {
    /// Propellant mass flow rate: mdot = F / (Isp * g0)
    pub fn mass_flow(&self) -> f64 {
        self.thrust / (self.isp * G0)
    }

    pub fn total_mass(&self) -> f64 {
        self.dry_mass + self.propellant_mass
    }

    /// Propellant actually consumed over the scheduled burn.
    pub fn propellant_burned(&self) -> f64 {
        self.mass_flow() * self.burn_time
    }

    /// Check physical ranges. `label` prefixes field names in errors,
    /// e.g. "stage1".
    pub fn validate(&self, label: &str) -> Result<(), ConfigError> {
        let field = |name: &str| format!("{label}.{name}");
        ConfigError::check_positive(field("dry_mass"), self.dry_mass)?;
        ConfigError::check_non_negative(field("propellant_mass"), self.propellant_mass)?;
        ConfigError::check_non_negative(field("thrust"), self.thrust)?;
        ConfigError::check_positive(field("isp"), self.isp)?;
        ConfigError::check_positive(field("burn_time"), self.burn_time)?;
        ConfigError::check_non_negative(field("cd"), self.cd)?;
        ConfigError::check_non_negative(field("area"), self.area)
    }
}

// ---------------------------------------------------------------------------
// Stage builder
// ---------------------------------------------------------------------------

pub struct StageBuilder {
    dry_mass: f64,
    propellant_mass: f64,
    thrust: f64,
    isp: f64,
    burn_time: f64,
    cd: f64,
    area: f64,
}

impl StageBuilder {
    pub fn new() -> Self {
        Self {
            dry_mass: 350.0,
            propellant_mass: 1500.0,
            thrust: 45_000.0,
            isp: 310.0,
            burn_time: 90.0,
            cd: 0.25,
            area: 0.5,
        }
    }

    pub fn dry_mass(mut self, v: f64) -> Self { self.dry_mass = v; self }
    pub fn propellant_mass(mut self, v: f64) -> Self { self.propellant_mass = v; self }
    pub fn thrust(mut self, v: f64) -> Self { self.thrust = v; self }
    pub fn isp(mut self, v: f64) -> Self { self.isp = v; self }
    pub fn burn_time(mut self, v: f64) -> Self { self.burn_time = v; self }
    pub fn cd(mut self, v: f64) -> Self { self.cd = v; self }
    pub fn area(mut self, v: f64) -> Self { self.area = v; self }

    pub fn build(self) -> Stage {
        Stage {
            dry_mass: self.dry_mass,
            propellant_mass: self.propellant_mass,
            thrust: self.thrust,
            isp: self.isp,
            burn_time: self.burn_time,
            cd: self.cd,
            area: self.area,
        }
    }
}

impl Default for StageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mass_flow_from_thrust_and_isp() {
        let s = StageBuilder::new().thrust(140_000.0).isp(260.0).build();
        assert_relative_eq!(s.mass_flow(), 140_000.0 / (260.0 * 9.80665), max_relative = 1e-12);
        assert_relative_eq!(s.mass_flow(), 54.907, epsilon = 1e-3);
    }

    #[test]
    fn zero_thrust_means_no_flow() {
        let s = StageBuilder::new().thrust(0.0).build();
        assert_eq!(s.mass_flow(), 0.0);
        assert_eq!(s.propellant_burned(), 0.0);
    }

    #[test]
    fn validate_names_stage_and_field() {
        let s = StageBuilder::new().isp(0.0).build();
        let err = s.validate("stage2").unwrap_err();
        assert_eq!(err.to_string(), "stage2.isp must be > 0 (got 0)");
    }

    #[test]
    fn default_builder_is_valid() {
        assert!(StageBuilder::default().build().validate("stage").is_ok());
    }
}
