pub mod state;

use nalgebra::Vector2;

use crate::gnc::{pitch_program, GuidanceParams};
use crate::physics::{aerodynamics, atmosphere, gravity};
use crate::vehicle::Rocket;
use state::{Deriv, State};

// ---------------------------------------------------------------------------
// Stage sequencing
// ---------------------------------------------------------------------------

/// Which part of the flight the vehicle is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ActiveStage {
    /// Both stages burnt out.
    Coast = 0,
    /// Stage 1 burning (separation instant included).
    First = 1,
    /// Stage 2 burning.
    Second = 2,
}

impl ActiveStage {
    /// Telemetry indicator: 0 = coast, 1 = stage 1, 2 = stage 2.
    pub fn indicator(self) -> u8 {
        self as u8
    }
}

/// Active stage at time `t`.
///
/// `t == stage1.burn_time` still belongs to stage 1: separation happens
/// exactly at the boundary and stage 2 takes over for `t > burn_time`.
pub fn active_stage(t: f64, rocket: &Rocket) -> ActiveStage {
    if t <= rocket.stage1.burn_time {
        ActiveStage::First
    } else if t <= rocket.final_burnout_time() {
        ActiveStage::Second
    } else {
        ActiveStage::Coast
    }
}

/// Thrust, mass flow and aerodynamic coefficients at a given time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Propulsion {
    pub thrust: f64,    // N
    pub mass_flow: f64, // kg/s
    pub cd: f64,
    pub area: f64, // m^2
}

/// Propulsion and aero data for the stage active at `t`. After final burnout
/// the coasting body keeps stage 2's aerodynamic shape.
pub fn propulsion_and_aero(t: f64, rocket: &Rocket) -> Propulsion {
    let (s1, s2) = (&rocket.stage1, &rocket.stage2);
    match active_stage(t, rocket) {
        ActiveStage::First => Propulsion {
            thrust: s1.thrust,
            mass_flow: s1.mass_flow(),
            cd: s1.cd,
            area: s1.area,
        },
        ActiveStage::Second => Propulsion {
            thrust: s2.thrust,
            mass_flow: s2.mass_flow(),
            cd: s2.cd,
            area: s2.area,
        },
        ActiveStage::Coast => Propulsion {
            thrust: 0.0,
            mass_flow: 0.0,
            cd: s2.cd,
            area: s2.area,
        },
    }
}

// ---------------------------------------------------------------------------
// Equations of motion (planar point mass)
// ---------------------------------------------------------------------------

/// Compute state derivatives at time `t`.
///
/// Forces modeled:
///   1. Thrust: constant magnitude while a stage burns, along the pitch program
///   2. Drag: quadratic, opposing velocity
///   3. Gravity: constant, down
///
/// Altitude is clamped to >= 0 for evaluation only; the state is untouched.
pub fn derivatives(t: f64, state: &State, rocket: &Rocket, guidance: &GuidanceParams) -> Deriv {
    let alt = state.pos.y.max(0.0);
    let m = state.mass;

    let prop = propulsion_and_aero(t, rocket);
    let pitch = pitch_program(t, alt, guidance).to_radians();

    // --- Aerodynamic drag (acceleration) ---
    let speed = state.speed();
    let rho = atmosphere::density(alt);
    let drag = aerodynamics::drag_force(rho, speed, prop.cd, prop.area);
    let a_drag = aerodynamics::drag_accel(&state.vel, drag, m);

    // --- Thrust (acceleration) ---
    let a_thrust = Vector2::new(pitch.cos(), pitch.sin()) * (prop.thrust / m);

    // --- Gravity (acceleration) ---
    let a_gravity = Vector2::new(0.0, -gravity::gravity_accel(alt));

    // --- Mass flow ---
    let dmass = if prop.thrust > 0.0 { -prop.mass_flow } else { 0.0 };

    Deriv {
        dpos: state.vel,
        dvel: a_thrust + a_drag + a_gravity,
        dmass,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::presets;
    use approx::assert_relative_eq;

    #[test]
    fn stage_boundaries_belong_to_ending_stage() {
        let r = presets::demo();
        assert_eq!(active_stage(0.0, &r), ActiveStage::First);
        assert_eq!(active_stage(75.0, &r), ActiveStage::First);
        assert_eq!(active_stage(75.0 + 1e-9, &r), ActiveStage::Second);
        assert_eq!(active_stage(165.0, &r), ActiveStage::Second);
        assert_eq!(active_stage(165.0 + 1e-9, &r), ActiveStage::Coast);
    }

    #[test]
    fn indicators() {
        assert_eq!(ActiveStage::Coast.indicator(), 0);
        assert_eq!(ActiveStage::First.indicator(), 1);
        assert_eq!(ActiveStage::Second.indicator(), 2);
    }

    #[test]
    fn coast_keeps_stage2_aero() {
        let r = presets::demo();
        let p = propulsion_and_aero(200.0, &r);
        assert_eq!(p.thrust, 0.0);
        assert_eq!(p.mass_flow, 0.0);
        assert_eq!(p.cd, r.stage2.cd);
        assert_eq!(p.area, r.stage2.area);
    }

    #[test]
    fn second_stage_values() {
        let r = presets::demo();
        let p = propulsion_and_aero(100.0, &r);
        assert_eq!(p.thrust, 45_000.0);
        assert_relative_eq!(p.mass_flow, r.stage2.mass_flow());
    }

    #[test]
    fn net_upward_accel_on_pad() {
        let r = presets::demo();
        let state = State::on_pad(r.initial_mass());
        let d = derivatives(0.0, &state, &r, &GuidanceParams::demo());
        assert!(d.dvel.x.abs() < 1e-12, "vertical thrust only, got {}", d.dvel.x);
        assert_relative_eq!(d.dvel.y, 140_000.0 / 7700.0 - 9.80665, max_relative = 1e-12);
        assert_relative_eq!(d.dmass, -r.stage1.mass_flow());
    }

    #[test]
    fn pitched_thrust_has_downrange_component() {
        let r = presets::demo();
        let state = State {
            pos: Vector2::new(0.0, 5_000.0),
            vel: Vector2::new(50.0, 300.0),
            mass: 5_000.0,
        };
        let d = derivatives(40.0, &state, &r, &GuidanceParams::demo());
        // pitch = 90 - 0.9 * 34 = 59.4 deg
        let pitch = 59.4_f64.to_radians();
        let rho = atmosphere::density(5_000.0);
        let drag = aerodynamics::drag_force(rho, state.speed(), 0.35, 0.9);
        let expected_ax = 140_000.0 * pitch.cos() / 5_000.0 - drag * 50.0 / state.speed() / 5_000.0;
        assert_relative_eq!(d.dvel.x, expected_ax, max_relative = 1e-9);
        assert_eq!(d.dpos, state.vel);
    }

    #[test]
    fn no_thrust_and_no_flow_after_burnout() {
        let r = presets::demo();
        let state = State {
            pos: Vector2::new(80_000.0, 90_000.0),
            vel: Vector2::new(1_500.0, 200.0),
            mass: 500.0,
        };
        let d = derivatives(180.0, &state, &r, &GuidanceParams::demo());
        assert_eq!(d.dmass, 0.0);
        assert!(d.dvel.y < -9.8);
        assert!(d.dvel.x < 0.0, "only drag acts downrange");
    }

    #[test]
    fn negative_altitude_evaluated_as_ground() {
        let r = presets::demo();
        let below = State {
            pos: Vector2::new(0.0, -3.0),
            vel: Vector2::new(0.0, -1.0),
            mass: 7_000.0,
        };
        let at_ground = State {
            pos: Vector2::new(0.0, 0.0),
            ..below
        };
        let g = GuidanceParams::demo();
        assert_eq!(
            derivatives(1.0, &below, &r, &g).dvel,
            derivatives(1.0, &at_ground, &r, &g).dvel
        );
    }
}
