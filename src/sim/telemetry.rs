use crate::dynamics::{self, state::State};
use crate::gnc::{pitch_program, GuidanceParams};
use crate::physics::{aerodynamics, atmosphere};
use crate::vehicle::Rocket;

/// Per-sample auxiliary channels, index-aligned with the state series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Telemetry {
    pub pitch_deg: Vec<f64>, // commanded pitch, deg from horizontal
    pub thrust: Vec<f64>,    // N
    pub q_dyn: Vec<f64>,     // dynamic pressure, Pa
    pub stage: Vec<u8>,      // 0 = coast, 1 = stage 1, 2 = stage 2
}

impl Telemetry {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            pitch_deg: Vec::with_capacity(n),
            thrust: Vec::with_capacity(n),
            q_dyn: Vec::with_capacity(n),
            stage: Vec::with_capacity(n),
        }
    }

    /// Evaluate and append the channels for `state` at time `t`.
    pub fn record(&mut self, t: f64, state: &State, rocket: &Rocket, guidance: &GuidanceParams) {
        let alt = state.altitude();
        let prop = dynamics::propulsion_and_aero(t, rocket);
        let rho = atmosphere::density(alt);

        self.pitch_deg.push(pitch_program(t, alt, guidance));
        self.thrust.push(prop.thrust);
        self.q_dyn.push(aerodynamics::dynamic_pressure(rho, state.speed()));
        self.stage.push(dynamics::active_stage(t, rocket).indicator());
    }

    pub fn len(&self) -> usize {
        self.pitch_deg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitch_deg.is_empty()
    }

    /// Index and value of the peak dynamic pressure (max-Q). Non-finite
    /// samples are skipped.
    pub fn max_q(&self) -> Option<(usize, f64)> {
        self.q_dyn
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, q)| q.is_finite())
            .fold(None, |best, (i, q)| match best {
                Some((_, b)) if b >= q => best,
                _ => Some((i, q)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::presets;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    #[test]
    fn record_on_pad() {
        let r = presets::demo();
        let mut tel = Telemetry::with_capacity(1);
        tel.record(0.0, &State::on_pad(r.initial_mass()), &r, &GuidanceParams::demo());
        assert_eq!(tel.len(), 1);
        assert_eq!(tel.pitch_deg[0], 90.0);
        assert_eq!(tel.thrust[0], 140_000.0);
        assert_eq!(tel.q_dyn[0], 0.0);
        assert_eq!(tel.stage[0], 1);
    }

    #[test]
    fn q_uses_local_density() {
        let r = presets::demo();
        let s = State {
            pos: Vector2::new(0.0, 8_500.0),
            vel: Vector2::new(300.0, 400.0),
            mass: 4_000.0,
        };
        let mut tel = Telemetry::default();
        tel.record(100.0, &s, &r, &GuidanceParams::demo());
        let expected = 0.5 * 1.225 / std::f64::consts::E * 500.0 * 500.0;
        assert_relative_eq!(tel.q_dyn[0], expected, max_relative = 1e-9);
        assert_eq!(tel.stage[0], 2);
    }

    #[test]
    fn max_q_picks_first_peak() {
        let tel = Telemetry {
            q_dyn: vec![0.0, 3.0, 7.0, 7.0, 2.0],
            ..Default::default()
        };
        assert_eq!(tel.max_q(), Some((2, 7.0)));
        assert_eq!(Telemetry::default().max_q(), None);
    }

    #[test]
    fn max_q_skips_non_finite_samples() {
        let tel = Telemetry {
            q_dyn: vec![0.0, 9.0, f64::NAN, 4.0, f64::INFINITY],
            ..Default::default()
        };
        assert_eq!(tel.max_q(), Some((1, 9.0)));

        let all_nan = Telemetry { q_dyn: vec![f64::NAN], ..Default::default() };
        assert_eq!(all_nan.max_q(), None);
    }
}
