pub mod event;
pub mod integrator;
pub mod runner;
pub mod telemetry;

pub use event::{EventKind, SimEvent};
pub use integrator::rk4_step;
pub use runner::{simulate, SimOutput};
pub use telemetry::Telemetry;

use rayon::prelude::*;

use crate::dynamics::state::SimConfig;
use crate::vehicle::Rocket;

/// Run independent cases in parallel on the rayon pool. Results keep the
/// input order.
pub fn sweep(cases: &[(Rocket, SimConfig)]) -> Vec<SimOutput> {
    cases
        .par_iter()
        .map(|(rocket, config)| simulate(rocket, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gnc::GuidanceParams;
    use crate::vehicle::presets;

    #[test]
    fn sweep_matches_sequential_runs() {
        let config = SimConfig { t_final: 60.0, dt: 0.1, guidance: GuidanceParams::demo() };
        let cases: Vec<_> = [0.0, 150.0, 300.0, 450.0, 600.0]
            .iter()
            .map(|&payload| {
                let mut r = presets::demo();
                r.payload_mass = payload;
                (r, config.clone())
            })
            .collect();

        let parallel = sweep(&cases);
        assert_eq!(parallel.len(), cases.len());
        for ((rocket, config), out) in cases.iter().zip(&parallel) {
            assert_eq!(out, &simulate(rocket, config));
        }

        // Heavier payload, lower altitude at the same time.
        let alts: Vec<f64> = parallel.iter().map(|o| o.final_state().unwrap().pos.y).collect();
        assert!(alts.windows(2).all(|w| w[0] > w[1]), "{alts:?}");
    }

    #[test]
    fn empty_sweep() {
        assert!(sweep(&[]).is_empty());
    }
}
