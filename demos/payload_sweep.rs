use ascent_sim::io::FlightSummary;
use ascent_sim::{presets, sim, GuidanceParams, SimConfig};

/// Sweep payload mass and compare ascent performance. Each case is an
/// independent run, so the sweep fans out across threads.
fn main() {
    let config = SimConfig { t_final: 220.0, dt: 0.05, guidance: GuidanceParams::demo() };
    let payloads = [0.0, 100.0, 150.0, 250.0, 400.0, 600.0, 800.0];

    let cases: Vec<_> = payloads
        .iter()
        .map(|&payload| {
            let mut rocket = presets::demo();
            rocket.payload_mass = payload;
            (rocket, config.clone())
        })
        .collect();

    println!("Sweeping {} payload cases ...", cases.len());
    let outputs = sim::sweep(&cases);

    println!(
        "{:>10}  {:>12}  {:>12}  {:>12}  {:>10}",
        "payload", "apogee (km)", "final v (m/s)", "downrange(km)", "max-Q kPa"
    );
    for ((rocket, _), out) in cases.iter().zip(&outputs) {
        let Some(s) = FlightSummary::from_output(out) else {
            continue;
        };
        println!(
            "{:>10.0}  {:>12.2}  {:>12.1}  {:>12.1}  {:>10.1}",
            rocket.payload_mass,
            s.apogee_m / 1000.0,
            s.final_speed,
            s.final_downrange / 1000.0,
            s.max_q / 1000.0
        );
    }
}
