use ascent_sim::io::csv;
use ascent_sim::io::json::{self, FlightSummary};
use ascent_sim::{presets, GuidanceParams, SimConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rocket = presets::demo();
    let config = SimConfig { t_final: 220.0, dt: 0.05, guidance: GuidanceParams::demo() };

    println!("Simulating reference ascent ...");
    let output = ascent_sim::run(&rocket, &config)?;

    let summary = FlightSummary::from_output(&output).ok_or("empty run")?;
    println!("Final altitude: {:.2} km", summary.final_altitude / 1000.0);
    println!("Final speed: {:.1} m/s", summary.final_speed);
    println!("Max-Q: {:.1} kPa", summary.max_q / 1000.0);

    csv::write_trajectory_file("ascent_trajectory.csv", &output)?;
    json::write_summary_file("ascent_summary.json", &rocket, &summary)?;

    println!("Exported: ascent_trajectory.csv, ascent_summary.json");
    Ok(())
}
