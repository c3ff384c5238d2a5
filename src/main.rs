use std::path::PathBuf;

use clap::Parser;

use ascent_sim::io::{csv, json, FlightSummary};
use ascent_sim::{GuidanceParams, Rocket, SimConfig, StageBuilder};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Planar two-stage rocket ascent with a pitch-program gravity turn."
)]
struct Cli {
    // --- Stage 1 ---
    #[arg(long, default_value_t = 140_000.0, help = "Stage 1 thrust [N]")]
    s1_thrust: f64,
    #[arg(long, default_value_t = 260.0, help = "Stage 1 Isp [s]")]
    s1_isp: f64,
    #[arg(long, default_value_t = 75.0, help = "Stage 1 burn time [s]")]
    s1_burn: f64,
    #[arg(long, default_value_t = 1200.0, help = "Stage 1 dry mass [kg]")]
    s1_dry: f64,
    #[arg(long, default_value_t = 4500.0, help = "Stage 1 propellant mass [kg]")]
    s1_prop: f64,
    #[arg(long, default_value_t = 0.35, help = "Stage 1 drag coefficient")]
    s1_cd: f64,
    #[arg(long, default_value_t = 0.9, help = "Stage 1 reference area [m^2]")]
    s1_area: f64,

    // --- Stage 2 ---
    #[arg(long, default_value_t = 45_000.0, help = "Stage 2 thrust [N]")]
    s2_thrust: f64,
    #[arg(long, default_value_t = 310.0, help = "Stage 2 Isp [s]")]
    s2_isp: f64,
    #[arg(long, default_value_t = 90.0, help = "Stage 2 burn time [s]")]
    s2_burn: f64,
    #[arg(long, default_value_t = 350.0, help = "Stage 2 dry mass [kg]")]
    s2_dry: f64,
    #[arg(long, default_value_t = 1500.0, help = "Stage 2 propellant mass [kg]")]
    s2_prop: f64,
    #[arg(long, default_value_t = 0.25, help = "Stage 2 drag coefficient")]
    s2_cd: f64,
    #[arg(long, default_value_t = 0.5, help = "Stage 2 reference area [m^2]")]
    s2_area: f64,

    #[arg(long, default_value_t = 150.0, help = "Payload mass [kg]")]
    payload: f64,

    // --- Guidance ---
    #[arg(long, default_value_t = 6.0, help = "Hold vertical [s]")]
    hold_time: f64,
    #[arg(long, default_value_t = 1200.0, help = "Turn start altitude [m]")]
    turn_start_h: f64,
    #[arg(long, default_value_t = 0.9, help = "Turn rate [deg/s]")]
    turn_rate: f64,
    #[arg(long, default_value_t = 5.0, help = "Minimum pitch [deg]")]
    min_pitch: f64,

    // --- Simulation ---
    #[arg(long, default_value_t = 220.0, help = "Simulated duration [s]")]
    t_final: f64,
    #[arg(long, default_value_t = 0.05, help = "Integration step [s]")]
    dt: f64,

    /// Write the full trajectory to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the flight summary to this JSON file.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Rows in the printed trajectory table.
    #[arg(long, default_value_t = 30)]
    rows: usize,
}

impl Cli {
    fn rocket(&self) -> Rocket {
        let stage1 = StageBuilder::new()
            .thrust(self.s1_thrust)
            .isp(self.s1_isp)
            .burn_time(self.s1_burn)
            .dry_mass(self.s1_dry)
            .propellant_mass(self.s1_prop)
            .cd(self.s1_cd)
            .area(self.s1_area)
            .build();
        let stage2 = StageBuilder::new()
            .thrust(self.s2_thrust)
            .isp(self.s2_isp)
            .burn_time(self.s2_burn)
            .dry_mass(self.s2_dry)
            .propellant_mass(self.s2_prop)
            .cd(self.s2_cd)
            .area(self.s2_area)
            .build();
        Rocket::new(stage1, stage2, self.payload)
    }

    fn config(&self) -> SimConfig {
        SimConfig {
            t_final: self.t_final,
            dt: self.dt,
            guidance: GuidanceParams {
                hold_time: self.hold_time,
                turn_start_h: self.turn_start_h,
                turn_rate_deg_s: self.turn_rate,
                min_pitch_deg: self.min_pitch,
            },
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let rocket = cli.rocket();
    let config = cli.config();

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let output = ascent_sim::run(&rocket, &config)?;
    let summary = FlightSummary::from_output(&output).ok_or("simulation produced no samples")?;

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    let (s1, s2) = (&rocket.stage1, &rocket.stage2);
    println!();
    println!("====================================================================");
    println!("  TWO-STAGE ASCENT SIMULATION (2D)");
    println!("====================================================================");
    println!();
    println!("  Vehicle Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:<10} {:>10} {:>10} {:>10} {:>7} {:>7} {:>6} {:>6}",
        "", "thrust N", "dry kg", "prop kg", "Isp s", "burn s", "Cd", "A m^2"
    );
    for (name, s) in [("Stage 1", s1), ("Stage 2", s2)] {
        println!(
            "  {:<10} {:>10.0} {:>10.1} {:>10.1} {:>7.0} {:>7.1} {:>6.2} {:>6.2}",
            name, s.thrust, s.dry_mass, s.propellant_mass, s.isp, s.burn_time, s.cd, s.area
        );
    }
    println!(
        "  Payload:       {:>8.1} kg    Lift-off mass: {:>8.1} kg",
        rocket.payload_mass,
        rocket.initial_mass()
    );
    println!(
        "  Lift-off TWR:  {:>8.2}       Ideal delta-v: {:>8.0} m/s",
        rocket.liftoff_twr(),
        rocket.ideal_delta_v()
    );
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for e in &summary.events {
        println!(
            "  {:<12} t={:>6.1}s   alt={:>9.0}m   vel={:>7.1}m/s   mass={:>7.1}kg",
            e.kind.to_string(),
            e.time,
            e.state.pos.y,
            e.state.speed(),
            e.state.mass
        );
    }
    println!();

    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Final altitude: {:>9.0} m   ({:.2} km)",
        summary.final_altitude,
        summary.final_altitude / 1000.0
    );
    println!("  Final speed:    {:>9.1} m/s", summary.final_speed);
    println!(
        "  Downrange:      {:>9.0} m   ({:.2} km)",
        summary.final_downrange,
        summary.final_downrange / 1000.0
    );
    println!(
        "  Max-Q:          {:>9.0} Pa  ({:.1} kPa at t={:.1}s)",
        summary.max_q,
        summary.max_q / 1000.0,
        summary.max_q_time
    );
    println!("  Apogee:         {:>9.0} m   (t={:.1}s)", summary.apogee_m, summary.apogee_time);
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>9}  {:>9}  {:>8}  {:>8}  {:>6}  {:>8}  {:>5}",
        "t (s)", "x (m)", "alt (m)", "v (m/s)", "mass(kg)", "pitch", "q (kPa)", "stage"
    );
    println!("  {}", "─".repeat(76));

    let tel = &output.telemetry;
    let sample_interval = (output.len() / cli.rows.max(1)).max(1);
    for (i, (t, s)) in output.time.iter().zip(&output.states).enumerate() {
        if i % sample_interval != 0 && i != output.len() - 1 {
            continue;
        }
        println!(
            "  {:>7.2}  {:>9.0}  {:>9.0}  {:>8.1}  {:>8.1}  {:>6.1}  {:>8.2}  {:>5}",
            t,
            s.downrange(),
            s.pos.y,
            s.speed(),
            s.mass,
            tel.pitch_deg[i],
            tel.q_dyn[i] / 1000.0,
            tel.stage[i]
        );
    }

    println!();
    println!("  Simulation: {} samples, dt={} s", output.len(), config.dt);

    if let Some(path) = &cli.csv {
        csv::write_trajectory_file(path, &output)?;
        println!("  Exported trajectory: {}", path.display());
    }
    if let Some(path) = &cli.json {
        json::write_summary_file(path, &rocket, &summary)?;
        println!("  Exported summary:    {}", path.display());
    }
    println!("====================================================================");
    println!();

    Ok(())
}
