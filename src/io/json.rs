use std::io::{self, Write};
use std::path::Path;

use crate::sim::{SimEvent, SimOutput};
use crate::vehicle::Rocket;

/// Summary statistics computed from one ascent.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSummary {
    pub final_time: f64,
    pub final_altitude: f64,
    pub final_speed: f64,
    pub final_downrange: f64,
    pub final_mass: f64,
    pub max_q: f64,
    pub max_q_time: f64,
    pub apogee_m: f64,
    pub apogee_time: f64,
    pub events: Vec<SimEvent>,
}

impl FlightSummary {
    /// Compute summary from simulation output. `None` for an empty run.
    pub fn from_output(output: &SimOutput) -> Option<Self> {
        let last = output.final_state()?;
        let (iq, max_q) = output.telemetry.max_q()?;

        let (i_apogee, apogee) = output
            .states
            .iter()
            .map(|s| s.pos.y)
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (i, y)| {
                if y > best.1 {
                    (i, y)
                } else {
                    best
                }
            });

        Some(FlightSummary {
            final_time: *output.time.last()?,
            final_altitude: last.pos.y,
            final_speed: last.speed(),
            final_downrange: last.downrange(),
            final_mass: last.mass,
            max_q,
            max_q_time: output.time[iq],
            apogee_m: apogee,
            apogee_time: output.time[i_apogee],
            events: output.events.clone(),
        })
    }
}

/// JSON number with two decimals, or `null` when not finite.
fn num(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.2}")
    } else {
        "null".to_string()
    }
}

/// Write flight summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    rocket: &Rocket,
    summary: &FlightSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"vehicle\": {{")?;
    writeln!(writer, "    \"initial_mass_kg\": {},", num(rocket.initial_mass()))?;
    writeln!(writer, "    \"payload_kg\": {},", num(rocket.payload_mass))?;
    writeln!(writer, "    \"ideal_delta_v_ms\": {}", num(rocket.ideal_delta_v()))?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"performance\": {{")?;
    writeln!(writer, "    \"final_time_s\": {},", num(summary.final_time))?;
    writeln!(writer, "    \"final_altitude_m\": {},", num(summary.final_altitude))?;
    writeln!(writer, "    \"final_speed_ms\": {},", num(summary.final_speed))?;
    writeln!(writer, "    \"final_downrange_m\": {},", num(summary.final_downrange))?;
    writeln!(writer, "    \"final_mass_kg\": {},", num(summary.final_mass))?;
    writeln!(writer, "    \"max_q_pa\": {},", num(summary.max_q))?;
    writeln!(writer, "    \"max_q_time_s\": {},", num(summary.max_q_time))?;
    writeln!(writer, "    \"apogee_m\": {},", num(summary.apogee_m))?;
    writeln!(writer, "    \"apogee_time_s\": {}", num(summary.apogee_time))?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"events\": [")?;
    for (i, e) in summary.events.iter().enumerate() {
        let sep = if i + 1 < summary.events.len() { "," } else { "" };
        writeln!(
            writer,
            "    {{ \"event\": \"{}\", \"time_s\": {}, \"altitude_m\": {} }}{}",
            e.kind,
            num(e.time),
            num(e.state.altitude()),
            sep
        )?;
    }
    writeln!(writer, "  ]")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write flight summary JSON to a file.
pub fn write_summary_file(
    path: impl AsRef<Path>,
    rocket: &Rocket,
    summary: &FlightSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, rocket, summary)
}
