use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Error;
use crate::sim::SimOutput;

/// One CSV row: a state sample with its telemetry.
#[derive(Debug, Serialize)]
struct Row {
    time: f64,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    mass: f64,
    pitch_deg: f64,
    thrust: f64,
    q_dyn: f64,
    stage: u8,
}

/// Write trajectory data to CSV format.
///
/// Columns: time, x, y, vx, vy, mass, pitch_deg, thrust, q_dyn, stage
pub fn write_trajectory<W: Write>(writer: W, output: &SimOutput) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    let tel = &output.telemetry;

    for (i, (t, s)) in output.time.iter().zip(&output.states).enumerate() {
        let [x, y, vx, vy, mass] = s.to_array();
        wtr.serialize(Row {
            time: *t,
            x,
            y,
            vx,
            vy,
            mass,
            pitch_deg: tel.pitch_deg[i],
            thrust: tel.thrust[i],
            q_dyn: tel.q_dyn[i],
            stage: tel.stage[i],
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: impl AsRef<Path>, output: &SimOutput) -> Result<(), Error> {
    let file = std::fs::File::create(path)?;
    write_trajectory(file, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::SimConfig;
    use crate::sim::simulate;
    use crate::vehicle::presets;

    #[test]
    fn csv_output_has_header_and_rows() {
        let config = SimConfig { t_final: 1.0, dt: 0.5, ..Default::default() };
        let out = simulate(&presets::demo(), &config);

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &out).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "time,x,y,vx,vy,mass,pitch_deg,thrust,q_dyn,stage");
        assert_eq!(lines.len(), 4); // header + 3 data rows
        assert_eq!(lines[1], "0.0,0.0,0.0,0.0,0.0,7700.0,90.0,140000.0,0.0,1");
        assert!(lines[3].starts_with("1.0,"));
    }
}
