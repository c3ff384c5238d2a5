use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use ascent_sim::io::FlightSummary;
use ascent_sim::{presets, GuidanceParams, Rocket, SimConfig, SimOutput, Stage};

fn main() -> eframe::Result {
    let mut app = SimViz {
        rocket: presets::demo(),
        config: SimConfig { t_final: 220.0, dt: 0.05, guidance: GuidanceParams::demo() },
        output: None,
        error: None,
    };
    app.run();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1400.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native("Two-Stage Ascent Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct SimViz {
    rocket: Rocket,
    config: SimConfig,
    output: Option<(SimOutput, FlightSummary)>,
    error: Option<String>,
}

impl SimViz {
    fn run(&mut self) {
        match ascent_sim::run(&self.rocket, &self.config) {
            Ok(out) => {
                self.error = None;
                self.output = FlightSummary::from_output(&out).map(|s| (out, s));
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.output = None;
            }
        }
    }
}

/// One labelled numeric input row inside a two-column grid.
fn param(ui: &mut egui::Ui, label: &str, value: &mut f64, speed: f64) {
    ui.label(label);
    ui.add(egui::DragValue::new(value).speed(speed));
    ui.end_row();
}

fn stage_params(ui: &mut egui::Ui, id: &str, stage: &mut Stage) {
    egui::Grid::new(id).num_columns(2).show(ui, |ui| {
        param(ui, "Thrust [N]", &mut stage.thrust, 500.0);
        param(ui, "Isp [s]", &mut stage.isp, 1.0);
        param(ui, "Burn time [s]", &mut stage.burn_time, 0.5);
        param(ui, "Dry mass [kg]", &mut stage.dry_mass, 10.0);
        param(ui, "Prop mass [kg]", &mut stage.propellant_mass, 10.0);
        param(ui, "Cd", &mut stage.cd, 0.01);
        param(ui, "Area [m^2]", &mut stage.area, 0.01);
    });
}

fn series_plot(
    ui: &mut egui::Ui,
    id: &str,
    name: &str,
    x_label: &str,
    points: PlotPoints,
    w: f32,
    h: f32,
) {
    Plot::new(id)
        .width(w)
        .height(h)
        .x_axis_label(x_label)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(name, points));
        });
}

impl eframe::App for SimViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("params").show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Stage 1");
                stage_params(ui, "stage1", &mut self.rocket.stage1);
                ui.heading("Stage 2");
                stage_params(ui, "stage2", &mut self.rocket.stage2);
                egui::Grid::new("payload").num_columns(2).show(ui, |ui| {
                    param(ui, "Payload [kg]", &mut self.rocket.payload_mass, 5.0);
                });

                ui.heading("Guidance");
                let g = &mut self.config.guidance;
                egui::Grid::new("guidance").num_columns(2).show(ui, |ui| {
                    param(ui, "Hold vertical [s]", &mut g.hold_time, 0.1);
                    param(ui, "Turn start alt [m]", &mut g.turn_start_h, 10.0);
                    param(ui, "Turn rate [deg/s]", &mut g.turn_rate_deg_s, 0.01);
                    param(ui, "Min pitch [deg]", &mut g.min_pitch_deg, 0.5);
                });

                ui.heading("Sim");
                egui::Grid::new("sim").num_columns(2).show(ui, |ui| {
                    param(ui, "t_final [s]", &mut self.config.t_final, 1.0);
                    param(ui, "dt [s]", &mut self.config.dt, 0.001);
                });

                ui.separator();
                if ui.button("Run Simulation").clicked() {
                    self.run();
                }
                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::RED, err);
                }
            });
        });

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("2-Stage Rocket Trajectory Simulator");
            if let Some((out, summary)) = &self.output {
                ui.label(format!(
                    "Final altitude: {:.2} km  |  Final speed: {:.1} m/s  |  Max-Q: {:.1} kPa  |  Samples: {}",
                    summary.final_altitude / 1000.0,
                    summary.final_speed,
                    summary.max_q / 1000.0,
                    out.len(),
                ));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some((out, _)) = &self.output else {
                ui.label("No results: fix the configuration and run again.");
                return;
            };

            let step = (out.len() / 2000).max(1);
            let idx: Vec<usize> = (0..out.len()).step_by(step).collect();
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Trajectory (km)");
                    let points: PlotPoints = idx
                        .iter()
                        .map(|&i| {
                            let s = &out.states[i];
                            [s.downrange() / 1000.0, s.altitude() / 1000.0]
                        })
                        .collect();
                    let x_label = "Downrange (km)";
                    series_plot(ui, "trajectory", "Trajectory", x_label, points, half_w, half_h);
                });
                ui.vertical(|ui| {
                    ui.label("Altitude (km)");
                    let points: PlotPoints = idx
                        .iter()
                        .map(|&i| [out.time[i], out.states[i].pos.y / 1000.0])
                        .collect();
                    series_plot(ui, "altitude", "Altitude", "Time (s)", points, half_w, half_h);
                });
            });

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Speed (m/s)");
                    let points: PlotPoints = idx
                        .iter()
                        .map(|&i| [out.time[i], out.states[i].speed()])
                        .collect();
                    series_plot(ui, "speed", "Speed", "Time (s)", points, half_w, half_h);
                });
                ui.vertical(|ui| {
                    ui.label("Dynamic Pressure (kPa)");
                    let points: PlotPoints = idx
                        .iter()
                        .map(|&i| [out.time[i], out.telemetry.q_dyn[i] / 1000.0])
                        .collect();
                    series_plot(ui, "q_dyn", "q", "Time (s)", points, half_w, half_h);
                });
            });
        });
    }
}
