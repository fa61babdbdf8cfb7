use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use thrust_sim::dynamics::state::{ProjectileState, SimConfig};
use thrust_sim::launch::presets;
use thrust_sim::sim::{self, FlightReport};

fn main() -> eframe::Result {
    let launch = presets::model_rocket();
    let config = SimConfig { thrust_time: presets::MODEL_ROCKET_BURN, ..SimConfig::default() };
    let initial = match launch.initial_state() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("invalid preset: {e}");
            std::process::exit(2);
        }
    };

    let mut trajectory = vec![initial];
    trajectory.extend(sim::steps(initial, &config));
    let (report, _) = sim::simulate(initial, &config);

    let app = TrajectoryViz { trajectory, report, thrust_time: config.thrust_time };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native("Projectile Trajectory", options, Box::new(|_| Ok(Box::new(app))))
}

struct TrajectoryViz {
    trajectory: Vec<ProjectileState>,
    report: FlightReport,
    thrust_time: f64,
}

impl eframe::App for TrajectoryViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let step = (self.trajectory.len() / 2000).max(1);
        let sampled: Vec<&ProjectileState> = self.trajectory.iter().step_by(step).collect();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            let (x, y) = self.report.reported_position();
            ui.heading("Model rocket");
            ui.label(format!(
                "Apex: {:.1} m  |  Range: {:.1} m  |  Landed at y={:.1}  |  Burn: {:.1} s  |  Flight: {:.2} s",
                self.report.max_height,
                x,
                y,
                self.thrust_time,
                self.report.flight_time(),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Height vs downrange
                ui.vertical(|ui| {
                    ui.label("Trajectory (m)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.pos.x, s.reported_height()])
                        .collect();
                    Plot::new("profile")
                        .width(half_w)
                        .height(available.y)
                        .x_axis_label("Downrange (m)")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Trajectory", points));
                        });
                });

                // Speed vs time
                ui.vertical(|ui| {
                    ui.label("Speed (m/s)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.speed()])
                        .collect();
                    Plot::new("speed")
                        .width(half_w)
                        .height(available.y)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Speed", points));
                        });
                });
            });
        });
    }
}
