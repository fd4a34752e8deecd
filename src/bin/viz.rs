use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use ascent_sim::compare::{ChannelComparison, Comparison};
use ascent_sim::io::Telemetry;
use ascent_sim::sim::runner::simulate;
use ascent_sim::types::{Environment, PitchProfile, SimConfig};
use ascent_sim::vehicle::presets;

fn main() -> eframe::Result {
    let telemetry_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ksp_flight_data.csv".into());

    let mission = presets::kerbin_two_stage();
    let flight = simulate(
        &mission,
        &Environment::kerbin(),
        &PitchProfile::default(),
        &SimConfig::default(),
    );
    let telemetry = Telemetry::load(&telemetry_path);
    let comparison = Comparison::new(&flight, &telemetry.samples);

    let app = CompareViz {
        mission_name: mission.name,
        synthetic: telemetry.is_synthetic(),
        comparison,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1400.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native("Ascent vs Telemetry", options, Box::new(|_| Ok(Box::new(app))))
}

struct CompareViz {
    mission_name: String,
    synthetic: bool,
    comparison: Comparison,
}

impl CompareViz {
    fn panel(&self, ui: &mut egui::Ui, channel: &ChannelComparison, width: f32, height: f32) {
        let times = &self.comparison.times;

        let simulated: PlotPoints = times
            .iter()
            .zip(&channel.simulated)
            .filter(|(_, v)| v.is_finite())
            .map(|(t, v)| [*t, *v])
            .collect();
        let reference: PlotPoints = times
            .iter()
            .zip(&channel.reference)
            .map(|(t, v)| [*t, *v])
            .collect();
        let error: PlotPoints = times
            .iter()
            .zip(&channel.error)
            .filter(|(_, v)| v.is_finite())
            .map(|(t, v)| [*t, *v])
            .collect();

        ui.vertical(|ui| {
            ui.label(channel.name);
            Plot::new(channel.name)
                .width(width)
                .height(height)
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Simulated", simulated));
                    plot_ui.line(Line::new("Recorded", reference));
                    plot_ui.line(Line::new("Error", error));
                });
        });
    }
}

impl eframe::App for CompareViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!("Mission: {}", self.mission_name));
            let provenance = if self.synthetic {
                "SYNTHETIC placeholder telemetry (file unreadable)"
            } else {
                "recorded telemetry"
            };
            ui.label(format!(
                "Simulated vs {} — {} comparison points",
                provenance,
                self.comparison.times.len(),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let third_h = available.y / 3.0 - 8.0;
            let channels = &self.comparison.channels;

            // altitude | vertical velocity
            ui.horizontal(|ui| {
                self.panel(ui, &channels[0], half_w, third_h);
                self.panel(ui, &channels[1], half_w, third_h);
            });
            // horizontal velocity | total velocity
            ui.horizontal(|ui| {
                self.panel(ui, &channels[2], half_w, third_h);
                self.panel(ui, &channels[3], half_w, third_h);
            });
            // displacement
            ui.horizontal(|ui| {
                self.panel(ui, &channels[4], half_w, third_h);
            });
        });
    }
}
