//! BenchPlot Main Application
//! Main window with the figure list and the chart viewer.

use egui::{Color32, RichText, SidePanel};
use tracing::{info, warn};

use crate::data::datasets;
use crate::gui::ChartViewer;

/// Main application window.
pub struct BenchPlotApp {
    viewer: ChartViewer,
}

impl BenchPlotApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let charts = datasets::all();
        for chart in &charts {
            match chart.validate() {
                Ok(()) => info!(
                    title = %chart.title,
                    series = chart.series.len(),
                    points = chart.x_values.len(),
                    "figure ready"
                ),
                Err(error) => warn!(title = %chart.title, %error, "figure will not render"),
            }
        }
        Self {
            viewer: ChartViewer::new(charts),
        }
    }
}

impl eframe::App for BenchPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - figure list and navigation
        SidePanel::left("figure_list")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(5.0);
                    ui.label(
                        RichText::new("📈 BenchPlot")
                            .size(22.0)
                            .color(Color32::from_rgb(100, 149, 237)),
                    );
                    ui.label(
                        RichText::new("Copy-strategy benchmark figures")
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                });
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(5.0);

                ui.label(RichText::new("Figures").size(14.0).strong());
                ui.add_space(5.0);
                self.viewer.sequence_list(ui);

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(5.0);
                self.viewer.navigation(ui);
            });

        // Central panel - current figure
        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewer.show(ui);
        });
    }
}
