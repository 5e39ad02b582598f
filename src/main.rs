//! BenchPlot - Copy-Strategy Benchmark Figure Viewer
//!
//! Displays the four annotated comparison charts of the messaging study.

use benchplot::gui::BenchPlotApp;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    // RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("benchplot=info")),
        )
        .init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("BenchPlot"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "BenchPlot",
        options,
        Box::new(|cc| Ok(Box::new(BenchPlotApp::new(cc)))),
    )
}
