//! Figure Viewer Widget
//! Sequence navigation plus the framed card for the figure on screen.

use egui::{Color32, RichText, ScrollArea};

use crate::charts::{Chart, ChartRenderer};

const CARD_ROUNDING: f32 = 8.0;
/// Red used for validation failures, matching the rest of the error styling.
const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Shows the study's figures one at a time, in sequence.
pub struct ChartViewer {
    charts: Vec<Chart>,
    current: usize,
}

impl ChartViewer {
    pub fn new(charts: Vec<Chart>) -> Self {
        Self { charts, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Figure list; clicking an entry jumps straight to that figure.
    pub fn sequence_list(&mut self, ui: &mut egui::Ui) {
        for (index, chart) in self.charts.iter().enumerate() {
            let entry = format!("{}. {}", index + 1, chart.title);
            if ui.selectable_label(self.current == index, entry).clicked() {
                self.current = index;
            }
        }
    }

    /// Previous/Next stepping through the sequence.
    pub fn navigation(&mut self, ui: &mut egui::Ui) {
        if self.charts.is_empty() {
            return;
        }
        ui.horizontal(|ui| {
            ui.add_enabled_ui(self.current > 0, |ui| {
                if ui.button("◀ Previous").clicked() {
                    self.current -= 1;
                }
            });
            ui.label(format!("{} / {}", self.current + 1, self.charts.len()));
            ui.add_enabled_ui(self.current + 1 < self.charts.len(), |ui| {
                if ui.button("Next ▶").clicked() {
                    self.current += 1;
                }
            });
        });
    }

    /// Draw the card for the current figure.
    pub fn show(&self, ui: &mut egui::Ui) {
        if self.charts.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No figures").size(20.0));
            });
            return;
        }

        let chart = &self.charts[self.current];
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::draw_figure_card(ui, chart);
            });
    }

    /// One framed card holding the rendered figure. A figure that fails its
    /// pre-draw checks shows the error instead; the rest of the sequence is
    /// unaffected.
    fn draw_figure_card(ui: &mut egui::Ui, chart: &Chart) {
        egui::Frame::none()
            .rounding(CARD_ROUNDING)
            .stroke(egui::Stroke::new(
                1.0,
                ui.visuals().widgets.noninteractive.bg_stroke.color,
            ))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                if let Err(error) = ChartRenderer::render(ui, chart) {
                    ui.label(RichText::new(&chart.title).size(16.0).strong());
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("⚠ Cannot render figure: {error}"))
                            .size(14.0)
                            .color(ERROR_COLOR),
                    );
                }
            });
    }
}
