//! Chart Renderer
//! Draws a validated figure into the current frame with egui_plot

use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Rect, RichText, Stroke, Vec2};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotBounds, PlotPoints, Points};

use crate::charts::{Anchor, Chart, ChartError, Marker};

/// Height of a rendered figure in points. Width follows the panel.
const FIGURE_HEIGHT: f32 = 460.0;

/// Series color cycle (matplotlib default cycle, as in the source figures).
pub const PALETTE: [Color32; 6] = [
    Color32::from_rgb(31, 119, 180),  // Blue
    Color32::from_rgb(255, 127, 14),  // Orange
    Color32::from_rgb(44, 160, 44),   // Green
    Color32::from_rgb(214, 39, 40),   // Red
    Color32::from_rgb(148, 103, 189), // Purple
    Color32::from_rgb(140, 86, 75),   // Brown
];

const LINE_WIDTH: f32 = 1.5;
const MARKER_RADIUS: f32 = 3.0;

const ANNOTATION_FONT_SIZE: f32 = 11.0;
const ANNOTATION_PADDING: f32 = 8.0;
const ANNOTATION_ROUNDING: f32 = 6.0;
/// White at 85% opacity.
const ANNOTATION_FILL: Color32 = Color32::from_rgba_premultiplied(217, 217, 217, 217);

/// Stateless figure renderer. One call draws one chart.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Draw `chart` into `ui`. Runs the pre-draw checks first; when they
    /// fail nothing is painted and the error is returned to the caller.
    pub fn render(ui: &mut egui::Ui, chart: &Chart) -> Result<(), ChartError> {
        chart.validate()?;

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&chart.title).size(16.0).strong());
        });
        ui.add_space(4.0);

        let bounds = chart.value_bounds();
        let response = Plot::new(chart.title.clone())
            .height(FIGURE_HEIGHT)
            .x_axis_label(chart.x_label.clone())
            .y_axis_label(chart.y_label.clone())
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_x(false)
            .show_y(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [bounds.x_min, bounds.y_min],
                    [bounds.x_max, bounds.y_max],
                ));

                for (index, series) in chart.series.iter().enumerate() {
                    let color = PALETTE[index % PALETTE.len()];
                    let line_points: PlotPoints = chart
                        .x_values
                        .iter()
                        .zip(series.values.iter())
                        .map(|(&x, &y)| [x, y])
                        .collect();
                    plot_ui.line(
                        Line::new(line_points)
                            .color(color)
                            .width(LINE_WIDTH)
                            .name(&series.label),
                    );

                    let marker_points: PlotPoints = chart
                        .x_values
                        .iter()
                        .zip(series.values.iter())
                        .map(|(&x, &y)| [x, y])
                        .collect();
                    plot_ui.points(
                        Points::new(marker_points)
                            .shape(marker_shape(series.marker))
                            .radius(MARKER_RADIUS)
                            .color(color)
                            .name(&series.label),
                    );
                }
            });

        if let Some(annotation) = &chart.annotation {
            let anchor = annotation.resolve_anchor()?;
            let frame = *response.transform.frame();
            draw_annotation(ui, frame, &annotation.text, anchor);
        }
        Ok(())
    }
}

fn marker_shape(marker: Marker) -> MarkerShape {
    match marker {
        Marker::Circle => MarkerShape::Circle,
        Marker::Square => MarkerShape::Square,
        Marker::Triangle => MarkerShape::Up,
    }
}

/// Which edges of the text block sit on the anchor point.
fn block_alignment(anchor: Anchor) -> Align2 {
    match anchor {
        Anchor::BottomRight => Align2::RIGHT_BOTTOM,
        Anchor::Center => Align2::CENTER_CENTER,
        Anchor::TopCenter => Align2::CENTER_TOP,
    }
}

/// Rectangle of the annotation block inside `frame`. The anchor position is
/// given in normalized plot coordinates with y growing upward, so the
/// vertical component flips when mapping onto the screen.
fn annotation_rect(frame: Rect, anchor: Anchor, block_size: Vec2) -> Rect {
    let (nx, ny) = anchor.position();
    let pinned = pos2(
        frame.left() + nx * frame.width(),
        frame.top() + (1.0 - ny) * frame.height(),
    );
    aligned_rect(pinned, block_size, block_alignment(anchor))
}

/// Rectangle of `size` whose `alignment` edges touch `pinned`.
fn aligned_rect(pinned: Pos2, size: Vec2, alignment: Align2) -> Rect {
    let x = match alignment.x() {
        egui::Align::Min => pinned.x,
        egui::Align::Center => pinned.x - size.x / 2.0,
        egui::Align::Max => pinned.x - size.x,
    };
    let y = match alignment.y() {
        egui::Align::Min => pinned.y,
        egui::Align::Center => pinned.y - size.y / 2.0,
        egui::Align::Max => pinned.y - size.y,
    };
    Rect::from_min_size(pos2(x, y), size)
}

/// Paint the annotation block over the plot frame: rounded white box with a
/// thin black border and the multi-line text inside it. Painting is clipped
/// to the plot frame.
fn draw_annotation(ui: &egui::Ui, frame: Rect, text: &str, anchor: Anchor) {
    if text.trim().is_empty() {
        return;
    }

    let painter = ui.painter_at(frame);
    let galley = painter.layout_no_wrap(
        text.to_owned(),
        FontId::proportional(ANNOTATION_FONT_SIZE),
        Color32::BLACK,
    );
    let block_size = galley.size() + vec2(2.0 * ANNOTATION_PADDING, 2.0 * ANNOTATION_PADDING);
    let rect = annotation_rect(frame, anchor, block_size);
    painter.rect_filled(rect, ANNOTATION_ROUNDING, ANNOTATION_FILL);
    painter.rect_stroke(rect, ANNOTATION_ROUNDING, Stroke::new(1.0, Color32::BLACK));
    painter.galley(
        rect.min + vec2(ANNOTATION_PADDING, ANNOTATION_PADDING),
        galley,
        Color32::BLACK,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn study_markers_map_to_plot_shapes() {
        assert_eq!(marker_shape(Marker::Circle), MarkerShape::Circle);
        assert_eq!(marker_shape(Marker::Square), MarkerShape::Square);
        assert_eq!(marker_shape(Marker::Triangle), MarkerShape::Up);
    }

    #[test]
    fn center_anchor_centers_the_block() {
        assert_eq!(block_alignment(Anchor::Center), Align2::CENTER_CENTER);
        let frame = Rect::from_min_size(pos2(0.0, 0.0), vec2(640.0, 480.0));
        let rect = annotation_rect(frame, Anchor::Center, vec2(120.0, 60.0));
        assert_eq!(rect.center(), frame.center());
    }

    #[test]
    fn bottom_right_anchor_hugs_the_lower_right_corner() {
        let frame = Rect::from_min_size(pos2(10.0, 20.0), vec2(640.0, 480.0));
        let rect = annotation_rect(frame, Anchor::BottomRight, vec2(120.0, 60.0));
        assert_eq!(rect.max.x, frame.left() + 0.98 * frame.width());
        assert_eq!(rect.max.y, frame.top() + 0.98 * frame.height());
    }

    #[test]
    fn top_center_anchor_sits_below_the_upper_edge() {
        let frame = Rect::from_min_size(pos2(0.0, 0.0), vec2(640.0, 480.0));
        let rect = annotation_rect(frame, Anchor::TopCenter, vec2(120.0, 60.0));
        assert_eq!(rect.center().x, frame.center().x);
        assert!((rect.min.y - 0.03 * frame.height()).abs() < 1e-4);
    }

    #[test]
    fn blocks_stay_inside_the_frame_for_every_anchor() {
        let frame = Rect::from_min_size(pos2(0.0, 0.0), vec2(640.0, 480.0));
        for anchor in [Anchor::BottomRight, Anchor::Center, Anchor::TopCenter] {
            let rect = annotation_rect(frame, anchor, vec2(150.0, 80.0));
            assert!(
                frame.contains_rect(rect),
                "{anchor:?} block {rect:?} escapes the frame"
            );
        }
    }

    #[test]
    fn aligned_rect_keeps_the_requested_size() {
        let rect = aligned_rect(pos2(100.0, 100.0), vec2(42.0, 17.0), Align2::RIGHT_BOTTOM);
        assert_eq!(rect.size(), vec2(42.0, 17.0));
        assert_eq!(rect.max, pos2(100.0, 100.0));
    }
}
