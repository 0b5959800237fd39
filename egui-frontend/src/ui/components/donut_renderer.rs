//! # Spend Ring Renderer
//!
//! Paints the monthly spend donut using egui's painting primitives. The arc
//! geometry comes fully computed from `DonutChartService`; this module only
//! maps chart coordinates onto the screen and strokes the arcs.
//!
//! The chart lives in a 100x100 coordinate box (centre 50,50). Labels sit
//! outside the ring, so the visible box is widened to -20..120.

use eframe::egui;
use shared::{ArcSegment, DonutChart, Point, Subscription, ThemeMode};

use super::icons::{paint_icon_badge, resolve_icon};
use super::theme::Theme;
use crate::backend::domain::{DonutChartError, RingConfig, SubscriptionService};

/// Smallest chart coordinate that must stay visible
const VIEW_MIN: f32 = -20.0;
/// Width of the visible chart box
const VIEW_SIZE: f32 = 140.0;

/// Appearance of the spend ring
#[derive(Debug, Clone)]
pub struct DonutRenderConfig {
    /// Diameter of the label badges, in chart units
    pub label_diameter: f32,
    /// Font size of "Monthly Spend"
    pub caption_font_size: f32,
    /// Font size of the total
    pub total_font_size: f32,
}

impl Default for DonutRenderConfig {
    fn default() -> Self {
        Self {
            label_diameter: 12.0,
            caption_font_size: 13.0,
            total_font_size: 22.0,
        }
    }
}

/// Maps chart coordinates into a screen rect
#[derive(Debug, Clone, Copy)]
struct ChartTransform {
    origin: egui::Pos2,
    scale: f32,
}

impl ChartTransform {
    fn new(rect: egui::Rect) -> Self {
        let side = rect.width().min(rect.height());
        let scale = side / VIEW_SIZE;
        let offset = egui::vec2((rect.width() - side) / 2.0, (rect.height() - side) / 2.0);
        Self {
            origin: rect.min + offset - egui::vec2(VIEW_MIN * scale, VIEW_MIN * scale),
            scale,
        }
    }

    fn point(&self, point: Point) -> egui::Pos2 {
        self.origin + egui::vec2(point.x as f32 * self.scale, point.y as f32 * self.scale)
    }

    fn length(&self, chart_units: f32) -> f32 {
        chart_units * self.scale
    }
}

/// Spend ring component
#[derive(Debug, Default)]
pub struct DonutRenderer {
    config: DonutRenderConfig,
}

impl DonutRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the ring into the available space, or an inline message when
    /// the layout failed
    pub fn render(
        &self,
        ui: &mut egui::Ui,
        chart: &Result<DonutChart, DonutChartError>,
        ring: &RingConfig,
        subscriptions: &[Subscription],
        total_label: &str,
        mode: ThemeMode,
    ) {
        let chart = match chart {
            Ok(chart) => chart,
            Err(error) => {
                self.render_error(ui, error, mode);
                return;
            }
        };

        let theme = Theme::for_mode(mode);
        let side = ui.available_width().min(ui.available_height()).max(120.0);
        let (rect, _response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
        let transform = ChartTransform::new(rect);
        let painter = ui.painter();

        let stroke = egui::Stroke::new(transform.length(ring.stroke_width as f32), theme.ring.stroke);
        for segment in &chart.segments {
            draw_arc(painter, &transform, chart, segment, stroke);
        }

        for segment in &chart.segments {
            let anchor = transform.point(segment.label_anchor);
            let diameter = transform.length(self.config.label_diameter);
            painter.circle_filled(anchor, diameter / 2.0 + 2.0, theme.ring.label_background);
            if let Some(subscription) = SubscriptionService::new().find_by_name(subscriptions, &segment.id) {
                paint_icon_badge(painter, anchor, diameter, &resolve_icon(subscription));
            }
        }

        self.render_center_text(painter, transform.point(chart.center), total_label, theme);
    }

    fn render_center_text(&self, painter: &egui::Painter, center: egui::Pos2, total_label: &str, theme: &Theme) {
        painter.text(
            center - egui::vec2(0.0, self.config.total_font_size * 0.6),
            egui::Align2::CENTER_CENTER,
            "Monthly Spend",
            egui::FontId::new(self.config.caption_font_size, egui::FontFamily::Proportional),
            theme.typography.secondary,
        );
        painter.text(
            center + egui::vec2(0.0, self.config.caption_font_size * 0.6),
            egui::Align2::CENTER_CENTER,
            total_label,
            egui::FontId::new(self.config.total_font_size, egui::FontFamily::Proportional),
            theme.typography.heading,
        );
    }

    fn render_error(&self, ui: &mut egui::Ui, error: &DonutChartError, mode: ThemeMode) {
        let theme = Theme::for_mode(mode);
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.label(
                egui::RichText::new("Nothing to chart")
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .color(theme.typography.primary),
            );
            ui.label(
                egui::RichText::new(error.to_string())
                    .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                    .color(theme.typography.secondary),
            );
        });
    }
}

/// Stroke one arc as a polyline from its start angle to its end angle
/// (egui has no native arc). Round caps are drawn as discs at both ends.
fn draw_arc(
    painter: &egui::Painter,
    transform: &ChartTransform,
    chart: &DonutChart,
    segment: &ArcSegment,
    stroke: egui::Stroke,
) {
    let points = arc_points(chart.center, chart.radius, segment.start_angle_deg, segment.end_angle_deg)
        .into_iter()
        .map(|point| transform.point(point))
        .collect::<Vec<_>>();

    if points.len() >= 2 {
        painter.add(egui::Shape::line(points, stroke));
    }

    let cap_radius = stroke.width / 2.0;
    painter.circle_filled(transform.point(segment.start), cap_radius, stroke.color);
    painter.circle_filled(transform.point(segment.end), cap_radius, stroke.color);
}

/// Points along an arc, roughly one every 3 degrees
pub fn arc_points(center: Point, radius: f64, start_deg: f64, end_deg: f64) -> Vec<Point> {
    let sweep = end_deg - start_deg;
    if sweep <= 0.0 {
        return Vec::new();
    }

    let steps = ((sweep / 3.0).ceil() as usize).clamp(2, 120);
    (0..=steps)
        .map(|step| {
            let angle = (start_deg + sweep * step as f64 / steps as f64).to_radians();
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_points_follow_the_circle() {
        let center = Point::new(50.0, 50.0);
        let points = arc_points(center, 40.0, 0.0, 90.0);

        assert_eq!(points.len(), 31);
        let first = points[0];
        let last = points[points.len() - 1];
        assert!((first.x - 90.0).abs() < 1e-9 && (first.y - 50.0).abs() < 1e-9);
        assert!((last.x - 50.0).abs() < 1e-9 && (last.y - 90.0).abs() < 1e-9);

        for point in &points {
            let distance = ((point.x - 50.0).powi(2) + (point.y - 50.0).powi(2)).sqrt();
            assert!((distance - 40.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_sweep_has_no_polyline() {
        assert!(arc_points(Point::new(50.0, 50.0), 40.0, 120.0, 120.0).is_empty());
    }

    #[test]
    fn test_transform_maps_view_box_onto_rect() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(280.0, 280.0));
        let transform = ChartTransform::new(rect);

        let top_left = transform.point(Point::new(-20.0, -20.0));
        assert!((top_left.x - 10.0).abs() < 1e-4 && (top_left.y - 20.0).abs() < 1e-4);

        let center = transform.point(Point::new(50.0, 50.0));
        assert!((center.x - rect.center().x).abs() < 1e-4);
        assert!((center.y - rect.center().y).abs() < 1e-4);
        assert!((transform.length(40.0) - 80.0).abs() < 1e-4);
    }
}
