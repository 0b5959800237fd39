//! Donut chart layout for the monthly spend breakdown.
//!
//! Each subscription becomes one arc whose sweep is proportional to its cost.
//! A fixed angular gap follows every arc. All angles are in degrees until the
//! point where a coordinate is evaluated, which keeps results identical across
//! renders.
//!
//! The layout works in the chart's own view-box space (centre `(50, 50)`,
//! radius `40` by default). The renderer scales that space onto the screen.

use serde::{Deserialize, Serialize};
use shared::{ArcSegment, ChartSegmentInput, DonutChart, Point, Subscription};
use thiserror::Error;

/// Errors raised while laying out the ring
#[derive(Debug, Error, PartialEq)]
pub enum DonutChartError {
    #[error("Cannot lay out a donut chart: {0}")]
    DegenerateInput(String),
}

/// Ring geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    /// Degrees of empty space after every segment
    pub gap_degrees: f64,
    /// Distance of label anchors outside the ring
    pub label_offset: f64,
    /// Stroke width of the arcs, in view-box units
    pub stroke_width: f64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            center_x: 50.0,
            center_y: 50.0,
            radius: 40.0,
            gap_degrees: 13.0,
            label_offset: 10.0,
            stroke_width: 8.0,
        }
    }
}

impl RingConfig {
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }
}

/// Stateless donut layout service
#[derive(Debug, Clone, Copy, Default)]
pub struct DonutChartService;

impl DonutChartService {
    pub fn new() -> Self {
        Self
    }

    /// Lay out `segments` on a ring of `radius` with the default centre and
    /// label offset.
    pub fn layout(
        &self,
        segments: &[ChartSegmentInput],
        gap_degrees: f64,
        radius: f64,
    ) -> Result<Vec<ArcSegment>, DonutChartError> {
        let config = RingConfig {
            radius,
            gap_degrees,
            ..RingConfig::default()
        };
        self.layout_with(segments, &config)
    }

    /// Lay out `segments` with explicit ring geometry.
    ///
    /// A segment whose share of the circle is smaller than the gap gets a
    /// zero sweep instead of a negative one. The following segment still
    /// starts one gap later, so in that case the ring overshoots 360 degrees.
    pub fn layout_with(
        &self,
        segments: &[ChartSegmentInput],
        config: &RingConfig,
    ) -> Result<Vec<ArcSegment>, DonutChartError> {
        if segments.is_empty() {
            return Err(DonutChartError::DegenerateInput("no segments".to_string()));
        }

        let total_weight = total_weight(segments);
        if !total_weight.is_finite() || total_weight <= 0.0 {
            return Err(DonutChartError::DegenerateInput(format!(
                "total weight must be positive, got {}",
                total_weight
            )));
        }

        let center = config.center();
        let mut start_angle = 0.0_f64;
        let mut arcs = Vec::with_capacity(segments.len());

        for segment in segments {
            let fraction = segment.weight / total_weight;
            let mut segment_angle = fraction * 360.0 - config.gap_degrees;
            if segment_angle < 0.0 {
                log::warn!(
                    "Segment '{}' is narrower than the {}° gap, drawing it as a sliver",
                    segment.id,
                    config.gap_degrees
                );
                segment_angle = 0.0;
            }
            let end_angle = start_angle + segment_angle;
            let label_angle = start_angle + segment_angle / 2.0;

            arcs.push(ArcSegment {
                id: segment.id.clone(),
                weight: segment.weight,
                start_angle_deg: start_angle,
                end_angle_deg: end_angle,
                segment_angle_deg: segment_angle,
                large_arc: segment_angle > 180.0,
                start: point_on_circle(center, config.radius, start_angle),
                end: point_on_circle(center, config.radius, end_angle),
                label_anchor: point_on_circle(center, config.radius + config.label_offset, label_angle),
            });

            start_angle = end_angle + config.gap_degrees;
        }

        log::debug!(
            "🍩 Laid out {} segments, total weight {:.2}, sweep ends at {:.2}°",
            arcs.len(),
            total_weight,
            start_angle
        );

        Ok(arcs)
    }

    /// Build the whole ring for a subscription list, weighting by cost
    pub fn layout_chart(
        &self,
        subscriptions: &[Subscription],
        config: &RingConfig,
    ) -> Result<DonutChart, DonutChartError> {
        let inputs: Vec<ChartSegmentInput> = subscriptions
            .iter()
            .map(|sub| ChartSegmentInput::new(sub.name.clone(), sub.cost))
            .collect();

        let segments = self.layout_with(&inputs, config)?;
        for segment in &segments {
            log::trace!("🍩 {}: {}", segment.id, segment.svg_path(config.radius));
        }

        Ok(DonutChart {
            center: config.center(),
            radius: config.radius,
            gap_degrees: config.gap_degrees,
            total_weight: total_weight(&inputs),
            segments,
        })
    }
}

fn total_weight(segments: &[ChartSegmentInput]) -> f64 {
    segments.iter().map(|segment| segment.weight).sum()
}

/// Point at `angle_deg` on a circle, clockwise from the positive x axis in
/// screen coordinates
fn point_on_circle(center: Point, radius: f64, angle_deg: f64) -> Point {
    let theta = angle_deg * std::f64::consts::PI / 180.0;
    Point::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
}
