use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to an icon. The domain layer only passes it through;
/// the UI decides what to draw for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(pub String);

impl IconId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A recurring monthly subscription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Display name, also the unique identifier of the subscription
    pub name: String,
    pub icon: IconId,
    /// Monthly cost in dollars
    pub cost: f64,
    /// Day of the month (1-31) the charge is due
    pub due_day: u32,
}

impl Subscription {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, cost: f64, due_day: u32) -> Self {
        Self {
            name: name.into(),
            icon: IconId::new(icon),
            cost,
            due_day,
        }
    }
}

/// A single cell of the month grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarCell {
    /// Day of month, or None for a blank cell before the 1st
    pub day_number: Option<u32>,
    /// Subscriptions due on this day, in input order
    pub subscriptions_due: Vec<Subscription>,
}

impl CalendarCell {
    pub fn blank() -> Self {
        Self {
            day_number: None,
            subscriptions_due: Vec::new(),
        }
    }

    pub fn day(day_number: u32, subscriptions_due: Vec<Subscription>) -> Self {
        Self {
            day_number: Some(day_number),
            subscriptions_due,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.day_number.is_none()
    }

    /// The subscription whose icon represents this day on the grid
    pub fn primary_subscription(&self) -> Option<&Subscription> {
        self.subscriptions_due.first()
    }

    /// More subscriptions are due than the cell can show
    pub fn has_overflow(&self) -> bool {
        self.subscriptions_due.len() > 1
    }
}

/// A month laid out as a Sunday-first grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMonth {
    /// Month index, 0 = January
    pub month: u32,
    pub year: i32,
    /// Weekday of the 1st, 0 = Sunday
    pub first_weekday_offset: u32,
    pub days_in_month: u32,
    pub cells: Vec<CalendarCell>,
}

impl CalendarMonth {
    /// Iterate over the non-blank cells
    pub fn day_cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.cells.iter().filter(|cell| !cell.is_blank())
    }

    pub fn cell_for_day(&self, day: u32) -> Option<&CalendarCell> {
        self.day_cells().find(|cell| cell.day_number == Some(day))
    }
}

/// A point in chart view-box coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One weighted input slice for the donut layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSegmentInput {
    pub id: String,
    pub weight: f64,
}

impl ChartSegmentInput {
    pub fn new(id: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }
}

/// A laid-out arc of the donut chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    /// Identifier of the segment (the subscription name)
    pub id: String,
    pub weight: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    /// Angular span of the arc, never negative
    pub segment_angle_deg: f64,
    /// Sweep exceeds 180 degrees
    pub large_arc: bool,
    pub start: Point,
    pub end: Point,
    pub label_anchor: Point,
}

impl ArcSegment {
    /// SVG path data for this arc, drawn clockwise on a circle of `radius`
    pub fn svg_path(&self, radius: f64) -> String {
        format!(
            "M {} {} A {} {} 0 {} 1 {} {}",
            self.start.x,
            self.start.y,
            radius,
            radius,
            if self.large_arc { 1 } else { 0 },
            self.end.x,
            self.end.y
        )
    }
}

/// The complete ring: geometry parameters plus the laid-out arcs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutChart {
    pub center: Point,
    pub radius: f64,
    pub gap_degrees: f64,
    pub total_weight: f64,
    pub segments: Vec<ArcSegment>,
}

/// Colour scheme of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_overflow() {
        let blank = CalendarCell::blank();
        assert!(blank.is_blank());
        assert!(blank.primary_subscription().is_none());
        assert!(!blank.has_overflow());

        let cell = CalendarCell::day(
            2,
            vec![
                Subscription::new("ChatGPT", "openai", 27.52, 2),
                Subscription::new("Adobe", "adobe", 7.99, 2),
            ],
        );
        assert!(!cell.is_blank());
        assert_eq!(cell.primary_subscription().unwrap().name, "ChatGPT");
        assert!(cell.has_overflow());
    }

    #[test]
    fn test_svg_path_format() {
        let arc = ArcSegment {
            id: "A".to_string(),
            weight: 1.0,
            start_angle_deg: 0.0,
            end_angle_deg: 270.0,
            segment_angle_deg: 270.0,
            large_arc: true,
            start: Point::new(90.0, 50.0),
            end: Point::new(50.0, 10.0),
            label_anchor: Point::new(0.0, 0.0),
        };
        assert_eq!(arc.svg_path(40.0), "M 90 50 A 40 40 0 1 1 50 10");
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_subscription_serialization() {
        let sub = Subscription::new("Netflix", "netflix", 15.99, 15);
        let json = serde_json::to_string(&sub).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Netflix","icon":"netflix","cost":15.99,"due_day":15}"#
        );
        let theme: ThemeMode = serde_json::from_str(r#""light""#).unwrap();
        assert_eq!(theme, ThemeMode::Light);
    }
}
