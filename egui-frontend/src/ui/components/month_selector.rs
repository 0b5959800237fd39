//! # Month Selector
//!
//! The column of month names along the right edge. The selected month is
//! drawn largest and brightest; neighbours shrink and fade with distance.
//! Wide windows show the column directly, narrow ones tuck it into a drawer
//! opened by an arrow button.

use eframe::egui;
use shared::ThemeMode;

use super::theme::Theme;
use crate::ui::state::PresentationAction;

/// Windows narrower than this use the drawer
pub const DRAWER_BREAKPOINT: f32 = 1024.0;

/// Visual emphasis of one month entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthEmphasis {
    /// Scale factor applied to the label, 1.0 to 1.1
    pub scale: f32,
    /// Grey level of the label, 255 for the selected month down to 0
    pub gray: u8,
}

impl MonthEmphasis {
    pub fn color(&self) -> egui::Color32 {
        egui::Color32::from_rgb(self.gray, self.gray, self.gray)
    }
}

/// Emphasis of month `index` when `current` is selected
pub fn month_emphasis(current: u32, index: u32) -> MonthEmphasis {
    let distance = current.abs_diff(index) as f32;
    let scale = 1.0 + (0.1 - distance * 0.03).max(0.0);
    let intensity = (distance * 0.4).min(1.0);
    MonthEmphasis {
        scale,
        gray: (255.0 - intensity * 255.0).round() as u8,
    }
}

/// Render the twelve month entries. Returns the action for a clicked entry.
pub fn render_month_list(
    ui: &mut egui::Ui,
    month_names: &[&str; 12],
    current: u32,
    base_font_size: f32,
) -> Option<PresentationAction> {
    let mut action = None;

    for (index, name) in month_names.iter().enumerate() {
        let emphasis = month_emphasis(current, index as u32);
        let text = egui::RichText::new(*name)
            .font(egui::FontId::new(base_font_size * emphasis.scale, egui::FontFamily::Proportional))
            .color(emphasis.color())
            .strong();

        let response = ui.add(egui::Label::new(text).sense(egui::Sense::click()).selectable(false));
        if response.clicked() {
            log::info!("📅 Month selected: {}", name);
            action = Some(PresentationAction::SelectMonth(index as u32));
        }
        response.on_hover_cursor(egui::CursorIcon::PointingHand);
    }

    action
}

/// Render the arrow button that opens and closes the drawer
pub fn render_drawer_toggle(ui: &mut egui::Ui, drawer_open: bool, mode: ThemeMode) -> Option<PresentationAction> {
    let theme = Theme::for_mode(mode);
    let glyph = if drawer_open { "⏷" } else { "⏶" };

    let button = egui::Button::new(
        egui::RichText::new(glyph)
            .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
            .color(theme.typography.primary),
    )
    .fill(theme.calendar.day_background)
    .rounding(egui::Rounding::same(24.0));

    if ui.add_sized([48.0, 48.0], button).clicked() {
        Some(PresentationAction::ToggleDrawer)
    } else {
        None
    }
}

/// Render the drawer body with the month list
pub fn render_drawer(
    ctx: &egui::Context,
    anchor: egui::Pos2,
    month_names: &[&str; 12],
    current: u32,
    mode: ThemeMode,
) -> Option<PresentationAction> {
    let theme = Theme::for_mode(mode);
    let mut action = None;

    egui::Area::new(egui::Id::new("month_drawer"))
        .pivot(egui::Align2::RIGHT_BOTTOM)
        .fixed_pos(anchor)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(theme.layout.drawer_background)
                .rounding(egui::Rounding::same(8.0))
                .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing.y = 4.0;
                    action = render_month_list(ui, month_names, current, 16.0);
                });
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_month_is_largest_and_white() {
        let emphasis = month_emphasis(4, 4);
        assert!((emphasis.scale - 1.1).abs() < 1e-6);
        assert_eq!(emphasis.gray, 255);
    }

    #[test]
    fn test_neighbours_fade_with_distance() {
        let one = month_emphasis(4, 5);
        assert!((one.scale - 1.07).abs() < 1e-6);
        assert_eq!(one.gray, 153);

        let two = month_emphasis(4, 2);
        assert!((two.scale - 1.04).abs() < 1e-6);
        assert_eq!(two.gray, 51);

        let three = month_emphasis(4, 7);
        assert!((three.scale - 1.01).abs() < 1e-5);
        assert_eq!(three.gray, 0);
    }

    #[test]
    fn test_far_months_have_no_scale_boost() {
        let far = month_emphasis(0, 11);
        assert_eq!(far.scale, 1.0);
        assert_eq!(far.gray, 0);
    }
}
