//! # Styling Module
//!
//! Global egui style setup and the shared drawing helpers for backgrounds and
//! cards.
//!
//! ## Key Functions:
//! - `setup_calendar_style()` - Configure global egui styling for a theme mode
//! - `draw_wallpaper()` - Solid background with a 40px grid
//! - `draw_card_container()` - Rounded card with a subtle shadow

use eframe::egui;
use shared::ThemeMode;

use super::theme::Theme;

/// Spacing of the wallpaper grid lines, in points
pub const WALLPAPER_GRID_SPACING: f32 = 40.0;

/// Setup UI styling for the entire application
pub fn setup_calendar_style(ctx: &egui::Context, mode: ThemeMode) {
    let theme = Theme::for_mode(mode);

    ctx.set_visuals(if mode.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        // Panels are transparent so the wallpaper shows through
        style.visuals.window_fill = egui::Color32::TRANSPARENT;
        style.visuals.panel_fill = egui::Color32::TRANSPARENT;
        style.visuals.override_text_color = Some(theme.typography.primary);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(28.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(18.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);
    });
}

/// Draw the wallpaper: base fill with thin grid lines
pub fn draw_wallpaper(ui: &mut egui::Ui, rect: egui::Rect, mode: ThemeMode) {
    let theme = Theme::for_mode(mode);
    let painter = ui.painter();

    painter.rect_filled(rect, egui::Rounding::ZERO, theme.layout.wallpaper_base);

    let stroke = egui::Stroke::new(1.0, theme.layout.wallpaper_grid);

    let mut x = rect.left();
    while x <= rect.right() {
        painter.vline(x, rect.y_range(), stroke);
        x += WALLPAPER_GRID_SPACING;
    }

    let mut y = rect.top();
    while y <= rect.bottom() {
        painter.hline(rect.x_range(), y, stroke);
        y += WALLPAPER_GRID_SPACING;
    }
}

/// Draw a card container with background and shadow
pub fn draw_card_container(ui: &mut egui::Ui, rect: egui::Rect, rounding: f32, mode: ThemeMode) {
    let theme = Theme::for_mode(mode);
    let painter = ui.painter();

    // Shadow first, offset slightly
    let shadow_rect = egui::Rect::from_min_size(rect.min + egui::vec2(2.0, 2.0), rect.size());
    painter.rect_filled(
        shadow_rect,
        egui::Rounding::same(rounding),
        egui::Color32::from_rgba_premultiplied(0, 0, 0, 40),
    );

    painter.rect_filled(rect, egui::Rounding::same(rounding), theme.layout.card_background);
    painter.rect_stroke(
        rect,
        egui::Rounding::same(rounding),
        egui::Stroke::new(1.0, theme.layout.card_border),
    );
}
