//! # Header Module
//!
//! This module renders the card header: the selected month and year, the
//! monthly spend total and the buttons that switch views and themes.
//!
//! ## Key Functions:
//! - `render_header()` - Title, total and action buttons
//!
//! ## Layout:
//! - Left: `<MONTH> <YEAR>` with previous/next arrows, `Monthly Spend: $x` below
//! - Right: theme toggle (sun/moon) and the details toggle (chart/calendar)

use eframe::egui;

use crate::ui::app_state::SubscriptionCalendarApp;
use crate::ui::components::theme::Theme;
use crate::ui::state::{MainView, PresentationAction};

/// Header height including its inner margin
pub const HEADER_HEIGHT: f32 = 72.0;

impl SubscriptionCalendarApp {
    /// Render the header. Returns the action of a clicked button.
    pub fn render_header(&self, ui: &mut egui::Ui) -> Option<PresentationAction> {
        let theme = Theme::for_mode(self.state.theme);
        let mut action = None;

        let title = format!(
            "{} {}",
            self.backend.calendar_service.month_name(self.state.month),
            self.state.year
        );

        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(16.0, 10.0))
            .show(ui, |ui| {
                ui.set_min_height(HEADER_HEIGHT - 20.0);
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            if header_button(ui, "⏴", theme).clicked() {
                                action = Some(PresentationAction::PreviousMonth);
                            }
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(&title)
                                        .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                                        .strong()
                                        .color(theme.typography.heading),
                                )
                                .selectable(false),
                            );
                            if header_button(ui, "⏵", theme).clicked() {
                                action = Some(PresentationAction::NextMonth);
                            }
                        });

                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!("Monthly Spend: {}", self.total_label))
                                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                                    .color(theme.typography.secondary),
                            )
                            .selectable(false),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let toggle = egui::RichText::new(Theme::toggle_glyph(self.state.theme))
                            .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                            .color(theme.toggle.icon);
                        if ui
                            .add(egui::Button::new(toggle).frame(false))
                            .on_hover_text("Switch theme")
                            .clicked()
                        {
                            action = Some(PresentationAction::ToggleTheme);
                        }

                        ui.add_space(12.0);

                        // The icon shows the view the button switches to
                        let (glyph, hint) = match self.state.main_view() {
                            MainView::Calendar => ("📊", "Show spend breakdown"),
                            MainView::Details => ("📅", "Show calendar"),
                        };
                        if header_button(ui, glyph, theme).on_hover_text(hint).clicked() {
                            action = Some(PresentationAction::ToggleDetails);
                        }
                    });
                });
            });

        action
    }
}

fn header_button(ui: &mut egui::Ui, glyph: &str, theme: &Theme) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(glyph)
                .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                .color(theme.typography.primary),
        )
        .frame(false),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}
