//! # App Coordinator Module
//!
//! This module contains the main update loop and the single place where
//! presentation state changes.
//!
//! ## Key Functions:
//! - `dispatch()` - Run an action through the reducer and refresh derived data
//! - `eframe::App::update()` - Main application update loop
//!
//! ## Application Flow:
//! 1. Apply the theme's style and draw the wallpaper
//! 2. Handle global input (Escape, arrow keys)
//! 3. Render the card: header, then calendar grid or details view
//! 4. Render the month column on wide windows, the drawer on narrow ones
//! 5. Render the day tooltip on top
//! 6. Dispatch whatever action the components returned

use eframe::egui;
use log::{debug, info};

use crate::ui::app_state::SubscriptionCalendarApp;
use crate::ui::components::header::HEADER_HEIGHT;
use crate::ui::components::*;
use crate::ui::state::{MainView, PresentationAction, PresentationState};

const CARD_MARGIN: f32 = 24.0;
const CARD_ROUNDING: f32 = 16.0;
const MONTH_COLUMN_WIDTH: f32 = 160.0;

impl SubscriptionCalendarApp {
    /// Apply `action` and rebuild whatever derived data it invalidated
    pub fn dispatch(&mut self, action: PresentationAction) {
        let previous = self.state;
        let next = previous.apply(action);
        debug!("🎛️ {:?}: {:?} -> {:?}", action, previous, next);

        if PresentationState::needs_calendar_rebuild(&previous, &next) {
            self.calendar_month = self.backend.calendar_month(next.month, next.year);
            info!(
                "📅 Showing {} {}",
                self.backend.calendar_service.month_name(next.month),
                next.year
            );
        }

        self.state = next;
    }

    /// Keyboard shortcuts: Escape closes the tooltip, arrows change month
    fn handle_keyboard(&self, ctx: &egui::Context) -> Option<PresentationAction> {
        ctx.input(|input| {
            if input.key_pressed(egui::Key::Escape) && self.state.tooltip.selected_day().is_some() {
                Some(PresentationAction::DismissTooltip)
            } else if input.key_pressed(egui::Key::ArrowLeft) {
                Some(PresentationAction::PreviousMonth)
            } else if input.key_pressed(egui::Key::ArrowRight) {
                Some(PresentationAction::NextMonth)
            } else {
                None
            }
        })
    }

    /// Header plus the active main view inside the card
    fn render_card(&self, ui: &mut egui::Ui, card_rect: egui::Rect) -> Option<PresentationAction> {
        draw_card_container(ui, card_rect, CARD_ROUNDING, self.state.theme);

        let inner = card_rect.shrink(16.0);
        let header_rect = egui::Rect::from_min_size(inner.min, egui::vec2(inner.width(), HEADER_HEIGHT));
        let body_rect = egui::Rect::from_min_max(egui::pos2(inner.min.x, header_rect.max.y), inner.max);

        let mut action = ui.allocate_ui_at_rect(header_rect, |ui| self.render_header(ui)).inner;

        ui.allocate_ui_at_rect(body_rect, |ui| match self.state.main_view() {
            MainView::Calendar => {
                let clicked = render_calendar_grid(
                    ui,
                    &self.calendar_month,
                    self.state.tooltip.selected_day(),
                    self.state.theme,
                );
                action = action.or(clicked);
            }
            MainView::Details => self.render_subscription_details(ui),
        });

        action
    }
}

impl eframe::App for SubscriptionCalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_calendar_style(ctx, self.state.theme);

        let mut actions: Vec<PresentationAction> = self.handle_keyboard(ctx).into_iter().collect();

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let full_rect = ui.max_rect();
                draw_wallpaper(ui, full_rect, self.state.theme);

                let names = self.backend.calendar_service.month_names();
                let wide = full_rect.width() >= DRAWER_BREAKPOINT;
                let content_rect = full_rect.shrink(CARD_MARGIN);

                let card_rect = if wide {
                    egui::Rect::from_min_max(
                        content_rect.min,
                        egui::pos2(content_rect.max.x - MONTH_COLUMN_WIDTH, content_rect.max.y),
                    )
                } else {
                    content_rect
                };

                actions.extend(self.render_card(ui, card_rect));

                if wide {
                    let column_rect = egui::Rect::from_min_max(
                        egui::pos2(card_rect.max.x + CARD_MARGIN, content_rect.min.y),
                        content_rect.max,
                    );
                    let clicked = ui
                        .allocate_ui_at_rect(column_rect, |ui| {
                            ui.vertical_centered(|ui| render_month_list(ui, names, self.state.month, 18.0))
                                .inner
                        })
                        .inner;
                    actions.extend(clicked);
                } else {
                    let button_rect = egui::Rect::from_min_size(
                        full_rect.max - egui::vec2(CARD_MARGIN + 48.0, CARD_MARGIN + 48.0),
                        egui::vec2(48.0, 48.0),
                    );
                    let toggled = ui
                        .allocate_ui_at_rect(button_rect, |ui| {
                            render_drawer_toggle(ui, self.state.drawer_open, self.state.theme)
                        })
                        .inner;
                    actions.extend(toggled);

                    if self.state.drawer_open {
                        let anchor = egui::pos2(button_rect.max.x, button_rect.min.y - 8.0);
                        actions.extend(render_drawer(ctx, anchor, names, self.state.month, self.state.theme));
                    }
                }
            });

        actions.extend(self.render_day_tooltip(ctx));

        for action in actions {
            self.dispatch(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::AppConfig;
    use crate::backend::Backend;
    use crate::ui::state::DayTooltip;
    use shared::ThemeMode;

    fn app_for(month: u32, year: i32) -> SubscriptionCalendarApp {
        let backend = Backend::with_config(AppConfig::default());
        SubscriptionCalendarApp::with_state(backend, PresentationState::new(month, year, ThemeMode::Dark))
    }

    #[test]
    fn test_dispatch_rebuilds_grid_on_month_change() {
        let mut app = app_for(0, 2024);
        assert_eq!(app.calendar_month.days_in_month, 31);

        app.dispatch(PresentationAction::SelectMonth(1));
        assert_eq!(app.calendar_month.month, 1);
        assert_eq!(app.calendar_month.days_in_month, 29);

        app.dispatch(PresentationAction::PreviousMonth);
        app.dispatch(PresentationAction::PreviousMonth);
        assert_eq!((app.calendar_month.month, app.calendar_month.year), (11, 2023));
    }

    #[test]
    fn test_dispatch_keeps_grid_for_other_actions() {
        let mut app = app_for(5, 2025);
        let before = app.calendar_month.clone();

        app.dispatch(PresentationAction::ToggleTheme);
        app.dispatch(PresentationAction::DayClicked(2));
        assert_eq!(app.calendar_month, before);
        assert_eq!(app.state.theme, ThemeMode::Light);
        assert_eq!(app.state.tooltip, DayTooltip::Open { day: 2 });

        app.dispatch(PresentationAction::ToggleDetails);
        assert_eq!(app.state.main_view(), MainView::Details);
        assert_eq!(app.state.tooltip, DayTooltip::Closed);
    }

    #[test]
    fn test_app_caches_ring_and_total() {
        let app = app_for(0, 2025);
        assert!(app.donut_chart.is_ok());
        assert_eq!(app.total_label, "$119.45");
    }
}
