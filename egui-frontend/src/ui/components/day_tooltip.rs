//! # Day Tooltip
//!
//! Centred overlay listing the subscriptions due on the clicked day. A
//! dimmed backdrop covers the window; clicking it dismisses the tooltip.

use eframe::egui;

use crate::ui::app_state::SubscriptionCalendarApp;
use crate::ui::components::icons::icon_badge;
use crate::ui::components::theme::Theme;
use crate::ui::state::{DayTooltip, PresentationAction};

const TOOLTIP_WIDTH: f32 = 280.0;

impl SubscriptionCalendarApp {
    /// Render the tooltip if one is open. Returns `DismissTooltip` on a backdrop click.
    pub fn render_day_tooltip(&self, ctx: &egui::Context) -> Option<PresentationAction> {
        let DayTooltip::Open { day } = self.state.tooltip else {
            return None;
        };
        let theme = Theme::for_mode(self.state.theme);
        let mut action = None;

        let screen_rect = ctx.screen_rect();
        egui::Area::new(egui::Id::new("day_tooltip_backdrop"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen_rect.min)
            .show(ctx, |ui| {
                let (rect, response) = ui.allocate_exact_size(screen_rect.size(), egui::Sense::click());
                ui.painter().rect_filled(rect, egui::Rounding::ZERO, theme.layout.backdrop);
                if response.clicked() {
                    action = Some(PresentationAction::DismissTooltip);
                }
            });

        let title = format!("{} {}", self.backend.calendar_service.month_name(self.state.month), day);
        let due = self.backend.subscriptions_due_on(day);

        egui::Area::new(egui::Id::new("day_tooltip"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(theme.layout.tooltip_background)
                    .rounding(egui::Rounding::same(12.0))
                    .inner_margin(egui::Margin::same(16.0))
                    .show(ui, |ui| {
                        ui.set_width(TOOLTIP_WIDTH);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(title)
                                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                                    .strong()
                                    .color(theme.typography.heading),
                            )
                            .selectable(false),
                        );
                        ui.add_space(8.0);

                        if due.is_empty() {
                            ui.label(
                                egui::RichText::new("No subscriptions due on this day")
                                    .color(theme.typography.secondary),
                            );
                            return;
                        }

                        for subscription in due {
                            ui.horizontal(|ui| {
                                icon_badge(ui, 24.0, subscription);
                                ui.label(egui::RichText::new(&subscription.name).color(theme.typography.primary));
                                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                    ui.label(
                                        egui::RichText::new(self.backend.format_cost(subscription.cost))
                                            .strong()
                                            .color(theme.typography.primary),
                                    );
                                });
                            });
                        }
                    });
            });

        action
    }
}
