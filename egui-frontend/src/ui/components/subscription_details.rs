//! # Subscription Details
//!
//! The details view: the spend ring beside a two-column list of every
//! subscription with its icon, name and monthly cost.

use eframe::egui;
use shared::Subscription;

use crate::ui::app_state::SubscriptionCalendarApp;
use crate::ui::components::icons::icon_badge;
use crate::ui::components::theme::Theme;

const LIST_COLUMNS: usize = 2;
const LIST_ITEM_HEIGHT: f32 = 40.0;

impl SubscriptionCalendarApp {
    /// Render the ring and the subscription list side by side
    pub fn render_subscription_details(&self, ui: &mut egui::Ui) {
        let theme = Theme::for_mode(self.state.theme);
        let ring_side = (ui.available_width() * 0.45).min(ui.available_height()).max(160.0);

        egui::Frame::none()
            .fill(theme.layout.panel_background)
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    ui.allocate_ui(egui::vec2(ring_side, ring_side), |ui| {
                        self.donut_renderer.render(
                            ui,
                            &self.donut_chart,
                            self.backend.ring_config(),
                            self.backend.subscriptions(),
                            &self.total_label,
                            self.state.theme,
                        );
                    });

                    ui.add_space(16.0);

                    ui.vertical(|ui| {
                        let column_width =
                            (ui.available_width() - 8.0 * (LIST_COLUMNS as f32 - 1.0)) / LIST_COLUMNS as f32;
                        for row in self.backend.subscriptions().chunks(LIST_COLUMNS) {
                            ui.horizontal(|ui| {
                                for subscription in row {
                                    self.render_list_item(ui, subscription, column_width);
                                }
                            });
                        }
                    });
                });
            });
    }

    fn render_list_item(&self, ui: &mut egui::Ui, subscription: &Subscription, width: f32) {
        let theme = Theme::for_mode(self.state.theme);

        egui::Frame::none()
            .fill(theme.ring.list_item_background)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::symmetric(8.0, 6.0))
            .show(ui, |ui| {
                ui.set_width(width - 16.0);
                ui.set_height(LIST_ITEM_HEIGHT - 12.0);
                ui.horizontal_centered(|ui| {
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
            });
    }
}
