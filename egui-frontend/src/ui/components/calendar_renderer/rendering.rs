//! # Calendar Renderer Module
//!
//! Draws the month grid: a row of weekday pills followed by day cells in a
//! Sunday-first, seven column layout. Blank cells pad the start of the month.
//!
//! ## Key Functions:
//! - `render_calendar_grid()` - Render a whole `CalendarMonth`, returns a click action
//! - `render_weekday_header()` - The Sun..Sat pill row
//! - `render_day_cell()` - One day with its primary subscription badge
//!
//! ## Purpose:
//! Cells only display what the `CalendarMonth` already carries. A click on a
//! day never mutates state here; it comes back as `PresentationAction::DayClicked`.

use eframe::egui;
use shared::{CalendarCell, CalendarMonth, ThemeMode};

use super::layout::*;
use crate::backend::domain::WEEKDAY_LABELS;
use crate::ui::components::icons::{paint_icon_badge, resolve_icon};
use crate::ui::components::theme::Theme;
use crate::ui::state::PresentationAction;

/// Render the grid for `month`. `selected_day` is outlined while its tooltip is open.
pub fn render_calendar_grid(
    ui: &mut egui::Ui,
    month: &CalendarMonth,
    selected_day: Option<u32>,
    mode: ThemeMode,
) -> Option<PresentationAction> {
    let cell_size = cell_size_for_width(ui.available_width());
    let rows = row_count(month.cells.len());
    let size = egui::vec2(grid_width(cell_size), grid_height(rows, cell_size));

    // Centre the grid horizontally in the card body
    let (slot, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), size.y), egui::Sense::hover());
    let grid_rect = egui::Rect::from_min_size(egui::pos2(slot.center().x - size.x / 2.0, slot.min.y), size);

    render_weekday_header(ui, grid_rect, cell_size, mode);

    let cells_top = grid_rect.min.y + WEEKDAY_HEADER_HEIGHT + CALENDAR_CARD_SPACING * 2.0;
    let mut action = None;

    for (index, cell) in month.cells.iter().enumerate() {
        // Leading blanks stay empty
        let Some(day) = cell.day_number else {
            continue;
        };
        let (row, col) = grid_position(index);
        let min = egui::pos2(
            grid_rect.min.x + col as f32 * (cell_size + CALENDAR_CARD_SPACING),
            cells_top + row as f32 * (cell_size + CALENDAR_CARD_SPACING),
        );
        let rect = egui::Rect::from_min_size(min, egui::vec2(cell_size, cell_size));

        if let Some(clicked) = render_day_cell(ui, rect, day, cell, selected_day == Some(day), mode) {
            action = Some(clicked);
        }
    }

    action
}

/// Render the Sun..Sat header pills along the top of `grid_rect`
pub fn render_weekday_header(ui: &mut egui::Ui, grid_rect: egui::Rect, cell_size: f32, mode: ThemeMode) {
    let theme = Theme::for_mode(mode);
    let painter = ui.painter();

    for (col, label) in WEEKDAY_LABELS.iter().enumerate() {
        let min = egui::pos2(grid_rect.min.x + col as f32 * (cell_size + CALENDAR_CARD_SPACING), grid_rect.min.y);
        let rect = egui::Rect::from_min_size(min, egui::vec2(cell_size, WEEKDAY_HEADER_HEIGHT));
        painter.rect_filled(
            rect,
            egui::Rounding::same(WEEKDAY_HEADER_HEIGHT / 2.0),
            theme.calendar.header_background,
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            *label,
            egui::FontId::new(12.0, egui::FontFamily::Proportional),
            theme.calendar.header_text,
        );
    }
}

/// Render one day cell. Returns `DayClicked` when the cell is clicked.
pub fn render_day_cell(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    day: u32,
    cell: &CalendarCell,
    is_selected: bool,
    mode: ThemeMode,
) -> Option<PresentationAction> {
    let theme = Theme::for_mode(mode);
    let cell_size = rect.width();

    let response = ui.interact(rect, ui.id().with(("calendar_day", day)), egui::Sense::click());
    let painter = ui.painter();

    let background = if response.hovered() {
        theme.calendar.day_hover_background
    } else {
        theme.calendar.day_background
    };
    painter.rect_filled(rect, egui::Rounding::same(8.0), background);

    if is_selected {
        painter.rect_stroke(
            rect,
            egui::Rounding::same(8.0),
            egui::Stroke::new(2.0, theme.calendar.selected_border),
        );
    }

    // Badge sits in the upper part of the cell, day number along the bottom
    if let Some(primary) = cell.primary_subscription() {
        let diameter = badge_diameter(cell_size);
        let badge_center = egui::pos2(rect.center().x, rect.top() + cell_size * 0.38);
        paint_icon_badge(painter, badge_center, diameter, &resolve_icon(primary));

        if cell.has_overflow() {
            painter.text(
                egui::pos2(rect.right() - 6.0, rect.top() + 4.0),
                egui::Align2::RIGHT_TOP,
                "...",
                egui::FontId::new(11.0, egui::FontFamily::Proportional),
                theme.typography.secondary,
            );
        }
    }

    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 6.0),
        egui::Align2::CENTER_BOTTOM,
        day.to_string(),
        egui::FontId::new(day_number_font_size(cell_size), egui::FontFamily::Proportional),
        theme.calendar.day_text,
    );

    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
    if response.clicked() {
        log::info!("📅 Day {} clicked ({} due)", day, cell.subscriptions_due.len());
        Some(PresentationAction::DayClicked(day))
    } else {
        None
    }
}
