//! # Presentation State Module
//!
//! This module holds every piece of mutable UI state for the subscription
//! calendar in one struct.
//!
//! ## Responsibilities:
//! - Selected month/year
//! - Dark/light theme
//! - Details panel, month drawer and day tooltip visibility
//!
//! ## Purpose:
//! Components never flip these fields directly. They emit a
//! `PresentationAction` and the app runs it through `PresentationState::apply`,
//! a pure reducer, so every transition is testable without a window.

use chrono::Datelike;
use shared::ThemeMode;

use crate::backend::domain::CalendarService;

/// Day tooltip state. An open tooltip always carries its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayTooltip {
    #[default]
    Closed,
    Open { day: u32 },
}

impl DayTooltip {
    pub fn selected_day(&self) -> Option<u32> {
        match self {
            DayTooltip::Closed => None,
            DayTooltip::Open { day } => Some(*day),
        }
    }
}

/// The view shown in the card body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainView {
    Calendar,
    Details,
}

/// User actions that change presentation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationAction {
    /// Month entry clicked in the selector or drawer (0-11)
    SelectMonth(u32),
    PreviousMonth,
    NextMonth,
    /// Sun/moon button clicked
    ToggleTheme,
    /// Chart/calendar icon in the header clicked
    ToggleDetails,
    /// Drawer arrow clicked (narrow layout)
    ToggleDrawer,
    /// Day cell clicked
    DayClicked(u32),
    /// Tooltip backdrop clicked or Escape pressed
    DismissTooltip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationState {
    /// Selected month, 0 = January
    pub month: u32,
    pub year: i32,
    pub theme: ThemeMode,
    pub details_open: bool,
    pub drawer_open: bool,
    pub tooltip: DayTooltip,
}

impl PresentationState {
    /// Initial state for a given month and theme
    pub fn new(month: u32, year: i32, theme: ThemeMode) -> Self {
        Self {
            month: month.min(11),
            year,
            theme,
            details_open: false,
            drawer_open: false,
            tooltip: DayTooltip::Closed,
        }
    }

    /// Initial state showing the current local month
    pub fn for_today(theme: ThemeMode) -> Self {
        let today = chrono::Local::now().date_naive();
        Self::new(today.month0(), today.year(), theme)
    }

    /// Apply one user action and return the resulting state
    pub fn apply(self, action: PresentationAction) -> Self {
        match action {
            PresentationAction::SelectMonth(month) => Self {
                month: month.min(11),
                tooltip: DayTooltip::Closed,
                ..self
            },
            PresentationAction::PreviousMonth => {
                let (month, year) = CalendarService::new().previous_month(self.month, self.year);
                Self {
                    month,
                    year,
                    tooltip: DayTooltip::Closed,
                    ..self
                }
            }
            PresentationAction::NextMonth => {
                let (month, year) = CalendarService::new().next_month(self.month, self.year);
                Self {
                    month,
                    year,
                    tooltip: DayTooltip::Closed,
                    ..self
                }
            }
            PresentationAction::ToggleTheme => Self {
                theme: self.theme.toggled(),
                ..self
            },
            PresentationAction::ToggleDetails => Self {
                details_open: !self.details_open,
                tooltip: DayTooltip::Closed,
                ..self
            },
            PresentationAction::ToggleDrawer => Self {
                drawer_open: !self.drawer_open,
                ..self
            },
            PresentationAction::DayClicked(day) => Self {
                tooltip: DayTooltip::Open { day },
                ..self
            },
            PresentationAction::DismissTooltip => Self {
                tooltip: DayTooltip::Closed,
                ..self
            },
        }
    }

    /// Exactly one of the calendar grid or the details panel is shown
    pub fn main_view(&self) -> MainView {
        if self.details_open {
            MainView::Details
        } else {
            MainView::Calendar
        }
    }

    /// The calendar grid must be rebuilt when the month or year changed
    pub fn needs_calendar_rebuild(previous: &Self, next: &Self) -> bool {
        previous.month != next.month || previous.year != next.year
    }
}
