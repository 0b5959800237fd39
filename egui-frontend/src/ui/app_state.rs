//! # App State Module
//!
//! This module defines the central application struct and its initialization.
//!
//! ## Key Types:
//! - `SubscriptionCalendarApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Load configuration, build the initial grid and ring
//!
//! ## State Management:
//! User-facing state lives in `PresentationState` and only changes through
//! `dispatch()`. The grid, the ring and the formatted total are derived from
//! it and the backend, and cached here so the per-frame render never
//! recomputes them.

use log::info;
use shared::{CalendarMonth, DonutChart};

use crate::backend::domain::DonutChartError;
use crate::backend::Backend;
use crate::ui::components::DonutRenderer;
use crate::ui::state::PresentationState;

/// Main application struct for the egui subscription calendar
pub struct SubscriptionCalendarApp {
    pub backend: Backend,

    // Presentation state, changed only through dispatch()
    pub state: PresentationState,

    // Derived render data
    pub calendar_month: CalendarMonth,
    pub donut_chart: Result<DonutChart, DonutChartError>,
    pub total_label: String,

    pub donut_renderer: DonutRenderer,
}

impl SubscriptionCalendarApp {
    /// Create the app from the configuration on disk
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing SubscriptionCalendarApp");

        let backend = Backend::new()?;
        let app = Self::with_backend(backend);

        crate::ui::components::setup_calendar_style(&cc.egui_ctx, app.state.theme);
        Ok(app)
    }

    /// Create the app around an existing backend, starting on today's month
    pub fn with_backend(backend: Backend) -> Self {
        let state = PresentationState::for_today(backend.config().theme);
        Self::with_state(backend, state)
    }

    /// Create the app around an existing backend and presentation state
    pub fn with_state(backend: Backend, state: PresentationState) -> Self {
        let calendar_month = backend.calendar_month(state.month, state.year);

        let donut_chart = backend.donut_chart();
        if let Err(e) = &donut_chart {
            log::error!("Spend ring unavailable: {}", e);
        }

        let total_label = backend.format_cost(backend.total_monthly_spend());
        info!(
            "📅 Starting on {} {} with monthly spend {}",
            backend.calendar_service.month_name(state.month),
            state.year,
            total_label
        );

        Self {
            backend,
            state,
            calendar_month,
            donut_chart,
            total_label,
            donut_renderer: DonutRenderer::new(),
        }
    }
}
