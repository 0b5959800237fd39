//! # Backend Module
//!
//! Contains all non-UI logic for the subscription calendar.
//!
//! - **Domain**: calendar grid, donut layout and subscription queries
//! - **Storage**: YAML configuration loading
//!
//! The backend is UI-agnostic. The egui layer holds a `Backend` and asks it
//! for derived render data whenever the presentation state changes.

pub mod domain;
pub mod storage;

use anyhow::{Context, Result};
use log::info;
use shared::{CalendarMonth, DonutChart, Subscription};

use crate::backend::domain::{CalendarService, DonutChartError, DonutChartService, RingConfig, SubscriptionService};
use crate::backend::storage::{AppConfig, ConfigRepository};

/// All services plus the loaded subscription list
#[derive(Debug, Clone)]
pub struct Backend {
    pub calendar_service: CalendarService,
    pub donut_chart_service: DonutChartService,
    pub subscription_service: SubscriptionService,
    config: AppConfig,
}

impl Backend {
    /// Initialize the backend from the configuration on disk
    pub fn new() -> Result<Self> {
        let repository = ConfigRepository::from_environment();
        info!("Loading configuration from {:?}", repository.path());
        let config = repository
            .load()
            .context("Failed to load subscription calendar configuration")?;
        Ok(Self::with_config(config))
    }

    /// Initialize the backend from an already loaded configuration
    pub fn with_config(config: AppConfig) -> Self {
        info!("Setting up domain services for {} subscriptions", config.subscriptions.len());
        Self {
            calendar_service: CalendarService::new(),
            donut_chart_service: DonutChartService::new(),
            subscription_service: SubscriptionService::new(),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.config.subscriptions
    }

    pub fn ring_config(&self) -> &RingConfig {
        &self.config.ring
    }

    /// Grid for a month (0-11) of a year
    pub fn calendar_month(&self, month: u32, year: i32) -> CalendarMonth {
        self.calendar_service.build(month as i32, year, self.subscriptions())
    }

    /// Spend ring for the configured subscriptions
    pub fn donut_chart(&self) -> Result<DonutChart, DonutChartError> {
        self.donut_chart_service
            .layout_chart(self.subscriptions(), &self.config.ring)
    }

    pub fn total_monthly_spend(&self) -> f64 {
        self.subscription_service.total_monthly_spend(self.subscriptions())
    }

    pub fn subscriptions_due_on(&self, day: u32) -> Vec<&Subscription> {
        self.subscription_service.due_on_day(self.subscriptions(), day)
    }

    pub fn format_cost(&self, amount: f64) -> String {
        self.subscription_service.format_cost(amount)
    }
}
