//! # UI Components Module
//!
//! This module organizes all UI components for the subscription calendar.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `calendar_renderer` - Month grid with weekday header and day cells
//! - `day_tooltip` - Overlay listing subscriptions due on a clicked day
//! - `donut_renderer` - Monthly spend ring painted from the arc layout
//! - `header` - Month title, monthly spend and view/theme toggles
//! - `icons` - Subscription icon badges
//! - `month_selector` - Month column and the narrow-window drawer
//! - `styling` - Global style setup, wallpaper and card drawing
//! - `subscription_details` - Ring plus subscription list view
//! - `theme` - Dark and light palettes
//!
//! ## Architecture:
//! Components read from `SubscriptionCalendarApp` and return a
//! `PresentationAction` instead of changing state themselves.

pub mod calendar_renderer;
pub mod day_tooltip;
pub mod donut_renderer;
pub mod header;
pub mod icons;
pub mod month_selector;
pub mod styling;
pub mod subscription_details;
pub mod theme;

pub use calendar_renderer::render_calendar_grid;
pub use donut_renderer::DonutRenderer;
pub use month_selector::{render_drawer, render_drawer_toggle, render_month_list, DRAWER_BREAKPOINT};
pub use styling::{draw_card_container, draw_wallpaper, setup_calendar_style};
