//! # Domain Module
//!
//! Contains all non-presentation logic of the subscription calendar.
//!
//! ## Module Organization
//!
//! - **calendar**: Month grid generation and due-day matching
//! - **donut_chart**: Arc layout of the monthly spend ring
//! - **subscription_service**: Subscription lookups, totals and formatting
//!
//! Every service here is a pure function of its inputs. The UI owns all
//! mutable state and calls into these services when that state changes.

pub mod calendar;
pub mod donut_chart;
pub mod subscription_service;

pub use calendar::*;
pub use donut_chart::*;
pub use subscription_service::*;
