//! # Storage Module
//!
//! File-based configuration for the subscription calendar. The app keeps no
//! other persistent state.

pub mod config_repository;

pub use config_repository::*;
