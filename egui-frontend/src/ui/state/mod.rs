//! # State Module
//!
//! UI state for the subscription calendar, kept separate from rendering so it
//! can be unit tested.

pub mod presentation_state;

pub use presentation_state::*;
