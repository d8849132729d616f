//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on navigational state and
//! snap geometry. This crate provides the small, framework-neutral pieces a
//! widget built on it needs:
//!
//! - An autoplay timer as an explicit, pollable state machine (no threads,
//!   no process-wide timers), suspended while the pointer hovers the widget
//! - A `Controller` tying engine + autoplay + wrap-aware snap glides
//!   together behind a `tick(now_ms)` loop
//! - Pure projections from engine state to indicator/nav render state
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod autoplay;
mod controller;
mod glide;
mod view;

#[cfg(test)]
mod tests;

pub use autoplay::{Autoplay, DEFAULT_AUTOPLAY_INTERVAL_MS};
pub use controller::Controller;
pub use glide::{Easing, SnapGlide};
pub use view::{
    IndicatorState, NavState, WidgetState, collect_indicators, for_each_indicator, nav_state,
};
