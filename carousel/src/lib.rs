//! A headless carousel engine inspired by Embla Carousel.
//!
//! For adapter-level utilities (autoplay, pointer-driven suspension, the
//! indicator-strip projection), see the `carousel-adapter` crate.
//!
//! This crate owns the navigational core of a content rotator: the selected
//! snap index, snap-point offsets computed from slide geometry, boundary
//! reachability, and `select`/`reinit` notifications that keep derived UI
//! state consistent.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the slide count and slide sizes (plus viewport size, for snap offsets)
//! - navigation commands (prev/next/goto) from its input handling
//! - re-initialization calls when its layout assumptions change
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod options;
mod snaps;
mod state;
mod types;


pub use engine::{Carousel, boundary_flags};
pub use options::{CarouselOptions, OnReinitCallback, OnSelectCallback};
pub use state::EngineState;
pub use types::{ScrollDirection, Slide, SnapAlign};
