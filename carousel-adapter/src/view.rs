//! Pure projections from engine state to renderable widget state.
//!
//! Everything here is a function of [`EngineState`] alone: the renderer holds
//! no navigational state of its own, so it cannot drift out of sync with the
//! engine. Commands flow back through the controller's press handlers.

use alloc::vec::Vec;

use carousel::EngineState;

/// A combined snapshot of engine state + autoplay suspension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidgetState {
    pub engine: EngineState,
    /// `true` while the pointer hovers the widget and autoplay is paused.
    pub suspended: bool,
}

/// Render state for one position indicator ("dot").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorState {
    pub index: usize,
    /// Exactly one indicator is active per render: the selected snap's.
    pub active: bool,
}

/// Render state for the prev/next affordances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavState {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Projects the prev/next affordance state from the boundary flags.
pub fn nav_state(engine: &EngineState) -> NavState {
    NavState {
        prev_enabled: engine.can_scroll_prev,
        next_enabled: engine.can_scroll_next,
    }
}

/// Visits one indicator per item, in order.
pub fn for_each_indicator(engine: &EngineState, mut f: impl FnMut(IndicatorState)) {
    for index in 0..engine.count {
        f(IndicatorState {
            index,
            active: index == engine.selected_index,
        });
    }
}

/// Collects indicator states into `out` (clears `out` first).
pub fn collect_indicators(engine: &EngineState, out: &mut Vec<IndicatorState>) {
    out.clear();
    for_each_indicator(engine, |i| out.push(i));
}
