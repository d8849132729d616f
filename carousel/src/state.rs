/// A lightweight snapshot of the engine's navigational state.
///
/// This is what `on_select`/`on_reinit` observers typically read: the selected
/// snap plus boundary flags, projected fresh from the engine at snapshot time.
/// Observers should never cache the flags independently of `selected_index`.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineState {
    pub count: usize,
    pub selected_index: usize,
    pub can_scroll_prev: bool,
    pub can_scroll_next: bool,
}
