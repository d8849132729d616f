use carousel::{Carousel, CarouselOptions};

use crate::view::WidgetState;
use crate::{Autoplay, DEFAULT_AUTOPLAY_INTERVAL_MS, Easing, SnapGlide};

/// A framework-neutral controller that wraps a `carousel::Carousel` and owns
/// the widget-lifetime concerns: the autoplay timer, pointer-driven
/// suspension and optional eased motion between snaps.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `pointer_enter` / `pointer_leave` when the pointer crosses the widget's
///   bounding region
/// - `on_prev_press` / `on_next_press` / `on_indicator_press` from the
///   rendered affordances
/// - `tick(now_ms)` each frame/timer tick, the sole source of time
///
/// Pointer and press handlers are plain synchronous calls, so a due autoplay
/// tick can never interleave with them: it fires at the next `tick`.
/// Dropping the controller (widget unmount) cancels the timer with it; no
/// update can be delivered afterwards because nothing runs without `tick`.
#[derive(Clone, Debug)]
pub struct Controller {
    engine: Carousel,
    autoplay: Autoplay,
    glide: Option<SnapGlide>,
    motion: Option<(u64, Easing)>,
}

impl Controller {
    pub fn new(options: CarouselOptions) -> Self {
        Self {
            engine: Carousel::new(options),
            autoplay: Autoplay::new(DEFAULT_AUTOPLAY_INTERVAL_MS),
            glide: None,
            motion: None,
        }
    }

    pub fn with_autoplay_interval(mut self, interval_ms: u64) -> Self {
        self.autoplay = Autoplay::new(interval_ms);
        self
    }

    pub fn from_engine(engine: Carousel) -> Self {
        Self {
            engine,
            autoplay: Autoplay::new(DEFAULT_AUTOPLAY_INTERVAL_MS),
            glide: None,
            motion: None,
        }
    }

    pub fn engine(&self) -> &Carousel {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Carousel {
        &mut self.engine
    }

    pub fn into_engine(self) -> Carousel {
        self.engine
    }

    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    /// Starts the autoplay timer.
    ///
    /// No-op for an empty or disabled engine: there is nothing to advance, so
    /// no timer is armed at all.
    pub fn start_autoplay(&mut self, now_ms: u64) {
        if self.engine.is_empty() || !self.engine.enabled() {
            return;
        }
        self.autoplay.start(now_ms);
    }

    /// Cancels the autoplay timer and any in-flight motion (widget teardown).
    pub fn stop(&mut self) {
        self.autoplay.stop();
        self.glide = None;
    }

    /// Pointer entered the widget's bounding region.
    pub fn pointer_enter(&mut self) {
        self.autoplay.suspend();
    }

    /// Pointer left the widget's bounding region.
    pub fn pointer_leave(&mut self, now_ms: u64) {
        self.autoplay.resume(now_ms);
    }

    pub fn suspended(&self) -> bool {
        self.autoplay.is_suspended()
    }

    /// Enables eased motion between snaps for subsequent navigation.
    pub fn set_motion(&mut self, duration_ms: u64, easing: Easing) {
        self.motion = Some((duration_ms, easing));
    }

    /// Navigation snaps instantly again.
    pub fn clear_motion(&mut self) {
        self.motion = None;
    }

    pub fn is_animating(&self) -> bool {
        self.glide.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.glide = None;
    }

    /// Advances the controller.
    ///
    /// - Polls the autoplay timer; a due tick advances one snap forward.
    /// - If a glide is active, samples it and returns the new physical offset
    ///   for the UI layer to apply.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        if self.autoplay.poll(now_ms) {
            let before = self.engine.selected_snap();
            self.engine.scroll_next();
            self.glide_from(before, now_ms);
        }

        let g = self.glide?;
        let off = g.sample(now_ms);
        if g.is_done(now_ms) {
            self.glide = None;
        }
        Some(off)
    }

    pub fn scroll_prev(&mut self, now_ms: u64) {
        let before = self.engine.selected_snap();
        self.engine.scroll_prev();
        self.glide_from(before, now_ms);
    }

    pub fn scroll_next(&mut self, now_ms: u64) {
        let before = self.engine.selected_snap();
        self.engine.scroll_next();
        self.glide_from(before, now_ms);
    }

    pub fn scroll_to(&mut self, index: usize, now_ms: u64) {
        let before = self.engine.selected_snap();
        self.engine.scroll_to(index);
        self.glide_from(before, now_ms);
    }

    /// "Previous" affordance pressed. Guarded by the boundary flag, matching
    /// the rendered disabled state.
    pub fn on_prev_press(&mut self, now_ms: u64) {
        if self.engine.can_scroll_prev() {
            self.scroll_prev(now_ms);
        }
    }

    /// "Next" affordance pressed.
    pub fn on_next_press(&mut self, now_ms: u64) {
        if self.engine.can_scroll_next() {
            self.scroll_next(now_ms);
        }
    }

    /// Indicator `index` pressed. Out-of-range presses are ignored by the
    /// engine's own `scroll_to` policy.
    pub fn on_indicator_press(&mut self, index: usize, now_ms: u64) {
        self.scroll_to(index, now_ms);
    }

    /// Snapshots everything the renderer needs for one frame.
    pub fn state(&self) -> WidgetState {
        WidgetState {
            engine: self.engine.engine_state(),
            suspended: self.suspended(),
        }
    }

    /// Starts (or redirects) a glide after a selection change. A glide caught
    /// mid-flight departs from its currently sampled offset.
    fn glide_from(&mut self, before: usize, now_ms: u64) {
        if self.engine.selected_snap() == before {
            return;
        }
        let Some((duration_ms, easing)) = self.motion else {
            self.glide = None;
            return;
        };
        let from_offset = match self.glide.take() {
            Some(g) => g.sample(now_ms),
            None => self.engine.snap_offset(before).unwrap_or(0),
        };
        self.glide = SnapGlide::toward(
            &self.engine,
            from_offset,
            self.engine.selected_snap(),
            now_ms,
            duration_ms,
            easing,
        );
    }
}
