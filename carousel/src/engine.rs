use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::cmp;

use crate::snaps;
use crate::{CarouselOptions, EngineState, ScrollDirection, Slide, SnapAlign};

/// Derives the boundary flags from navigational state.
///
/// This is a pure projection: callers compute it fresh on every notification
/// instead of caching the flags next to the state they derive from.
///
/// - An empty carousel has no reachable neighbors in either direction.
/// - A looping carousel has no boundary, so both flags are structurally `true`
///   even when `count == 1` and navigation is a behavioral no-op.
pub fn boundary_flags(selected: usize, count: usize, looping: bool) -> (bool, bool) {
    if count == 0 {
        return (false, false);
    }
    if looping {
        return (true, true);
    }
    (selected > 0, selected + 1 < count)
}

/// A headless carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it with navigation commands and layout updates.
/// - Selection and layout changes are exposed via the `on_select`/`on_reinit`
///   callbacks; derived UI state is read back through [`Self::engine_state`].
///
/// For autoplay, pointer-driven suspension and the indicator-strip
/// projection, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    selected: usize,
    previous: usize,
    direction: Option<ScrollDirection>,

    sizes: Vec<u32>,
    measured: Vec<Option<u32>>,
    snaps: Vec<u64>,

    notify_depth: Cell<usize>,
    select_pending: Cell<bool>,
    reinit_pending: Cell<bool>,
}

impl Carousel {
    /// Creates a new engine from options.
    ///
    /// `options.start_index` is clamped into range and selected without firing
    /// `on_select`.
    pub fn new(options: CarouselOptions) -> Self {
        cdebug!(
            count = options.count,
            looping = options.looping,
            enabled = options.enabled,
            "Carousel::new"
        );
        let mut c = Self {
            selected: 0,
            previous: 0,
            direction: None,
            sizes: Vec::new(),
            measured: Vec::new(),
            snaps: Vec::new(),
            options,
            notify_depth: Cell::new(0),
            select_pending: Cell::new(false),
            reinit_pending: Cell::new(false),
        };
        c.rebuild_layout();
        c.reset_to_start();
        c
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn is_empty(&self) -> bool {
        self.options.count == 0
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    /// The currently selected snap index.
    ///
    /// Always a valid index while `count > 0`; reads `0` for an empty
    /// carousel, where no position exists.
    pub fn selected_snap(&self) -> usize {
        self.selected
    }

    /// The snap index selected before the most recent selection change.
    pub fn previous_snap(&self) -> usize {
        self.previous
    }

    /// Direction of the most recent selection change, if any.
    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    pub fn can_scroll_prev(&self) -> bool {
        if !self.options.enabled {
            return false;
        }
        boundary_flags(self.selected, self.options.count, self.options.looping).0
    }

    pub fn can_scroll_next(&self) -> bool {
        if !self.options.enabled {
            return false;
        }
        boundary_flags(self.selected, self.options.count, self.options.looping).1
    }

    /// Snapshots the selected snap plus freshly derived boundary flags.
    pub fn engine_state(&self) -> EngineState {
        EngineState {
            count: self.options.count,
            selected_index: self.selected,
            can_scroll_prev: self.can_scroll_prev(),
            can_scroll_next: self.can_scroll_next(),
        }
    }

    /// Moves the selection one snap backward, wrapping when looping.
    ///
    /// No-op (no state change, no event) at the first snap of a non-looping
    /// carousel, and for an empty or disabled engine.
    pub fn scroll_prev(&mut self) {
        let Some(target) = self.prev_target() else {
            return;
        };
        self.select(target, ScrollDirection::Backward);
    }

    /// Moves the selection one snap forward, wrapping when looping.
    ///
    /// No-op (no state change, no event) at the last snap of a non-looping
    /// carousel, and for an empty or disabled engine.
    pub fn scroll_next(&mut self) {
        let Some(target) = self.next_target() else {
            return;
        };
        self.select(target, ScrollDirection::Forward);
    }

    /// Selects `index` directly.
    ///
    /// Out-of-range indexes are ignored: no state mutation, no event. This is
    /// a caller-contract violation handled defensively rather than surfaced.
    pub fn scroll_to(&mut self, index: usize) {
        if !self.options.enabled {
            return;
        }
        if index >= self.options.count {
            cwarn!(
                index,
                count = self.options.count,
                "scroll_to: out-of-range index ignored"
            );
            return;
        }
        let direction = match index.cmp(&self.selected) {
            cmp::Ordering::Greater => ScrollDirection::Forward,
            cmp::Ordering::Less => ScrollDirection::Backward,
            cmp::Ordering::Equal => return,
        };
        self.select(index, direction);
    }

    fn prev_target(&self) -> Option<usize> {
        if !self.options.enabled || self.options.count == 0 {
            return None;
        }
        if self.selected > 0 {
            Some(self.selected - 1)
        } else if self.options.looping {
            Some(self.options.count - 1)
        } else {
            None
        }
    }

    fn next_target(&self) -> Option<usize> {
        if !self.options.enabled || self.options.count == 0 {
            return None;
        }
        if self.selected + 1 < self.options.count {
            Some(self.selected + 1)
        } else if self.options.looping {
            Some(0)
        } else {
            None
        }
    }

    fn select(&mut self, index: usize, direction: ScrollDirection) {
        if index == self.selected {
            return;
        }
        self.previous = self.selected;
        self.selected = index;
        self.direction = Some(direction);
        ctrace!(
            selected = self.selected,
            previous = self.previous,
            "select"
        );
        self.notify_select();
    }

    /// Recomputes slide sizes, snap offsets and the selection clamp from the
    /// current options.
    ///
    /// Fires `on_reinit` once, after the selection has been clamped back into
    /// range; fires `on_select` as well if the clamp moved the selection. This
    /// is the entry point for "the layout changed under me" events such as a
    /// viewport resize reported by the UI layer.
    pub fn reinit(&mut self) {
        cdebug!(count = self.options.count, "reinit");
        self.batch_update(|c| {
            c.rebuild_layout();
            c.clamp_selection();
            c.notify_reinit();
        });
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.reinit();
    }

    pub fn set_viewport_size(&mut self, viewport: u32) {
        if self.options.viewport == viewport {
            return;
        }
        self.options.viewport = viewport;
        self.reinit();
    }

    pub fn set_gap(&mut self, gap: u32) {
        if self.options.gap == gap {
            return;
        }
        self.options.gap = gap;
        self.reinit();
    }

    pub fn set_align(&mut self, align: SnapAlign) {
        if self.options.align == align {
            return;
        }
        self.options.align = align;
        self.reinit();
    }

    pub fn set_looping(&mut self, looping: bool) {
        if self.options.looping == looping {
            return;
        }
        self.options.looping = looping;
        // Boundary flags and snap containment both depend on loop mode.
        self.reinit();
    }

    /// Replaces the slide size source.
    ///
    /// Measured sizes recorded via [`Self::measure`] keep overriding the new
    /// estimates until [`Self::reset_measurements`].
    pub fn set_slide_size(&mut self, slide_size: impl Fn(usize) -> u32 + Send + Sync + 'static) {
        self.options.slide_size = Arc::new(slide_size);
        self.reinit();
    }

    /// Records the measured size of slide `index`, overriding the
    /// `slide_size` estimate for that index until measurements are reset.
    ///
    /// Out-of-range indexes are ignored. A measurement matching the slide's
    /// current size only pins it as measured; nothing fires.
    pub fn measure(&mut self, index: usize, size: u32) {
        if index >= self.options.count {
            return;
        }
        if self.sizes[index] == size {
            self.measured[index] = Some(size);
            return;
        }
        ctrace!(index, size, "measure");
        self.measured[index] = Some(size);
        self.reinit();
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().flatten().is_some()
    }

    /// Drops all measured sizes and falls back to the `slide_size` estimates.
    pub fn reset_measurements(&mut self) {
        if self.measured.iter().all(|m| m.is_none()) {
            return;
        }
        for m in &mut self.measured {
            *m = None;
        }
        self.reinit();
    }

    pub fn set_on_select(&mut self, on_select: Option<impl Fn(&Carousel) + Send + Sync + 'static>) {
        // Subscribing is not a state change: new observers sync by reading
        // `engine_state()` directly, so no event fires here.
        self.options.on_select = on_select.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_reinit(&mut self, on_reinit: Option<impl Fn(&Carousel) + Send + Sync + 'static>) {
        self.options.on_reinit = on_reinit.map(|f| Arc::new(f) as _);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        if enabled {
            self.reset_to_start();
            self.reinit();
        } else {
            // A disabled engine is silent: keep state frozen, fire nothing.
            self.direction = None;
        }
    }

    pub fn set_options(&mut self, options: CarouselOptions) {
        let was_enabled = self.options.enabled;
        self.options = options;
        ctrace!(
            count = self.options.count,
            looping = self.options.looping,
            enabled = self.options.enabled,
            "set_options"
        );
        if !self.options.enabled {
            self.direction = None;
            self.rebuild_layout();
            self.clamp_selection_silent();
            return;
        }
        if !was_enabled {
            self.reset_to_start();
        }
        self.reinit();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Batches multiple updates into at most one `on_reinit` and one
    /// `on_select` notification, delivered in that order.
    ///
    /// Recommended for adapters applying several changes per frame (say a
    /// resize plus a navigation) when the callbacks drive rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 {
            let reinit = self.reinit_pending.replace(false);
            let select = self.select_pending.replace(false);
            if reinit {
                self.notify_reinit_now();
            }
            if select {
                self.notify_select_now();
            }
        }
    }

    /// The physical offset slide `index` snaps to, or `None` when out of
    /// range or disabled.
    pub fn snap_offset(&self, index: usize) -> Option<u64> {
        if !self.options.enabled {
            return None;
        }
        self.snaps.get(index).copied()
    }

    /// The physical offset of the selected snap.
    pub fn scroll_offset(&self) -> u64 {
        self.snap_offset(self.selected).unwrap_or(0)
    }

    /// The largest snap offset.
    pub fn max_snap_offset(&self) -> u64 {
        if !self.options.enabled {
            return 0;
        }
        self.snaps.iter().copied().max().unwrap_or(0)
    }

    /// Selected position as a fraction of the scrollable range, in `0.0..=1.0`.
    pub fn scroll_progress(&self) -> f32 {
        let max = self.max_snap_offset();
        if max == 0 {
            return 0.0;
        }
        self.scroll_offset() as f32 / max as f32
    }

    /// Total content extent in the scroll axis (sizes plus interior gaps).
    pub fn total_size(&self) -> u64 {
        if !self.options.enabled {
            return 0;
        }
        snaps::total_size(&self.sizes, self.options.gap)
    }

    pub fn slide_size(&self, index: usize) -> Option<u32> {
        if !self.options.enabled {
            return None;
        }
        self.sizes.get(index).copied()
    }

    /// Visits every slide in order with its computed geometry.
    ///
    /// Carousels render all slides (the sequence is small and fixed for the
    /// session), so unlike a virtualized list there is no windowing here.
    pub fn for_each_slide(&self, mut f: impl FnMut(Slide)) {
        if !self.options.enabled {
            return;
        }
        let gap = self.options.gap as u64;
        let mut start = 0u64;
        for (index, &size) in self.sizes.iter().enumerate() {
            f(Slide { index, start, size });
            start = start.saturating_add(size as u64);
            if gap > 0 && index + 1 < self.sizes.len() {
                start = start.saturating_add(gap);
            }
        }
    }

    /// Collects slide geometry into `out` (clears `out` first).
    pub fn collect_slides(&self, out: &mut Vec<Slide>) {
        out.clear();
        self.for_each_slide(|s| out.push(s));
    }

    fn rebuild_layout(&mut self) {
        let count = self.options.count;
        self.measured.resize(count, None);
        self.sizes.clear();
        self.sizes.reserve_exact(count);
        for i in 0..count {
            match self.measured[i] {
                Some(size) => self.sizes.push(size),
                None => self.sizes.push((self.options.slide_size)(i)),
            }
        }
        self.snaps = snaps::compute(
            &self.sizes,
            self.options.gap,
            self.options.viewport,
            self.options.align,
            self.options.looping,
        );
    }

    fn reset_to_start(&mut self) {
        let count = self.options.count;
        self.selected = if count == 0 {
            0
        } else {
            self.options.start_index.min(count - 1)
        };
        self.previous = self.selected;
        self.direction = None;
    }

    /// Pulls the selection back into range after a layout change, marking a
    /// pending `select` notification when it moved. Clamping happens before
    /// any observer runs, so an observer never sees a transient out-of-range
    /// index.
    fn clamp_selection(&mut self) {
        let count = self.options.count;
        if count == 0 {
            self.selected = 0;
            self.previous = 0;
            self.direction = None;
            return;
        }
        self.previous = self.previous.min(count - 1);
        if self.selected >= count {
            self.previous = count - 1;
            self.selected = count - 1;
            self.direction = Some(ScrollDirection::Backward);
            self.notify_select();
        }
    }

    fn clamp_selection_silent(&mut self) {
        let count = self.options.count;
        if count == 0 {
            self.selected = 0;
            self.previous = 0;
        } else {
            self.selected = self.selected.min(count - 1);
            self.previous = self.previous.min(count - 1);
        }
    }

    fn notify_select(&self) {
        if !self.options.enabled {
            return;
        }
        if self.notify_depth.get() > 0 {
            self.select_pending.set(true);
            return;
        }
        self.notify_select_now();
    }

    fn notify_select_now(&self) {
        if !self.options.enabled {
            return;
        }
        if let Some(cb) = &self.options.on_select {
            cb(self);
        }
    }

    fn notify_reinit(&self) {
        if !self.options.enabled {
            return;
        }
        if self.notify_depth.get() > 0 {
            self.reinit_pending.set(true);
            return;
        }
        self.notify_reinit_now();
    }

    fn notify_reinit_now(&self) {
        if !self.options.enabled {
            return;
        }
        if let Some(cb) = &self.options.on_reinit {
            cb(self);
        }
    }
}
