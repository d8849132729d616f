use alloc::sync::Arc;

use crate::SnapAlign;
use crate::engine::Carousel;

/// A callback fired after the selected snap changed.
///
/// Fired exactly once per discrete selection change; never for no-op
/// navigation calls.
pub type OnSelectCallback = Arc<dyn Fn(&Carousel) + Send + Sync>;

/// A callback fired after the engine re-initialized its layout.
///
/// "Layout" covers everything boundary flags are derived from besides the
/// selected snap itself: slide count, slide sizes, gap, viewport, alignment
/// and loop mode. Observers should recompute any derived UI state from
/// scratch when this fires, even if the selected snap did not move.
pub type OnReinitCallback = Arc<dyn Fn(&Carousel) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// This type is designed to be cheap to clone: the slide size source and the
/// event callbacks are stored in `Arc`s so adapters can tweak a few fields and
/// call `Carousel::set_options` without reallocating closures.
#[derive(Clone)]
pub struct CarouselOptions {
    /// Number of slides.
    pub count: usize,

    /// When `true`, navigating past the last snap wraps to the first and vice
    /// versa, and no boundary exists.
    pub looping: bool,

    /// The snap selected on construction (aka Embla `startIndex`). Clamped
    /// into range.
    pub start_index: usize,

    /// Enables/disables the engine. While disabled, navigation calls are
    /// no-ops, boundary flags report `false` and no events fire.
    pub enabled: bool,

    /// Returns the size of slide `i` in the scroll axis.
    ///
    /// The engine is headless: it never measures anything itself. A UI layer
    /// that knows real slide sizes provides them here, or reports them
    /// per-slide through `Carousel::measure` as they become known.
    pub slide_size: Arc<dyn Fn(usize) -> u32 + Send + Sync>,

    /// Space between slides.
    pub gap: u32,

    /// Viewport size in the scroll axis. Snap offsets for `Center`/`End`
    /// alignment depend on it.
    pub viewport: u32,

    /// How the selected slide is aligned inside the viewport.
    pub align: SnapAlign,

    /// Optional callback fired after the selected snap changed.
    pub on_select: Option<OnSelectCallback>,

    /// Optional callback fired after the engine re-initialized its layout.
    pub on_reinit: Option<OnReinitCallback>,
}

impl CarouselOptions {
    /// Creates options for `count` slides.
    ///
    /// `slide_size(i)` should return the size of slide `i` in the scroll axis.
    /// For a classic one-slide-per-view carousel, return the viewport size for
    /// every index.
    pub fn new(count: usize, slide_size: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self {
            count,
            looping: false,
            start_index: 0,
            enabled: true,
            slide_size: Arc::new(slide_size),
            gap: 0,
            viewport: 0,
            align: SnapAlign::Start,
            on_select: None,
            on_reinit: None,
        }
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_viewport(mut self, viewport: u32) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_align(mut self, align: SnapAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_on_select(
        mut self,
        on_select: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_select = on_select.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_reinit(
        mut self,
        on_reinit: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_reinit = on_reinit.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("looping", &self.looping)
            .field("start_index", &self.start_index)
            .field("enabled", &self.enabled)
            .field("gap", &self.gap)
            .field("viewport", &self.viewport)
            .field("align", &self.align)
            .finish_non_exhaustive()
    }
}
