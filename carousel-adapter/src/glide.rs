use carousel::{Carousel, ScrollDirection};

/// Eased physical motion from one offset toward a snap, sampled on the
/// adapter's `tick` clock.
///
/// A glide is built against the engine's snap geometry rather than two bare
/// offsets: it resolves the target snap itself, and in loop mode it routes
/// across the wrap seam in the direction the selection actually moved,
/// treating the slide strip as circular instead of rewinding the whole way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapGlide {
    from: u64,
    displacement: i64,
    /// Circular span of the strip when the motion crosses the loop seam.
    wrap_span: Option<u64>,
    departed_ms: u64,
    duration_ms: u64,
    easing: Easing,
}

impl SnapGlide {
    /// Starts a glide from `from_offset` toward the snap at `to_index`.
    ///
    /// Returns `None` when the engine cannot resolve the target snap
    /// (disabled engine or out-of-range index).
    pub fn toward(
        engine: &Carousel,
        from_offset: u64,
        to_index: usize,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<Self> {
        let to = engine.snap_offset(to_index)?;
        let mut displacement = to as i64 - from_offset as i64;
        let mut wrap_span = None;

        if engine.options().looping {
            // The strip is circular: a forward wrap keeps moving forward past
            // the last slide (and the seam gap) instead of doubling back.
            let gap = engine.options().gap as u64;
            let span = engine.total_size().saturating_add(gap);
            if span > 0 {
                match engine.scroll_direction() {
                    Some(ScrollDirection::Forward) if displacement < 0 => {
                        displacement += span as i64;
                        wrap_span = Some(span);
                    }
                    Some(ScrollDirection::Backward) if displacement > 0 => {
                        displacement -= span as i64;
                        wrap_span = Some(span);
                    }
                    _ => {}
                }
            }
        }

        Some(Self {
            from: from_offset,
            displacement,
            wrap_span,
            departed_ms: now_ms,
            duration_ms: duration_ms.max(1),
            easing,
        })
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.departed_ms) >= self.duration_ms
    }

    /// The physical offset at `now_ms`.
    ///
    /// Offsets are folded into the circular span while crossing the loop
    /// seam, so a wrap lands exactly on the target snap.
    pub fn sample(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.departed_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.sample(t) as f64;

        let pos = self.from as f64 + self.displacement as f64 * eased;
        match self.wrap_span {
            Some(span) => {
                let span = span as f64;
                let mut folded = pos % span;
                if folded < 0.0 {
                    folded += span;
                }
                folded as u64
            }
            None => pos.max(0.0) as u64,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}
