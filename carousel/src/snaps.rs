//! Snap point layout.
//!
//! Given slide sizes, a gap and a viewport, this module computes the physical
//! scroll offset each slide snaps to. Slide counts are small, so offsets are
//! recomputed with plain prefix scans on every re-initialization.

use alloc::vec::Vec;

use crate::SnapAlign;

/// Total content extent: slide sizes plus interior gaps (no trailing gap).
pub(crate) fn total_size(sizes: &[u32], gap: u32) -> u64 {
    let mut total = 0u64;
    for (i, &size) in sizes.iter().enumerate() {
        total = total.saturating_add(size as u64);
        if gap > 0 && i + 1 < sizes.len() {
            total = total.saturating_add(gap as u64);
        }
    }
    total
}

/// Computes one snap offset per slide.
///
/// When `looping` is false, offsets are contained to the scrollable range
/// `[0, total - viewport]` so the last snaps do not overscroll past the end.
/// When `looping` is true, no boundary exists and the raw offsets are kept;
/// wrap-around motion is an adapter concern.
pub(crate) fn compute(
    sizes: &[u32],
    gap: u32,
    viewport: u32,
    align: SnapAlign,
    looping: bool,
) -> Vec<u64> {
    let mut snaps = Vec::with_capacity(sizes.len());
    if sizes.is_empty() {
        return snaps;
    }

    let view = viewport as u64;
    let max_offset = total_size(sizes, gap).saturating_sub(view);

    let mut start = 0u64;
    for (i, &size) in sizes.iter().enumerate() {
        let raw = match align {
            SnapAlign::Start => start,
            SnapAlign::Center => start
                .saturating_add(size as u64 / 2)
                .saturating_sub(view / 2),
            SnapAlign::End => start.saturating_add(size as u64).saturating_sub(view),
        };
        snaps.push(if looping { raw } else { raw.min(max_offset) });

        start = start.saturating_add(size as u64);
        if gap > 0 && i + 1 < sizes.len() {
            start = start.saturating_add(gap as u64);
        }
    }
    snaps
}
