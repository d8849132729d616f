/// How a slide is aligned inside the viewport when it is the selected snap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Direction of the most recent selection change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Geometry of one slide in the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    pub index: usize,
    /// Start offset in the scroll axis (includes preceding gaps).
    pub start: u64,
    /// Size in the scroll axis (excludes `gap`).
    pub size: u32,
}

impl Slide {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.size as u64)
    }
}
