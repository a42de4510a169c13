//! Value types shared across the extraction and orientation paths.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in image pixel coordinates.
///
/// Right-open / bottom-open: `left <= right` and `top <= bottom` are
/// guaranteed by the recognition engine and not revalidated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Line-boundary flags attached to word-granularity regions.
///
/// Always empty at line granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutFlags(u8);

impl LayoutFlags {
    /// The region is the first element of its text line.
    pub const START_OF_LINE: LayoutFlags = LayoutFlags(1);
    /// The region is the last element of its text line.
    pub const END_OF_LINE: LayoutFlags = LayoutFlags(2);

    pub fn empty() -> Self {
        LayoutFlags(0)
    }

    pub fn contains(&self, flag: LayoutFlags) -> bool {
        self.0 & flag.0 == flag.0
    }

    pub fn insert(&mut self, flag: LayoutFlags) {
        self.0 |= flag.0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn bits(&self) -> u8 {
        self.0
    }
}

/// The unit a bounding-box or text operation reports at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Word,
    Line,
}

/// One detected page element.
///
/// `text` is empty and `confidence` zero when text was not requested for the
/// extraction. Regions are re-derived from engine state on every call and
/// never cached by the session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextRegion {
    pub rect: Rect,
    pub flags: LayoutFlags,
    pub confidence: f32,
    pub text: String,
}

/// Page rotation estimate.
///
/// `rotation` is one of 0, 90, 180, 270 degrees. `confidence` is a binary
/// signal: 1.0 when detection succeeded, 0.0 when the underlying heuristic
/// failed. It is not a calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub rotation: u16,
    pub confidence: f32,
}
