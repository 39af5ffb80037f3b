//! Placed frames: the engine's output.

use alloc::string::String;

use crate::geometry::{HangingSpec, Rect, WallSpec};
use crate::measure::{Measurements, project};

/// Where a [`FramePosition`] came from.
///
/// Regular frames are derived from the layout formula on every recompute;
/// freeform frames mirror a stored [`GalleryFrame`](crate::GalleryFrame)
/// whose coordinates are authoritative.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameSource {
    /// Cell of a row or grid layout.
    Regular { row: usize, column: usize },
    /// Independently positioned gallery frame.
    Freeform,
}

/// One placed frame with its hooks and wall measurements.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FramePosition {
    /// Sequence index for regular layouts; the gallery frame id otherwise.
    pub id: usize,
    pub name: String,
    pub source: FrameSource,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub hanging_offset: f64,
    /// Primary hook, relative to the frame's left edge.
    pub hook_x: f64,
    /// Right hook of a dual pair, relative to the frame's left edge.
    pub hook_x2: Option<f64>,
    /// Hook line, relative to the frame's top edge.
    pub hook_y: f64,
    /// `hook_x2 - hook_x` for dual hanging.
    pub hook_gap: Option<f64>,
    pub measurements: Measurements,
}

impl FramePosition {
    /// Place a frame occupying `rect` and derive its hooks and measurements.
    pub fn place(
        wall: &WallSpec,
        id: usize,
        name: String,
        source: FrameSource,
        rect: Rect,
        hanging_offset: f64,
        hanging: &HangingSpec,
    ) -> Self {
        let hooks = hanging.hooks(rect.width);
        let hook_x = hooks.primary();
        Self {
            id,
            name,
            source,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            hanging_offset,
            hook_x,
            hook_x2: hooks.secondary(),
            hook_y: hanging_offset,
            hook_gap: hooks.gap(),
            measurements: project(wall, rect.x, rect.y, rect.width, hook_x, hanging_offset),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Absolute wall x of every hook, left to right.
    pub fn hook_positions(&self) -> impl Iterator<Item = f64> + '_ {
        core::iter::once(self.hook_x)
            .chain(self.hook_x2)
            .map(move |hx| self.x + hx)
    }

    /// Whether the frame is completely on the wall.
    pub fn fits(&self, wall: &WallSpec) -> bool {
        self.rect().is_within(wall)
    }
}
