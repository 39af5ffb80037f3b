//! The calculator state: the single root of truth for a wall plan.
//!
//! A [`CalculatorState`] is plain data owned by the caller. Computing
//! placements never mutates it, and freeform edits consume it and return
//! the next state.
//!
//! ```
//! use hangplan::{CalculatorState, FrameSpec, RegularLayout, WallSpec};
//!
//! let state = CalculatorState::regular(
//!     WallSpec::new(96.0, 72.0),
//!     RegularLayout {
//!         frame_count: 1,
//!         frame: FrameSpec::new(24.0, 18.0, 4.0),
//!         ..RegularLayout::default()
//!     },
//! );
//! let frame = &state.positions()[0];
//! assert_eq!(frame.measurements.from_floor, 60.0);
//! assert_eq!(frame.measurements.from_ceiling, 12.0);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use log::debug;

use crate::gallery::Gallery;
use crate::geometry::{FrameSpec, Point, Rect, WallSpec};
use crate::position::FramePosition;
use crate::regular::{Arrangement, RegularLayout};

/// User-facing layout choice.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutType {
    #[default]
    Row,
    Grid,
    Gallery,
}

impl LayoutType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Grid => "grid",
            Self::Gallery => "gallery",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "row" => Some(Self::Row),
            "grid" => Some(Self::Grid),
            "gallery" | "salon" | "freeform" => Some(Self::Gallery),
            _ => None,
        }
    }
}

/// Derived or stored frames.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutKind {
    /// Row or grid; placements recomputed from the formula.
    Regular(RegularLayout),
    /// Gallery; placements are the stored frames.
    Freeform(Gallery),
}

/// Everything needed to compute a wall plan.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculatorState {
    pub wall: WallSpec,
    pub layout: LayoutKind,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::regular(WallSpec::default(), RegularLayout::default())
    }
}

impl CalculatorState {
    /// A row or grid layout.
    pub fn regular(wall: WallSpec, layout: RegularLayout) -> Self {
        Self {
            wall,
            layout: LayoutKind::Regular(layout),
        }
    }

    /// A gallery layout.
    pub fn gallery(wall: WallSpec, gallery: Gallery) -> Self {
        Self {
            wall,
            layout: LayoutKind::Freeform(gallery),
        }
    }

    pub fn layout_type(&self) -> LayoutType {
        match &self.layout {
            LayoutKind::Regular(r) => match r.arrangement {
                Arrangement::Row => LayoutType::Row,
                Arrangement::Grid { .. } => LayoutType::Grid,
            },
            LayoutKind::Freeform(_) => LayoutType::Gallery,
        }
    }

    /// Compute every frame placement. Pure; identical input yields an
    /// identical sequence.
    pub fn positions(&self) -> Vec<FramePosition> {
        match &self.layout {
            LayoutKind::Regular(r) => r.positions(&self.wall),
            LayoutKind::Freeform(g) => g.positions(&self.wall),
        }
    }

    /// Bounding rectangle of all frames.
    pub fn bounds(&self) -> Option<Rect> {
        self.positions()
            .iter()
            .map(FramePosition::rect)
            .reduce(|a, b| a.union(&b))
    }

    /// The gallery, in freeform mode.
    pub fn as_gallery(&self) -> Option<&Gallery> {
        match &self.layout {
            LayoutKind::Freeform(g) => Some(g),
            LayoutKind::Regular(_) => None,
        }
    }

    /// Switch to a gallery seeded with the current placements, so the user
    /// can fine-tune a computed layout by hand. Galleries are returned as is.
    pub fn into_gallery(self) -> Self {
        match self.layout {
            LayoutKind::Regular(ref r) => {
                let gallery = Gallery::from_positions(&self.positions(), r.hanging);
                Self::gallery(self.wall, gallery)
            }
            LayoutKind::Freeform(_) => self,
        }
    }

    /// Apply a gallery transition; a no-op for regular layouts.
    pub fn with_gallery(self, edit: impl FnOnce(Gallery, &WallSpec) -> Gallery) -> Self {
        match self.layout {
            LayoutKind::Freeform(g) => {
                let g = edit(g, &self.wall);
                Self::gallery(self.wall, g)
            }
            LayoutKind::Regular(_) => {
                debug!("gallery edit ignored: layout is {:?}", self.layout_type());
                self
            }
        }
    }

    /// Add a gallery frame centered on the wall.
    pub fn add_gallery_frame(self, spec: FrameSpec, name: impl Into<String>) -> Self {
        let at = Point::new(
            (self.wall.width - spec.width) / 2.0,
            (self.wall.height - spec.height) / 2.0,
        );
        let name = name.into();
        self.with_gallery(|g, _| g.add_frame(spec, name, at))
    }

    pub fn select(self, id: usize, additive: bool) -> Self {
        self.with_gallery(|g, _| g.select(id, additive))
    }

    pub fn begin_drag(self, id: usize, pointer_x: f64, pointer_y: f64) -> Self {
        self.with_gallery(|g, _| g.begin_drag(id, pointer_x, pointer_y))
    }

    pub fn update_drag(self, pointer_x: f64, pointer_y: f64) -> Self {
        self.with_gallery(|g, wall| g.update_drag(wall, pointer_x, pointer_y))
    }

    pub fn end_drag(self) -> Self {
        self.with_gallery(|g, _| g.end_drag())
    }

    pub fn cancel_drag(self) -> Self {
        self.with_gallery(|g, _| g.cancel_drag())
    }
}
