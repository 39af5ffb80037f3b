//! Row and grid layouts: identical frames placed by formula.
//!
//! Each axis is distributed independently, the resulting block is anchored
//! on the wall, and cells are emitted row-major. Frames are never checked
//! for overlap or fit.
//!
//! ```
//! use hangplan::{Arrangement, Distribution, FrameSpec, RegularLayout, WallSpec};
//!
//! let layout = RegularLayout {
//!     arrangement: Arrangement::Row,
//!     frame_count: 3,
//!     frame: FrameSpec::new(20.0, 16.0, 3.0),
//!     distribution: Distribution::SpaceBetween,
//!     ..RegularLayout::default()
//! };
//! let xs: Vec<f64> = layout
//!     .positions(&WallSpec::new(96.0, 72.0))
//!     .iter()
//!     .map(|p| p.x)
//!     .collect();
//! assert_eq!(xs, [0.0, 38.0, 76.0]);
//! ```

use alloc::format;
use alloc::vec::Vec;

use log::trace;
#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::anchor::{AnchorSpec, Block, resolve_origin};
use crate::distribution::{Distribution, distribute};
use crate::geometry::{FrameSpec, HangingSpec, Rect, WallSpec};
use crate::position::{FramePosition, FrameSource};

/// Shape of a regular layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arrangement {
    /// A single row.
    #[default]
    Row,
    /// Rows of `columns` frames; `None` picks a near-square shape.
    Grid { columns: Option<usize> },
}

/// Gap hints between neighboring frames, used by [`Distribution::Fixed`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacing {
    /// Between columns.
    pub horizontal: f64,
    /// Between rows.
    pub vertical: f64,
}

impl Spacing {
    /// Same gap on both axes.
    pub const fn uniform(gap: f64) -> Self {
        Self {
            horizontal: gap,
            vertical: gap,
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::uniform(3.0)
    }
}

/// Configuration of a row or grid of identical frames.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegularLayout {
    pub arrangement: Arrangement,
    pub frame_count: usize,
    pub frame: FrameSpec,
    pub hanging: HangingSpec,
    pub spacing: Spacing,
    /// Distribution across columns.
    pub distribution: Distribution,
    /// Distribution across rows.
    pub vertical_distribution: Distribution,
    pub anchor: AnchorSpec,
}

impl Default for RegularLayout {
    fn default() -> Self {
        Self {
            arrangement: Arrangement::Row,
            frame_count: 3,
            frame: FrameSpec::default(),
            hanging: HangingSpec::default(),
            spacing: Spacing::default(),
            distribution: Distribution::Fixed,
            vertical_distribution: Distribution::Fixed,
            anchor: AnchorSpec::default(),
        }
    }
}

impl RegularLayout {
    /// `(rows, columns)` needed to hold `frame_count` frames.
    pub fn grid_shape(&self) -> (usize, usize) {
        let n = self.frame_count;
        if n == 0 {
            return (0, 0);
        }
        let cols = match self.arrangement {
            Arrangement::Row => n,
            Arrangement::Grid { columns: Some(c) } => c.clamp(1, n),
            Arrangement::Grid { columns: None } => (n as f64).sqrt().ceil() as usize,
        };
        (n.div_ceil(cols), cols)
    }

    /// Compute every frame placement, row-major.
    pub fn positions(&self, wall: &WallSpec) -> Vec<FramePosition> {
        let (rows, cols) = self.grid_shape();
        if rows == 0 {
            return Vec::new();
        }

        let (_, h_span) = self.anchor.horizontal_extent(wall);
        let v_span = self.anchor.vertical_span(wall);
        let across = distribute(
            h_span,
            self.frame.width,
            cols,
            self.spacing.horizontal,
            self.distribution,
        );
        let down = distribute(
            v_span,
            self.frame.height,
            rows,
            self.spacing.vertical,
            self.vertical_distribution,
        );

        let block = Block {
            width: across.extent,
            height: down.extent,
            hang_line: down.leading() + self.frame.hanging_offset,
        };
        let origin = resolve_origin(wall, &block, &self.anchor);
        trace!(
            "regular layout {rows}x{cols}: block {:.3}x{:.3} at ({:.3}, {:.3}), gaps ({:.3}, {:.3})",
            block.width, block.height, origin.x, origin.y, across.gap, down.gap
        );

        let mut out = Vec::with_capacity(self.frame_count);
        for (row, dy) in down.offsets.iter().enumerate() {
            for (column, dx) in across.offsets.iter().enumerate() {
                let id = row * cols + column;
                if id >= self.frame_count {
                    break;
                }
                let rect = Rect::new(
                    origin.x + dx,
                    origin.y + dy,
                    self.frame.width,
                    self.frame.height,
                );
                out.push(FramePosition::place(
                    wall,
                    id,
                    format!("Frame {}", id + 1),
                    FrameSource::Regular { row, column },
                    rect,
                    self.frame.hanging_offset,
                    &self.hanging,
                ));
            }
        }
        out
    }

    /// Bounding rectangle of all placed frames.
    pub fn bounds(&self, wall: &WallSpec) -> Option<Rect> {
        self.positions(wall)
            .iter()
            .map(FramePosition::rect)
            .reduce(|a, b| a.union(&b))
    }
}
