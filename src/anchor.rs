//! Anchor resolution: where a layout block sits on the wall.
//!
//! A block is the bounding box of a regular layout, plus the depth of its
//! first row of hooks. Horizontal anchors measure from the left wall, the
//! right wall, or the wall's center line. Vertical anchors measure from the
//! floor, the ceiling, the wall's center line, or the top of a piece of
//! furniture standing against the wall.
//!
//! ```
//! use hangplan::anchor::{AnchorSpec, Block, VerticalAnchor, resolve_origin};
//! use hangplan::WallSpec;
//!
//! // Hooks of a 24×18 frame (hanging 4" below its top) at 60" above the floor.
//! let anchor = AnchorSpec::default().vertical(VerticalAnchor::Floor, 60.0);
//! let block = Block { width: 24.0, height: 18.0, hang_line: 4.0 };
//! let origin = resolve_origin(&WallSpec::new(96.0, 72.0), &block, &anchor);
//! assert_eq!((origin.x, origin.y), (36.0, 8.0));
//! ```

use crate::geometry::{Point, Rect, WallSpec};

/// Horizontal reference line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HorizontalAnchor {
    /// Offset measured rightward from the left edge.
    Left,
    /// Offset measured rightward from the centered position.
    #[default]
    Center,
    /// Offset measured leftward from the right edge.
    Right,
}

impl HorizontalAnchor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" | "centre" | "middle" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Start of a block of `len` inside the extent `[start, start + span]`.
    pub fn resolve(self, start: f64, span: f64, len: f64, offset: f64) -> f64 {
        match self {
            Self::Left => start + offset,
            Self::Center => start + (span - len) / 2.0 + offset,
            Self::Right => start + span - len - offset,
        }
    }
}

/// Vertical reference line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VerticalAnchor {
    /// Offset measured upward from the floor.
    #[default]
    Floor,
    /// Offset measured downward from the ceiling.
    Ceiling,
    /// Offset measured downward from the centered position.
    Center,
    /// Offset measured upward from the top of the [`Furniture`].
    Furniture,
}

impl VerticalAnchor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Floor => "floor",
            Self::Ceiling => "ceiling",
            Self::Center => "center",
            Self::Furniture => "furniture",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "floor" | "bottom" => Some(Self::Floor),
            "ceiling" | "top" => Some(Self::Ceiling),
            "center" | "centre" | "middle" => Some(Self::Center),
            "furniture" => Some(Self::Furniture),
            _ => None,
        }
    }
}

/// Which line of the block a floor, ceiling, or furniture offset measures to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AnchorLine {
    /// The hooks of the first row: "hooks 60 inches above the floor".
    #[default]
    Hooks,
    /// The block edge facing the reference: its bottom for floor and
    /// furniture anchors, its top for ceiling anchors.
    Edge,
}

impl AnchorLine {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hooks => "hooks",
            Self::Edge => "edge",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hooks" | "hook" => Some(Self::Hooks),
            "edge" => Some(Self::Edge),
            _ => None,
        }
    }
}

/// A piece of furniture standing on the floor against the wall.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Furniture {
    pub width: f64,
    /// Floor to top surface.
    pub height: f64,
    /// Horizontal placement of the furniture itself on the wall.
    pub anchor: HorizontalAnchor,
    pub offset: f64,
    /// Center the block over the furniture, ignoring the block's own
    /// horizontal anchor and offset.
    pub center_block: bool,
}

impl Furniture {
    /// Furniture of the given size, centered on the wall, with the block
    /// centered over it.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            anchor: HorizontalAnchor::Center,
            offset: 0.0,
            center_block: true,
        }
    }

    /// Position the furniture on the wall.
    pub fn placed(mut self, anchor: HorizontalAnchor, offset: f64) -> Self {
        self.anchor = anchor;
        self.offset = offset;
        self
    }

    /// Honor the block's own horizontal anchor within the furniture's span.
    pub fn uncentered(mut self) -> Self {
        self.center_block = false;
        self
    }

    /// The furniture's rectangle in wall coordinates.
    pub fn rect(&self, wall: &WallSpec) -> Rect {
        let x = self.anchor.resolve(0.0, wall.width, self.width, self.offset);
        Rect::new(x, wall.height - self.height, self.width, self.height)
    }
}

/// Where a layout block goes on the wall.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorSpec {
    pub horizontal: HorizontalAnchor,
    pub horizontal_offset: f64,
    pub vertical: VerticalAnchor,
    pub vertical_offset: f64,
    pub line: AnchorLine,
    /// Required by [`VerticalAnchor::Furniture`]; without it the furniture
    /// anchor measures from the floor.
    pub furniture: Option<Furniture>,
}

impl Default for AnchorSpec {
    /// Centered, hooks 60 inches above the floor.
    fn default() -> Self {
        Self {
            horizontal: HorizontalAnchor::Center,
            horizontal_offset: 0.0,
            vertical: VerticalAnchor::Floor,
            vertical_offset: 60.0,
            line: AnchorLine::Hooks,
            furniture: None,
        }
    }
}

impl AnchorSpec {
    /// Set the horizontal anchor and offset.
    pub fn horizontal(mut self, anchor: HorizontalAnchor, offset: f64) -> Self {
        self.horizontal = anchor;
        self.horizontal_offset = offset;
        self
    }

    /// Set the vertical anchor and offset.
    pub fn vertical(mut self, anchor: VerticalAnchor, offset: f64) -> Self {
        self.vertical = anchor;
        self.vertical_offset = offset;
        self
    }

    /// Set the line that vertical offsets measure to.
    pub fn line(mut self, line: AnchorLine) -> Self {
        self.line = line;
        self
    }

    /// Anchor above furniture, `offset` above its top surface.
    pub fn above_furniture(mut self, furniture: Furniture, offset: f64) -> Self {
        self.vertical = VerticalAnchor::Furniture;
        self.vertical_offset = offset;
        self.furniture = Some(furniture);
        self
    }

    /// The furniture in effect, if the vertical anchor uses one.
    pub fn active_furniture(&self) -> Option<&Furniture> {
        match self.vertical {
            VerticalAnchor::Furniture => self.furniture.as_ref(),
            _ => None,
        }
    }

    /// Horizontal extent `(start, span)` the block is laid out in: the
    /// furniture's span when anchored to furniture, else the whole wall.
    pub fn horizontal_extent(&self, wall: &WallSpec) -> (f64, f64) {
        match self.active_furniture() {
            Some(f) => (f.rect(wall).x, f.width),
            None => (0.0, wall.width),
        }
    }

    /// Vertical span available to the block: the space above the furniture
    /// when anchored to furniture, else the full wall height.
    pub fn vertical_span(&self, wall: &WallSpec) -> f64 {
        match self.active_furniture() {
            Some(f) => wall.height - f.height,
            None => wall.height,
        }
    }
}

/// Size of a layout block.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Block {
    pub width: f64,
    pub height: f64,
    /// Distance from the block's top edge to its first row of hooks.
    pub hang_line: f64,
}

/// Resolve the absolute top-left origin of `block` on `wall`.
pub fn resolve_origin(wall: &WallSpec, block: &Block, anchor: &AnchorSpec) -> Point {
    Point::new(resolve_x(wall, block, anchor), resolve_y(wall, block, anchor))
}

fn resolve_x(wall: &WallSpec, block: &Block, anchor: &AnchorSpec) -> f64 {
    let (start, span) = anchor.horizontal_extent(wall);
    match anchor.active_furniture() {
        Some(f) if f.center_block => start + (span - block.width) / 2.0,
        _ => anchor
            .horizontal
            .resolve(start, span, block.width, anchor.horizontal_offset),
    }
}

fn resolve_y(wall: &WallSpec, block: &Block, anchor: &AnchorSpec) -> f64 {
    let v = anchor.vertical_offset;
    // Depth of the measured line below the block top, for upward offsets.
    let from_below = match anchor.line {
        AnchorLine::Hooks => block.hang_line,
        AnchorLine::Edge => block.height,
    };
    match anchor.vertical {
        VerticalAnchor::Ceiling => match anchor.line {
            AnchorLine::Hooks => v - block.hang_line,
            AnchorLine::Edge => v,
        },
        VerticalAnchor::Center => (wall.height - block.height) / 2.0 + v,
        VerticalAnchor::Furniture => {
            let surface = match &anchor.furniture {
                Some(f) => wall.height - f.height,
                None => wall.height,
            };
            surface - v - from_below
        }
        VerticalAnchor::Floor => wall.height - v - from_below,
    }
}
