//! Wall, frame, and hanging hardware geometry.
//!
//! All lengths are canonical inches. Coordinates are wall-relative with the
//! origin at the top-left corner of the wall (ceiling line, left wall), `x`
//! growing to the right and `y` growing toward the floor.
//!
//! Nothing here validates physical feasibility. Zero, negative, or oversized
//! dimensions are carried through every computation unchanged.

/// Wall dimensions.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallSpec {
    /// Left wall to right wall.
    pub width: f64,
    /// Floor to ceiling.
    pub height: f64,
}

impl WallSpec {
    /// Create a wall.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for WallSpec {
    /// A 10 ft × 8 ft wall.
    fn default() -> Self {
        Self::new(120.0, 96.0)
    }
}

/// Physical frame size and where it hangs from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSpec {
    pub width: f64,
    pub height: f64,
    /// Distance from the top edge of the frame down to its hanging point(s).
    /// Expected within `0..=height`.
    pub hanging_offset: f64,
}

impl FrameSpec {
    /// Create a frame spec.
    pub const fn new(width: f64, height: f64, hanging_offset: f64) -> Self {
        Self {
            width,
            height,
            hanging_offset,
        }
    }
}

impl Default for FrameSpec {
    fn default() -> Self {
        Self::new(16.0, 20.0, 3.0)
    }
}

/// Number of hooks a frame hangs from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HangingType {
    /// One hook, centered on the frame.
    #[default]
    Single,
    /// Two hooks, symmetric about the frame's horizontal center.
    Dual,
}

impl HangingType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Dual => "dual",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "1" => Some(Self::Single),
            "dual" | "double" | "2" => Some(Self::Dual),
            _ => None,
        }
    }
}

/// Hanging hardware configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HangingSpec {
    pub kind: HangingType,
    /// For [`HangingType::Dual`], the distance of each hook from the nearest
    /// vertical frame edge. Ignored for single hooks.
    pub hook_inset: f64,
}

impl HangingSpec {
    /// Single centered hook.
    pub const fn single() -> Self {
        Self {
            kind: HangingType::Single,
            hook_inset: 0.0,
        }
    }

    /// Two hooks, each `hook_inset` in from the frame's side edges.
    pub const fn dual(hook_inset: f64) -> Self {
        Self {
            kind: HangingType::Dual,
            hook_inset,
        }
    }

    /// Hook positions for a frame of the given width.
    pub fn hooks(&self, frame_width: f64) -> Hooks {
        match self.kind {
            HangingType::Single => Hooks::Single {
                x: frame_width / 2.0,
            },
            HangingType::Dual => Hooks::Dual {
                left: self.hook_inset,
                right: frame_width - self.hook_inset,
            },
        }
    }
}

impl Default for HangingSpec {
    fn default() -> Self {
        Self::single()
    }
}

/// Hook x-coordinates relative to the frame's left edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Hooks {
    Single { x: f64 },
    Dual { left: f64, right: f64 },
}

impl Hooks {
    /// The hook measured from: the only hook, or the left one.
    pub fn primary(&self) -> f64 {
        match *self {
            Self::Single { x } => x,
            Self::Dual { left, .. } => left,
        }
    }

    /// The right hook of a dual pair.
    pub fn secondary(&self) -> Option<f64> {
        match *self {
            Self::Single { .. } => None,
            Self::Dual { right, .. } => Some(right),
        }
    }

    /// Distance between the two hooks of a dual pair.
    pub fn gap(&self) -> Option<f64> {
        match *self {
            Self::Single { .. } => None,
            Self::Dual { left, right } => Some(right - left),
        }
    }
}

/// A point in wall coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in wall coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Smallest rect containing both.
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }

    /// Whether this rect lies entirely on a wall of the given size.
    pub fn is_within(&self, wall: &WallSpec) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.right() <= wall.width && self.bottom() <= wall.height
    }
}
