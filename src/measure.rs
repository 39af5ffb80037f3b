//! Wall-relative measurements of a placed frame's hanging point.

use crate::geometry::WallSpec;

/// Distances a person measures on the wall to place a hook.
///
/// Horizontal distances are to the primary hook (the only hook, or the left
/// one of a dual pair). Vertical distances are to the hook line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurements {
    /// Left wall to the primary hook.
    pub from_left: f64,
    /// Right wall to the primary hook.
    pub from_right: f64,
    /// Ceiling to the top edge of the frame.
    pub from_top: f64,
    /// Floor up to the hook line.
    pub from_floor: f64,
    /// Ceiling down to the hook line.
    pub from_ceiling: f64,
}

/// Project a frame at `(x, y)` with hook at `(hook_x, hook_y)` (frame-relative)
/// onto the wall.
///
/// `from_left + from_right == wall.width` and
/// `from_floor + from_ceiling == wall.height` hold for any input.
pub fn project(wall: &WallSpec, x: f64, y: f64, width: f64, hook_x: f64, hook_y: f64) -> Measurements {
    Measurements {
        from_left: x + hook_x,
        from_right: wall.width - (x + width) + (width - hook_x),
        from_top: y,
        from_floor: wall.height - (y + hook_y),
        from_ceiling: y + hook_y,
    }
}
