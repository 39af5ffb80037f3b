//! Step-by-step hanging instructions.
//!
//! Turns computed placements into the list a person follows with a tape
//! measure: one step per frame, top row first, left to right within a row.
//!
//! ```
//! use hangplan::{CalculatorState, FrameSpec, RegularLayout, WallSpec};
//! use hangplan::steps::hanging_steps;
//! use hangplan::units::Unit;
//!
//! let state = CalculatorState::regular(
//!     WallSpec::new(96.0, 72.0),
//!     RegularLayout {
//!         frame_count: 1,
//!         frame: FrameSpec::new(24.0, 18.0, 4.0),
//!         ..RegularLayout::default()
//!     },
//! );
//! let steps = hanging_steps(&state.positions());
//! assert_eq!(
//!     steps[0].describe(Unit::Inches),
//!     "Frame 1: mark 48\" from the left wall and 60\" up from the floor (12\" below the ceiling)."
//! );
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::position::FramePosition;
use crate::units::{Unit, format_measurement};

/// Where to mark the wall for one frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HangingStep {
    pub frame_id: usize,
    pub name: String,
    /// Left wall to the (first) hook.
    pub from_left: f64,
    pub from_floor: f64,
    pub from_ceiling: f64,
    /// Distance to the second hook of a dual pair.
    pub hook_gap: Option<f64>,
}

impl HangingStep {
    pub fn from_position(p: &FramePosition) -> Self {
        Self {
            frame_id: p.id,
            name: p.name.clone(),
            from_left: p.measurements.from_left,
            from_floor: p.measurements.from_floor,
            from_ceiling: p.measurements.from_ceiling,
            hook_gap: p.hook_gap,
        }
    }

    /// Render as one instruction line in `unit`.
    pub fn describe(&self, unit: Unit) -> String {
        let mut line = format!(
            "{}: mark {} from the left wall and {} up from the floor ({} below the ceiling).",
            self.name,
            format_measurement(self.from_left, unit),
            format_measurement(self.from_floor, unit),
            format_measurement(self.from_ceiling, unit),
        );
        if let Some(gap) = self.hook_gap {
            line.push_str(&format!(
                " Mark the second hook {} to the right at the same height.",
                format_measurement(gap, unit)
            ));
        }
        line
    }
}

/// Steps for every placement, highest hook line first, then left to right.
pub fn hanging_steps(positions: &[FramePosition]) -> Vec<HangingStep> {
    let mut steps: Vec<HangingStep> = positions.iter().map(HangingStep::from_position).collect();
    steps.sort_by(|a, b| {
        a.from_ceiling
            .total_cmp(&b.from_ceiling)
            .then(a.from_left.total_cmp(&b.from_left))
            .then(a.frame_id.cmp(&b.frame_id))
    });
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{HangingSpec, Rect, WallSpec};
    use crate::position::FrameSource;
    use alloc::string::ToString;

    const WALL: WallSpec = WallSpec::new(96.0, 72.0);

    fn placed(id: usize, x: f64, y: f64, hanging: &HangingSpec) -> FramePosition {
        FramePosition::place(
            &WALL,
            id,
            format!("Frame {}", id + 1),
            FrameSource::Freeform,
            Rect::new(x, y, 20.0, 16.0),
            3.0,
            hanging,
        )
    }

    #[test]
    fn ordered_top_down_then_left_right() {
        let single = HangingSpec::single();
        let positions = [
            placed(0, 50.0, 30.0, &single),
            placed(1, 10.0, 30.0, &single),
            placed(2, 30.0, 5.0, &single),
        ];
        let ids: Vec<usize> = hanging_steps(&positions).iter().map(|s| s.frame_id).collect();
        assert_eq!(ids, [2, 1, 0]);
    }

    #[test]
    fn empty_input() {
        assert!(hanging_steps(&[]).is_empty());
    }

    #[test]
    fn dual_hooks_mention_second_mark() {
        let p = placed(0, 10.0, 10.0, &HangingSpec::dual(2.0));
        let step = HangingStep::from_position(&p);
        assert_eq!(step.hook_gap, Some(16.0));
        assert_eq!(
            step.describe(Unit::Inches),
            "Frame 1: mark 12\" from the left wall and 59\" up from the floor (13\" below the ceiling). \
             Mark the second hook 16\" to the right at the same height."
        );
    }

    #[test]
    fn describes_in_centimeters() {
        let mut step = HangingStep::from_position(&placed(0, 10.0, 10.0, &HangingSpec::single()));
        step.name = "Print".to_string();
        assert_eq!(
            step.describe(Unit::Centimeters),
            "Print: mark 50.8 cm from the left wall and 149.9 cm up from the floor (33.0 cm below the ceiling)."
        );
    }
}
