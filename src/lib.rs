//! Picture hanging layout computation: frame placement, hook positions, and
//! gallery editing.
//!
//! Pure geometry on a flat wall, `no_std` compatible. Every length is in
//! inches; centimeters exist only when formatting (see [`units`]).
//!
//! # Modules
//!
//! - [`regular`]: rows and grids of identical frames, placed by formula
//! - [`gallery`]: freeform frames with selection, group drag, and snapping
//! - [`distribution`] and [`anchor`]: how a block is spread and where it sits
//! - [`measure`]: wall measurements for each hook
//! - [`state`]: [`CalculatorState`], the root of truth for a wall plan
//! - [`steps`]: tape-measure instructions from computed placements
//! - `query` (feature `query`): share links
//!
//! ```
//! use hangplan::{CalculatorState, Distribution, FrameSpec, RegularLayout, WallSpec};
//!
//! let state = CalculatorState::regular(
//!     WallSpec::new(96.0, 72.0),
//!     RegularLayout {
//!         frame_count: 3,
//!         frame: FrameSpec::new(20.0, 16.0, 3.0),
//!         distribution: Distribution::SpaceBetween,
//!         ..RegularLayout::default()
//!     },
//! );
//! for frame in state.positions() {
//!     assert_eq!(frame.measurements.from_floor, 60.0);
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod anchor;
pub mod distribution;
pub mod gallery;
pub mod geometry;
pub mod measure;
pub mod position;
#[cfg(feature = "query")]
pub mod query;
pub mod regular;
pub mod snap;
pub mod state;
pub mod steps;
pub mod units;

pub use anchor::{AnchorLine, AnchorSpec, Furniture, HorizontalAnchor, VerticalAnchor};
pub use distribution::{Distributed, Distribution, distribute};
pub use gallery::{Gallery, GalleryFrame, Selection};
pub use geometry::{FrameSpec, HangingSpec, HangingType, Hooks, Point, Rect, WallSpec};
pub use measure::Measurements;
pub use position::{FramePosition, FrameSource};
pub use regular::{Arrangement, RegularLayout, Spacing};
pub use state::{CalculatorState, LayoutKind, LayoutType};
pub use steps::{HangingStep, hanging_steps};
pub use units::Unit;
