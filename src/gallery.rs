//! Freeform ("gallery" or "salon") layouts.
//!
//! Unlike [regular layouts](crate::regular), gallery frames carry their own
//! size and position, and those coordinates are authoritative. Editing is
//! expressed as state transitions: every operation takes the gallery by
//! value and returns the updated gallery, so a caller holding the previous
//! snapshot can keep it for undo.
//!
//! Operations naming an id that does not exist leave the gallery unchanged.
//!
//! ```
//! use hangplan::{FrameSpec, Gallery, Point, WallSpec};
//!
//! let wall = WallSpec::new(96.0, 72.0);
//! let gallery = Gallery::new()
//!     .snap(false)
//!     .add_frame(FrameSpec::new(20.0, 16.0, 3.0), "Print", Point::new(10.0, 10.0))
//!     .add_frame(FrameSpec::new(12.0, 12.0, 2.0), "Sketch", Point::new(40.0, 10.0))
//!     .select(0, false)
//!     .select(1, true)
//!     .begin_drag(0, 15.0, 15.0)
//!     .update_drag(&wall, 20.0, 18.0)
//!     .end_drag();
//!
//! // Both selected frames moved by (5, 3).
//! assert_eq!(gallery.frame(0).map(|f| (f.x, f.y)), Some((15.0, 13.0)));
//! assert_eq!(gallery.frame(1).map(|f| (f.x, f.y)), Some((45.0, 13.0)));
//! ```

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::geometry::{FrameSpec, HangingSpec, Point, Rect, WallSpec};
use crate::position::{FramePosition, FrameSource};
use crate::snap::{SNAP_TOLERANCE, snap_group};

/// An independently positioned gallery frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GalleryFrame {
    /// Stable for the lifetime of the gallery; never reused.
    pub id: usize,
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub hanging_offset: f64,
    /// Left edge, from the left wall.
    pub x: f64,
    /// Top edge, from the ceiling.
    pub y: f64,
}

impl GalleryFrame {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Selected gallery frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// The most recently selected frame.
    pub primary: Option<usize>,
    pub members: BTreeSet<usize>,
}

impl Selection {
    pub fn contains(&self, id: usize) -> bool {
        self.members.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether more than one frame is selected.
    pub fn is_multi(&self) -> bool {
        self.members.len() > 1
    }

    fn forget(&mut self, id: usize) {
        self.members.remove(&id);
        if self.primary == Some(id) {
            self.primary = self.members.first().copied();
        }
    }
}

/// An in-progress pointer drag.
#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    /// The frame under the pointer.
    pub id: usize,
    pub start_x: f64,
    pub start_y: f64,
    /// `(id, x, y)` of every moved frame when the gesture began.
    pub origins: Vec<(usize, f64, f64)>,
}

/// A freeform arrangement of frames.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gallery {
    /// Frames in insertion order.
    pub frames: Vec<GalleryFrame>,
    pub hanging: HangingSpec,
    /// Gap that snapping aligns frames to.
    pub spacing: f64,
    /// Snap frames to the spacing grid while dragging.
    pub snap: bool,
    pub selection: Selection,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub drag: Option<DragState>,
    next_id: usize,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Gallery {
    /// Empty gallery: single hooks, 2 inch spacing, snapping on.
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            hanging: HangingSpec::single(),
            spacing: 2.0,
            snap: true,
            selection: Selection::default(),
            drag: None,
            next_id: 0,
        }
    }

    /// Set the hanging hardware used by every frame.
    pub fn hanging(mut self, hanging: HangingSpec) -> Self {
        self.hanging = hanging;
        self
    }

    /// Set the snapping gap.
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Enable or disable snapping.
    pub fn snap(mut self, snap: bool) -> Self {
        self.snap = snap;
        self
    }

    /// Seed a gallery from already computed placements, keeping their ids,
    /// names, sizes, and positions.
    pub fn from_positions(positions: &[FramePosition], hanging: HangingSpec) -> Self {
        let frames: Vec<GalleryFrame> = positions
            .iter()
            .map(|p| GalleryFrame {
                id: p.id,
                name: p.name.clone(),
                width: p.width,
                height: p.height,
                hanging_offset: p.hanging_offset,
                x: p.x,
                y: p.y,
            })
            .collect();
        let next_id = frames.iter().map(|f| f.id + 1).max().unwrap_or(0);
        Self {
            frames,
            hanging,
            next_id,
            ..Self::new()
        }
    }

    /// Id the next [`add_frame`](Self::add_frame) will assign.
    pub fn next_id(&self) -> usize {
        let past_max = self.frames.iter().map(|f| f.id + 1).max().unwrap_or(0);
        self.next_id.max(past_max)
    }

    pub fn frame(&self, id: usize) -> Option<&GalleryFrame> {
        self.frames.iter().find(|f| f.id == id)
    }

    fn frame_mut(&mut self, id: usize) -> Option<&mut GalleryFrame> {
        self.frames.iter_mut().find(|f| f.id == id)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // ── frame lifecycle ─────────────────────────────────────────────────

    /// Add a frame with its top-left corner at `at`.
    pub fn add_frame(mut self, spec: FrameSpec, name: impl Into<String>, at: Point) -> Self {
        let id = self.next_id();
        self.next_id = id + 1;
        self.frames.push(GalleryFrame {
            id,
            name: name.into(),
            width: spec.width,
            height: spec.height,
            hanging_offset: spec.hanging_offset,
            x: at.x,
            y: at.y,
        });
        self
    }

    /// Remove a frame, dropping it from the selection. An active drag that
    /// moves the frame is cancelled first.
    pub fn remove_frame(mut self, id: usize) -> Self {
        if self.frame(id).is_none() {
            debug!("remove_frame: no frame {id}");
            return self;
        }
        let drags_it = self
            .drag
            .as_ref()
            .is_some_and(|d| d.origins.iter().any(|&(fid, _, _)| fid == id));
        if drags_it {
            self = self.cancel_drag();
        }
        self.frames.retain(|f| f.id != id);
        self.selection.forget(id);
        self
    }

    /// Change a frame's size, keeping its top-left corner.
    pub fn resize_frame(mut self, id: usize, width: f64, height: f64) -> Self {
        match self.frame_mut(id) {
            Some(f) => {
                f.width = width;
                f.height = height;
            }
            None => debug!("resize_frame: no frame {id}"),
        }
        self
    }

    pub fn set_hanging_offset(mut self, id: usize, hanging_offset: f64) -> Self {
        match self.frame_mut(id) {
            Some(f) => f.hanging_offset = hanging_offset,
            None => debug!("set_hanging_offset: no frame {id}"),
        }
        self
    }

    pub fn rename_frame(mut self, id: usize, name: impl Into<String>) -> Self {
        match self.frame_mut(id) {
            Some(f) => f.name = name.into(),
            None => debug!("rename_frame: no frame {id}"),
        }
        self
    }

    /// Place a frame's top-left corner exactly, bypassing snapping.
    pub fn move_frame(mut self, id: usize, x: f64, y: f64) -> Self {
        match self.frame_mut(id) {
            Some(f) => {
                f.x = x;
                f.y = y;
            }
            None => debug!("move_frame: no frame {id}"),
        }
        self
    }

    // ── selection ───────────────────────────────────────────────────────

    /// Select a frame.
    ///
    /// `id` always becomes the primary frame. Non-additive selection replaces
    /// the members with `id`; additive selection toggles `id`'s membership.
    pub fn select(mut self, id: usize, additive: bool) -> Self {
        if self.frame(id).is_none() {
            debug!("select: no frame {id}");
            return self;
        }
        if additive {
            if !self.selection.members.insert(id) {
                self.selection.members.remove(&id);
            }
        } else {
            self.selection.members.clear();
            self.selection.members.insert(id);
        }
        self.selection.primary = Some(id);
        self
    }

    pub fn clear_selection(mut self) -> Self {
        self.selection = Selection::default();
        self
    }

    // ── dragging ────────────────────────────────────────────────────────

    /// Start dragging `id` with the pointer at `(pointer_x, pointer_y)`.
    ///
    /// When `id` is part of a multi-selection the whole selection moves.
    /// Starting a drag while another is active cancels the active one.
    pub fn begin_drag(mut self, id: usize, pointer_x: f64, pointer_y: f64) -> Self {
        if self.frame(id).is_none() {
            debug!("begin_drag: no frame {id}");
            return self;
        }
        if self.drag.is_some() {
            debug!("begin_drag: restarting active drag");
            self = self.cancel_drag();
        }
        let group = self.selection.is_multi() && self.selection.contains(id);
        let origins = self
            .frames
            .iter()
            .filter(|f| f.id == id || (group && self.selection.contains(f.id)))
            .map(|f| (f.id, f.x, f.y))
            .collect();
        self.drag = Some(DragState {
            id,
            start_x: pointer_x,
            start_y: pointer_y,
            origins,
        });
        self
    }

    /// Move the dragged frames to follow the pointer.
    ///
    /// Frames are positioned relative to where they were when the gesture
    /// began, so repeated updates never accumulate error.
    pub fn update_drag(mut self, wall: &WallSpec, pointer_x: f64, pointer_y: f64) -> Self {
        let Some(drag) = self.drag.take() else {
            debug!("update_drag: no active drag");
            return self;
        };
        let (dx, dy) = (pointer_x - drag.start_x, pointer_y - drag.start_y);
        trace!("drag frame {} by ({dx:.3}, {dy:.3})", drag.id);
        for &(id, ox, oy) in &drag.origins {
            if let Some(f) = self.frame_mut(id) {
                f.x = ox + dx;
                f.y = oy + dy;
            }
        }
        if self.snap {
            self.snap_moved(wall, &drag);
        }
        self.drag = Some(drag);
        self
    }

    /// Finish the gesture; current positions become authoritative.
    pub fn end_drag(mut self) -> Self {
        self.drag = None;
        self
    }

    /// Abandon the gesture, restoring every moved frame.
    pub fn cancel_drag(mut self) -> Self {
        if let Some(drag) = self.drag.take() {
            for &(id, ox, oy) in &drag.origins {
                if let Some(f) = self.frame_mut(id) {
                    f.x = ox;
                    f.y = oy;
                }
            }
        }
        self
    }

    fn snap_moved(&mut self, wall: &WallSpec, drag: &DragState) {
        let moving = |id: usize| drag.origins.iter().any(|&(fid, _, _)| fid == id);

        let mut x_lines = Vec::from([0.0, wall.width]);
        let mut y_lines = Vec::from([0.0, wall.height]);
        for f in self.frames.iter().filter(|f| !moving(f.id)) {
            x_lines.extend([f.x, f.x + f.width]);
            y_lines.extend([f.y, f.y + f.height]);
        }

        let moved: Vec<&GalleryFrame> = drag
            .origins
            .iter()
            .filter_map(|&(id, _, _)| self.frame(id))
            .collect();
        let lead = moved.iter().position(|f| f.id == drag.id).unwrap_or(0);
        let xs: Vec<(f64, f64)> = moved.iter().map(|f| (f.x, f.width)).collect();
        let ys: Vec<(f64, f64)> = moved.iter().map(|f| (f.y, f.height)).collect();
        let ids: Vec<usize> = moved.iter().map(|f| f.id).collect();

        let sx = snap_group(&xs, lead, &x_lines, self.spacing, SNAP_TOLERANCE);
        let sy = snap_group(&ys, lead, &y_lines, self.spacing, SNAP_TOLERANCE);
        for ((id, x), y) in ids.into_iter().zip(sx).zip(sy) {
            if let Some(f) = self.frame_mut(id) {
                f.x = x;
                f.y = y;
            }
        }
    }

    // ── output ──────────────────────────────────────────────────────────

    /// Placements of every frame, in insertion order.
    pub fn positions(&self, wall: &WallSpec) -> Vec<FramePosition> {
        self.frames
            .iter()
            .map(|f| {
                FramePosition::place(
                    wall,
                    f.id,
                    f.name.clone(),
                    FrameSource::Freeform,
                    f.rect(),
                    f.hanging_offset,
                    &self.hanging,
                )
            })
            .collect()
    }
}
