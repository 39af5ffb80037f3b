//! Snapping of dragged gallery frames to a spacing grid.
//!
//! Works one axis at a time. Each of a moved span's two edges is compared
//! against the nearest reference line (wall edges and edges of frames that
//! are not moving) and rounded to the nearest multiple of the gallery spacing
//! measured from that line. A candidate is accepted only within
//! [`SNAP_TOLERANCE`]; the smallest adjustment wins.
//!
//! Ties are deterministic: between equidistant reference lines the smaller
//! line wins, and between equal adjustments the smaller resulting coordinate
//! wins.

use alloc::vec::Vec;

use log::trace;
#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Largest distance (canonical units) an edge may move when snapping.
pub const SNAP_TOLERANCE: f64 = 0.5;

/// Round `edge` to the nearest multiple of `spacing` from `line`.
///
/// A non-positive spacing snaps onto the line itself.
pub fn grid_round(edge: f64, line: f64, spacing: f64) -> f64 {
    if spacing > 0.0 {
        line + ((edge - line) / spacing).round() * spacing
    } else {
        line
    }
}

/// Reference line closest to `edge`; the smaller line on a tie.
pub fn nearest_line(edge: f64, lines: &[f64]) -> Option<f64> {
    lines.iter().copied().fold(None, |best, line| match best {
        None => Some(line),
        Some(b) => {
            let (d, db) = ((edge - line).abs(), (edge - b).abs());
            if d < db || (d == db && line < b) {
                Some(line)
            } else {
                Some(b)
            }
        }
    })
}

/// Snap a span `[start, start + len]`, returning the adjusted start.
///
/// Returns `start` unchanged when no edge is within tolerance.
pub fn snap_span(start: f64, len: f64, lines: &[f64], spacing: f64, tolerance: f64) -> f64 {
    let mut best: Option<(f64, f64)> = None;
    for edge_offset in [0.0, len] {
        let edge = start + edge_offset;
        let Some(line) = nearest_line(edge, lines) else {
            continue;
        };
        let target = grid_round(edge, line, spacing);
        let shift = (target - edge).abs();
        if shift > tolerance {
            continue;
        }
        let candidate = target - edge_offset;
        trace!("snap edge {edge:.3} → {target:.3} (line {line:.3}, shift {shift:.3})");
        best = match best {
            Some((s, c)) if s < shift || (s == shift && c <= candidate) => Some((s, c)),
            _ => Some((shift, candidate)),
        };
    }
    best.map_or(start, |(_, c)| c)
}

/// Snap a group of spans on one axis.
///
/// Every span snaps independently. If that would change the relative order
/// of any two spans that started at distinct positions, the adjustment of
/// the span at `lead` is applied rigidly to the whole group instead.
pub fn snap_group(
    spans: &[(f64, f64)],
    lead: usize,
    lines: &[f64],
    spacing: f64,
    tolerance: f64,
) -> Vec<f64> {
    let snapped: Vec<f64> = spans
        .iter()
        .map(|&(start, len)| snap_span(start, len, lines, spacing, tolerance))
        .collect();

    if preserves_order(spans, &snapped) {
        return snapped;
    }
    let Some(&(lead_start, _)) = spans.get(lead) else {
        return spans.iter().map(|&(start, _)| start).collect();
    };
    let shift = snapped[lead] - lead_start;
    trace!("independent snap reorders group; shifting rigidly by {shift:.3}");
    spans.iter().map(|&(start, _)| start + shift).collect()
}

fn preserves_order(before: &[(f64, f64)], after: &[f64]) -> bool {
    for i in 0..before.len() {
        for j in (i + 1)..before.len() {
            let was = before[i].0.partial_cmp(&before[j].0);
            let now = after[i].partial_cmp(&after[j]);
            if was != Some(core::cmp::Ordering::Equal) && was != now {
                return false;
            }
        }
    }
    true
}
