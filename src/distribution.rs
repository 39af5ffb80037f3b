//! One-axis distribution of equally sized items within a span.
//!
//! Mirrors CSS `justify-content` for the stretching policies, plus a
//! `Fixed` policy that keeps the caller's gap and leaves placement of the
//! resulting block to the [anchor resolver](crate::anchor).
//!
//! ```
//! use hangplan::distribution::{Distribution, distribute};
//!
//! // Three 20" frames spread across a 96" wall.
//! let d = distribute(96.0, 20.0, 3, 2.0, Distribution::SpaceBetween);
//! assert_eq!(d.gap, 18.0);
//! assert_eq!(d.offsets, vec![0.0, 38.0, 76.0]);
//! ```

use alloc::vec::Vec;

/// How leftover span is allocated among gaps.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Distribution {
    /// Items separated by exactly the gap hint. The block is not stretched.
    #[default]
    Fixed,
    /// First item at the near edge, last item at the far edge, equal gaps
    /// between.
    SpaceBetween,
    /// Equal gaps before, between, and after the items.
    SpaceEvenly,
    /// Equal gaps between items; half-size gaps at the edges.
    SpaceAround,
}

impl Distribution {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::SpaceBetween => "space-between",
            Self::SpaceEvenly => "space-evenly",
            Self::SpaceAround => "space-around",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Some(Self::Fixed),
            "space-between" | "between" => Some(Self::SpaceBetween),
            "space-evenly" | "evenly" => Some(Self::SpaceEvenly),
            "space-around" | "around" => Some(Self::SpaceAround),
            _ => None,
        }
    }

    /// Whether the block always occupies the whole span.
    pub const fn stretches(self) -> bool {
        !matches!(self, Self::Fixed)
    }
}

/// Result of distributing items along one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Distributed {
    /// Item start offsets relative to the start of the block, in order.
    pub offsets: Vec<f64>,
    /// Gap between adjacent items.
    pub gap: f64,
    /// Length of the block, including any edge gaps.
    pub extent: f64,
}

impl Distributed {
    /// Space before the first item inside the block.
    pub fn leading(&self) -> f64 {
        self.offsets.first().copied().unwrap_or(0.0)
    }
}

/// Compute start offsets for `count` items of `size` along `span`.
///
/// Never fails: when the items don't fit, stretching policies produce
/// negative gaps and the block overflows.
pub fn distribute(
    span: f64,
    size: f64,
    count: usize,
    gap_hint: f64,
    policy: Distribution,
) -> Distributed {
    if count == 0 {
        return Distributed {
            offsets: Vec::new(),
            gap: 0.0,
            extent: 0.0,
        };
    }

    let n = count as f64;
    let free = span - n * size;
    let (leading, gap, extent) = match policy {
        Distribution::Fixed => (0.0, gap_hint, n * size + (n - 1.0) * gap_hint),
        // A lone item has no interior gap; center it.
        Distribution::SpaceBetween if count == 1 => (free / 2.0, 0.0, span),
        Distribution::SpaceBetween => (0.0, free / (n - 1.0), span),
        Distribution::SpaceEvenly => {
            let gap = free / (n + 1.0);
            (gap, gap, span)
        }
        Distribution::SpaceAround => {
            let gap = free / n;
            (gap / 2.0, gap, span)
        }
    };

    let pitch = size + gap;
    let offsets = (0..count).map(|i| leading + i as f64 * pitch).collect();
    Distributed {
        offsets,
        gap,
        extent,
    }
}
