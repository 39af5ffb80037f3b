//! Canonical length unit, display units, and measurement formatting.
//!
//! All geometry in this crate is stored in inches. Centimeters exist only at
//! the presentation boundary: convert with [`to_display_unit`] right before
//! formatting, and with [`from_display_unit`] when reading user input.
//!
//! ```
//! use hangplan::units::{Unit, format_measurement, format_dimensions};
//!
//! assert_eq!(format_measurement(36.5, Unit::Inches), "36 1/2\"");
//! assert_eq!(format_measurement(36.0, Unit::Centimeters), "91.4 cm");
//! assert_eq!(format_dimensions(24.0, 18.0, Unit::Inches), "24 × 18\"");
//! ```

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Inch values are rounded to the nearest `1 / FRACTION_DENOMINATOR`.
pub const FRACTION_DENOMINATOR: u64 = 8;

/// User-facing length unit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    /// Inches, the canonical unit.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "in"))]
    Inches,
    /// Centimeters.
    #[cfg_attr(feature = "serde", serde(rename = "cm"))]
    Centimeters,
}

impl Unit {
    /// Short name, as stored by unit-preference collaborators.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inches => "in",
            Self::Centimeters => "cm",
        }
    }

    /// Display units per canonical unit.
    pub const fn factor(self) -> f64 {
        match self {
            Self::Inches => 1.0,
            Self::Centimeters => CM_PER_INCH,
        }
    }

    /// Suffix appended by [`format_measurement`].
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Inches => "\"",
            Self::Centimeters => " cm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit string was neither `in` nor `cm`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseUnitError;

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected unit \"in\" or \"cm\"")
    }
}

impl core::error::Error for ParseUnitError {}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" | "\"" => Ok(Self::Inches),
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeters),
            _ => Err(ParseUnitError),
        }
    }
}

/// Convert a canonical length to the display unit.
pub fn to_display_unit(value: f64, unit: Unit) -> f64 {
    value * unit.factor()
}

/// Convert a length entered in the display unit back to canonical inches.
pub fn from_display_unit(value: f64, unit: Unit) -> f64 {
    value / unit.factor()
}

/// Format a canonical length with unit-appropriate precision and suffix.
pub fn format_measurement(value: f64, unit: Unit) -> String {
    format!("{}{}", format_short(value, unit), unit.suffix())
}

/// Format a canonical length without a unit suffix.
pub fn format_short(value: f64, unit: Unit) -> String {
    match unit {
        Unit::Inches => format_fraction(value),
        Unit::Centimeters => {
            let mut tenths = (to_display_unit(value, unit) * 10.0).round() / 10.0;
            if tenths == 0.0 {
                // Clears the sign of -0.0.
                tenths = 0.0;
            }
            format!("{tenths:.1}")
        }
    }
}

/// Format `W × H` with a single trailing suffix.
pub fn format_dimensions(width: f64, height: f64, unit: Unit) -> String {
    format!(
        "{} × {}{}",
        format_short(width, unit),
        format_short(height, unit),
        unit.suffix()
    )
}

/// Magnitudes from here up have no representable eighths; they are printed
/// as whole numbers straight from the float.
const WHOLE_ONLY: f64 = (1u64 << 50) as f64;

/// Mixed fraction in eighths, reduced: `36`, `36 1/2`, `3/8`, `-1 1/4`.
fn format_fraction(value: f64) -> String {
    if value.abs() >= WHOLE_ONLY {
        return format!("{:.0}", value.round());
    }
    let eighths = (value.abs() * FRACTION_DENOMINATOR as f64).round() as u64;
    let whole = eighths / FRACTION_DENOMINATOR;
    let rem = eighths % FRACTION_DENOMINATOR;
    let sign = if value < 0.0 && eighths != 0 { "-" } else { "" };

    if rem == 0 {
        return format!("{sign}{whole}");
    }
    let g = gcd(rem, FRACTION_DENOMINATOR);
    let (num, den) = (rem / g, FRACTION_DENOMINATOR / g);
    if whole == 0 {
        format!("{sign}{num}/{den}")
    } else {
        format!("{sign}{whole} {num}/{den}")
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── conversion ──────────────────────────────────────────────────────

    #[test]
    fn inches_are_identity() {
        assert_eq!(to_display_unit(36.0, Unit::Inches), 36.0);
        assert_eq!(from_display_unit(36.0, Unit::Inches), 36.0);
    }

    #[test]
    fn centimeters_scale_by_factor() {
        assert!((to_display_unit(10.0, Unit::Centimeters) - 25.4).abs() < 1e-12);
        let back = from_display_unit(25.4, Unit::Centimeters);
        assert!((back - 10.0).abs() < 1e-12);
    }

    // ── inch formatting ─────────────────────────────────────────────────

    #[test]
    fn whole_inches() {
        assert_eq!(format_measurement(36.0, Unit::Inches), "36\"");
        assert_eq!(format_measurement(0.0, Unit::Inches), "0\"");
    }

    #[test]
    fn fractions_are_reduced() {
        assert_eq!(format_short(36.5, Unit::Inches), "36 1/2");
        assert_eq!(format_short(36.25, Unit::Inches), "36 1/4");
        assert_eq!(format_short(0.375, Unit::Inches), "3/8");
        assert_eq!(format_short(12.875, Unit::Inches), "12 7/8");
    }

    #[test]
    fn rounds_to_nearest_eighth() {
        // 0.06 in = 0.48 eighths → 0
        assert_eq!(format_short(10.06, Unit::Inches), "10");
        // 0.07 in = 0.56 eighths → 1/8
        assert_eq!(format_short(10.07, Unit::Inches), "10 1/8");
        // 0.99 rounds up to the next whole inch.
        assert_eq!(format_short(10.99, Unit::Inches), "11");
    }

    #[test]
    fn negative_inches_keep_sign() {
        assert_eq!(format_measurement(-1.25, Unit::Inches), "-1 1/4\"");
        assert_eq!(format_short(-0.5, Unit::Inches), "-1/2");
        // Rounds to zero: no sign.
        assert_eq!(format_short(-0.01, Unit::Inches), "0");
    }

    #[test]
    fn huge_inches_print_whole() {
        assert_eq!(format_short(1e20, Unit::Inches), "100000000000000000000");
        assert_eq!(format_short(-1e20, Unit::Inches), "-100000000000000000000");
        let huge = format_short(1e300, Unit::Inches);
        assert_eq!(huge.len(), 301);
        assert!(huge.starts_with("10000000000000000"));
        assert!(huge.bytes().all(|b| b.is_ascii_digit()));
    }

    // ── centimeter formatting ───────────────────────────────────────────

    #[test]
    fn centimeters_one_decimal() {
        assert_eq!(format_measurement(36.0, Unit::Centimeters), "91.4 cm");
        assert_eq!(format_short(10.0, Unit::Centimeters), "25.4");
        assert_eq!(format_short(0.0, Unit::Centimeters), "0.0");
    }

    #[test]
    fn negative_centimeters() {
        assert_eq!(format_short(-10.0, Unit::Centimeters), "-25.4");
        assert_eq!(format_short(-0.01, Unit::Centimeters), "0.0");
    }

    #[test]
    fn dimensions_share_one_suffix() {
        assert_eq!(format_dimensions(24.0, 18.5, Unit::Inches), "24 × 18 1/2\"");
        assert_eq!(format_dimensions(10.0, 20.0, Unit::Centimeters), "25.4 × 50.8 cm");
    }

    // ── unit strings ────────────────────────────────────────────────────

    #[test]
    fn parse_unit_strings() {
        assert_eq!("in".parse::<Unit>(), Ok(Unit::Inches));
        assert_eq!(" CM ".parse::<Unit>(), Ok(Unit::Centimeters));
        assert_eq!("ft".parse::<Unit>(), Err(ParseUnitError));
        assert_eq!(Unit::Centimeters.as_str(), "cm");
        assert_eq!(format!("{}", Unit::Inches), "in");
    }
}
