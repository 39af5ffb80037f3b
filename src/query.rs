//! Share links: a [`CalculatorState`] as a URL query string.
//!
//! Parsing never fails. Unknown keys, unparseable values, and repeated keys
//! are reported as [`ParseWarning`]s and the affected setting keeps its
//! default (or, for repeats, the last value).
//!
//! ```
//! use hangplan::query;
//!
//! let result = query::parse("?wall=96x72&count=1&frame=24x18&offset=4");
//! assert!(result.warnings.is_empty());
//!
//! let frame = &result.state.positions()[0];
//! assert_eq!(frame.measurements.from_left, 48.0);
//! assert_eq!(frame.measurements.from_floor, 60.0);
//!
//! let link = query::to_query(&result.state);
//! assert_eq!(query::parse(&link).state, result.state);
//! ```
//!
//! # Keys
//!
//! | key | value | default |
//! |-----|-------|---------|
//! | `wall` | `WxH` | `120x96` |
//! | `layout` | `row`, `grid`, `gallery` | `row` |
//! | `count`, `cols` | frame count, grid columns | `3`, auto |
//! | `frame`, `offset` | `WxH`, hanging offset | `16x20`, `3` |
//! | `hang`, `inset` | `single`/`dual`, dual hook inset | `single`, `0` |
//! | `gap`, `vgap` | column and row gaps | `3` |
//! | `dist`, `vdist` | `fixed`, `space-between`, `space-evenly`, `space-around` | `fixed` |
//! | `ha`, `hv` | horizontal anchor and offset | `center`, `0` |
//! | `va`, `vv` | vertical anchor and offset | `floor`, `60` |
//! | `line` | `hooks`, `edge` | `hooks` |
//! | `furn`, `fa`, `fo`, `fcenter` | furniture size, anchor, offset, centering | none |
//! | `spacing`, `snap` | gallery snapping gap and toggle | `2`, `1` |
//! | `f` | `name,w,h,offset,x,y`, repeated per gallery frame | none |
//!
//! Gallery frames are renumbered from zero in link order.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::anchor::{AnchorLine, AnchorSpec, Furniture, HorizontalAnchor, VerticalAnchor};
use crate::distribution::Distribution;
use crate::gallery::Gallery;
use crate::geometry::{FrameSpec, HangingSpec, HangingType, Point, WallSpec};
use crate::regular::{Arrangement, RegularLayout, Spacing};
use crate::state::{CalculatorState, LayoutKind, LayoutType};

/// Result of parsing a share query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub state: CalculatorState,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key this codec does not know.
    KeyNotRecognized { key: String, value: String },
    /// A known key whose value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a share query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let mut fields = Fields::default();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        if key == "f" {
            match parse_gallery_frame(raw_value) {
                Some(frame) => fields.frames.push(frame),
                None => warnings.push(ParseWarning::ValueInvalid {
                    key: "f",
                    value: percent_decode(raw_value),
                    reason: "expected name,w,h,offset,x,y",
                }),
            }
            continue;
        }
        let value = percent_decode(raw_value);
        dispatch_key(&key, &value, &mut fields, &mut warnings);
    }

    let state = fields.into_state(&mut warnings);
    ParseResult { state, warnings }
}

/// Encode `state` as a query string without a leading `?`.
///
/// Every setting relevant to the layout kind is written, so the link does
/// not depend on this crate's defaults.
pub fn to_query(state: &CalculatorState) -> String {
    let mut pairs: Vec<String> = Vec::new();
    pairs.push(format!("wall={}x{}", state.wall.width, state.wall.height));
    pairs.push(format!("layout={}", state.layout_type().as_str()));

    match &state.layout {
        LayoutKind::Regular(r) => {
            pairs.push(format!("count={}", r.frame_count));
            if let Arrangement::Grid { columns: Some(c) } = r.arrangement {
                pairs.push(format!("cols={c}"));
            }
            pairs.push(format!("frame={}x{}", r.frame.width, r.frame.height));
            pairs.push(format!("offset={}", r.frame.hanging_offset));
            push_hanging(&mut pairs, &r.hanging);
            pairs.push(format!("gap={}", r.spacing.horizontal));
            pairs.push(format!("vgap={}", r.spacing.vertical));
            pairs.push(format!("dist={}", r.distribution.as_str()));
            pairs.push(format!("vdist={}", r.vertical_distribution.as_str()));

            let a = &r.anchor;
            pairs.push(format!("ha={}", a.horizontal.as_str()));
            pairs.push(format!("hv={}", a.horizontal_offset));
            pairs.push(format!("va={}", a.vertical.as_str()));
            pairs.push(format!("vv={}", a.vertical_offset));
            pairs.push(format!("line={}", a.line.as_str()));
            if let Some(f) = &a.furniture {
                pairs.push(format!("furn={}x{}", f.width, f.height));
                pairs.push(format!("fa={}", f.anchor.as_str()));
                pairs.push(format!("fo={}", f.offset));
                pairs.push(format!("fcenter={}", u8::from(f.center_block)));
            }
        }
        LayoutKind::Freeform(g) => {
            push_hanging(&mut pairs, &g.hanging);
            pairs.push(format!("spacing={}", g.spacing));
            pairs.push(format!("snap={}", u8::from(g.snap)));
            for f in &g.frames {
                pairs.push(format!(
                    "f={},{},{},{},{},{}",
                    percent_encode(&f.name),
                    f.width,
                    f.height,
                    f.hanging_offset,
                    f.x,
                    f.y
                ));
            }
        }
    }
    pairs.join("&")
}

fn push_hanging(pairs: &mut Vec<String>, hanging: &HangingSpec) {
    pairs.push(format!("hang={}", hanging.kind.as_str()));
    pairs.push(format!("inset={}", hanging.hook_inset));
}

// ---- Collected fields ----

/// One gallery frame read from an `f` pair.
#[derive(Debug, Clone, PartialEq)]
struct LinkedFrame {
    name: String,
    spec: FrameSpec,
    at: Point,
}

#[derive(Debug, Default)]
struct Fields {
    wall: Option<(f64, f64)>,
    layout: Option<LayoutType>,
    count: Option<usize>,
    cols: Option<usize>,
    frame: Option<(f64, f64)>,
    offset: Option<f64>,
    hang: Option<HangingType>,
    inset: Option<f64>,
    gap: Option<f64>,
    vgap: Option<f64>,
    dist: Option<Distribution>,
    vdist: Option<Distribution>,
    ha: Option<HorizontalAnchor>,
    hv: Option<f64>,
    va: Option<VerticalAnchor>,
    vv: Option<f64>,
    line: Option<AnchorLine>,
    furn: Option<(f64, f64)>,
    fa: Option<HorizontalAnchor>,
    fo: Option<f64>,
    fcenter: Option<bool>,
    spacing: Option<f64>,
    snap: Option<bool>,
    frames: Vec<LinkedFrame>,
}

impl Fields {
    fn into_state(self, warnings: &mut Vec<ParseWarning>) -> CalculatorState {
        let wall = self
            .wall
            .map_or_else(WallSpec::default, |(w, h)| WallSpec::new(w, h));
        let hanging = HangingSpec {
            kind: self.hang.unwrap_or_default(),
            hook_inset: self.inset.unwrap_or(HangingSpec::default().hook_inset),
        };

        let layout = self.layout.unwrap_or_default();
        if layout == LayoutType::Gallery {
            let defaults = Gallery::new();
            let (spacing, snap) = (defaults.spacing, defaults.snap);
            let mut gallery = defaults
                .hanging(hanging)
                .spacing(self.spacing.unwrap_or(spacing))
                .snap(self.snap.unwrap_or(snap));
            for f in self.frames {
                gallery = gallery.add_frame(f.spec, f.name, f.at);
            }
            return CalculatorState::gallery(wall, gallery);
        }

        for f in &self.frames {
            warnings.push(ParseWarning::ValueInvalid {
                key: "f",
                value: f.name.clone(),
                reason: "frames apply only to gallery layouts",
            });
        }

        let defaults = RegularLayout::default();
        let arrangement = match layout {
            LayoutType::Grid => Arrangement::Grid { columns: self.cols },
            _ => Arrangement::Row,
        };
        let frame = match self.frame {
            Some((w, h)) => FrameSpec::new(w, h, defaults.frame.hanging_offset),
            None => defaults.frame,
        };
        let frame = FrameSpec {
            hanging_offset: self.offset.unwrap_or(frame.hanging_offset),
            ..frame
        };

        let base = AnchorSpec::default();
        let mut anchor = base
            .horizontal(
                self.ha.unwrap_or(base.horizontal),
                self.hv.unwrap_or(base.horizontal_offset),
            )
            .vertical(
                self.va.unwrap_or(base.vertical),
                self.vv.unwrap_or(base.vertical_offset),
            )
            .line(self.line.unwrap_or(base.line));
        if self.furn.is_none() {
            let orphans = [
                ("fa", self.fa.map(|a| String::from(a.as_str()))),
                ("fo", self.fo.map(|o| format!("{o}"))),
                ("fcenter", self.fcenter.map(|c| format!("{}", u8::from(c)))),
            ];
            for (key, value) in orphans {
                if let Some(value) = value {
                    warnings.push(ParseWarning::ValueInvalid {
                        key,
                        value,
                        reason: "furniture placement needs furn=WxH",
                    });
                }
            }
        }
        anchor.furniture = self.furn.map(|(w, h)| {
            let f = Furniture::new(w, h).placed(
                self.fa.unwrap_or(HorizontalAnchor::Center),
                self.fo.unwrap_or(0.0),
            );
            if self.fcenter == Some(false) {
                f.uncentered()
            } else {
                f
            }
        });

        CalculatorState::regular(
            wall,
            RegularLayout {
                arrangement,
                frame_count: self.count.unwrap_or(defaults.frame_count),
                frame,
                hanging,
                spacing: Spacing {
                    horizontal: self.gap.unwrap_or(defaults.spacing.horizontal),
                    vertical: self.vgap.unwrap_or(defaults.spacing.vertical),
                },
                distribution: self.dist.unwrap_or(defaults.distribution),
                vertical_distribution: self.vdist.unwrap_or(defaults.vertical_distribution),
                anchor,
            },
        )
    }
}

fn dispatch_key(key: &str, value: &str, f: &mut Fields, warnings: &mut Vec<ParseWarning>) {
    // (field, parsed, canonical key, reason when unparseable)
    macro_rules! field {
        ($slot:expr, $parsed:expr, $name:literal, $reason:literal) => {
            match $parsed {
                Some(v) => set_or_warn(&mut $slot, v, key, value, warnings),
                None => warnings.push(ParseWarning::ValueInvalid {
                    key: $name,
                    value: String::from(value),
                    reason: $reason,
                }),
            }
        };
    }

    match key {
        // Wall
        "wall" => field!(f.wall, parse_size(value), "wall", "expected WxH"),

        // Layout
        "layout" => field!(
            f.layout,
            LayoutType::parse(value),
            "layout",
            "expected row|grid|gallery"
        ),
        "count" => field!(f.count, parse_count(value), "count", "expected a whole number"),
        "cols" => field!(
            f.cols,
            parse_count(value).filter(|&c| c > 0),
            "cols",
            "expected a positive whole number"
        ),

        // Frames
        "frame" => field!(f.frame, parse_size(value), "frame", "expected WxH"),
        "offset" => field!(f.offset, parse_length(value), "offset", "expected a length"),
        "hang" => field!(f.hang, HangingType::parse(value), "hang", "expected single|dual"),
        "inset" => field!(f.inset, parse_length(value), "inset", "expected a length"),

        // Spacing
        "gap" => field!(f.gap, parse_length(value), "gap", "expected a length"),
        "vgap" => field!(f.vgap, parse_length(value), "vgap", "expected a length"),
        "dist" => field!(
            f.dist,
            Distribution::parse(value),
            "dist",
            "expected fixed|space-between|space-evenly|space-around"
        ),
        "vdist" => field!(
            f.vdist,
            Distribution::parse(value),
            "vdist",
            "expected fixed|space-between|space-evenly|space-around"
        ),

        // Anchor
        "ha" => field!(
            f.ha,
            HorizontalAnchor::parse(value),
            "ha",
            "expected left|center|right"
        ),
        "hv" => field!(f.hv, parse_length(value), "hv", "expected a length"),
        "va" => field!(
            f.va,
            VerticalAnchor::parse(value),
            "va",
            "expected floor|ceiling|center|furniture"
        ),
        "vv" => field!(f.vv, parse_length(value), "vv", "expected a length"),
        "line" => field!(f.line, AnchorLine::parse(value), "line", "expected hooks|edge"),

        // Furniture
        "furn" => field!(f.furn, parse_size(value), "furn", "expected WxH"),
        "fa" => field!(
            f.fa,
            HorizontalAnchor::parse(value),
            "fa",
            "expected left|center|right"
        ),
        "fo" => field!(f.fo, parse_length(value), "fo", "expected a length"),
        "fcenter" => field!(f.fcenter, parse_bool(value), "fcenter", "expected 1|0"),

        // Gallery
        "spacing" => field!(f.spacing, parse_length(value), "spacing", "expected a length"),
        "snap" => field!(f.snap, parse_bool(value), "snap", "expected 1|0"),

        _ => warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        }),
    }
}

fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: T,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if field.is_some() {
        warnings.push(ParseWarning::DuplicateKey {
            key: String::from(key),
            value: String::from(value),
        });
    }
    *field = Some(parsed);
}

// ---- Value parsers ----

fn parse_length(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_count(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok()
}

/// `WxH` with positive dimensions; `x`, `X`, or `×` separated.
fn parse_size(s: &str) -> Option<(f64, f64)> {
    let (w, h) = s.split_once(['x', 'X', '×'])?;
    let (w, h) = (parse_length(w)?, parse_length(h)?);
    (w > 0.0 && h > 0.0).then_some((w, h))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `name,w,h,offset,x,y`, split before decoding so names may hold commas.
fn parse_gallery_frame(raw: &str) -> Option<LinkedFrame> {
    let parts: Vec<String> = raw.split(',').map(percent_decode).collect();
    let [name, w, h, offset, x, y] = parts.as_slice() else {
        return None;
    };
    let (width, height) = (parse_length(w)?, parse_length(h)?);
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(LinkedFrame {
        name: name.clone(),
        spec: FrameSpec::new(width, height, parse_length(offset)?),
        at: Point::new(parse_length(x)?, parse_length(y)?),
    })
}

// ---- Tokenizer ----

fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component as UTF-8. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    out.push(hi << 4 | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Percent-encode everything but unreserved characters; spaces become '+'.
fn percent_encode(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(HEX[usize::from(b >> 4)] as char);
                out.push(HEX[usize::from(b & 0xF)] as char);
            }
        }
    }
    out
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── tokenizer ───────────────────────────────────────────────────────

    #[test]
    fn decodes_plus_and_percent() {
        assert_eq!(percent_decode("Living+room%20wall"), "Living room wall");
        assert_eq!(percent_decode("%E2%9C%93"), "✓");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    #[test]
    fn encodes_reserved_bytes() {
        assert_eq!(percent_encode("Mom & Dad, 1990"), "Mom+%26+Dad%2C+1990");
        assert_eq!(percent_decode(&percent_encode("a,b=c&d ✓")), "a,b=c&d ✓");
    }

    #[test]
    fn pair_without_value() {
        assert_eq!(split_pair("snap"), ("snap", ""));
        assert_eq!(split_pair("a=b=c"), ("a", "b=c"));
    }

    // ── parsing ─────────────────────────────────────────────────────────

    #[test]
    fn empty_query_is_default_state() {
        let r = parse("");
        assert!(r.warnings.is_empty());
        assert_eq!(r.state, CalculatorState::default());
        assert_eq!(parse("?").state, CalculatorState::default());
    }

    #[test]
    fn regular_keys() {
        let r = parse("wall=96x72&layout=grid&count=4&cols=2&frame=20X16&offset=3&dist=between&va=ceiling&vv=12&line=edge");
        assert!(r.warnings.is_empty(), "{:?}", r.warnings);
        assert_eq!(r.state.wall, WallSpec::new(96.0, 72.0));
        let LayoutKind::Regular(layout) = &r.state.layout else {
            panic!("expected a regular layout");
        };
        assert_eq!(layout.arrangement, Arrangement::Grid { columns: Some(2) });
        assert_eq!(layout.frame_count, 4);
        assert_eq!(layout.frame, FrameSpec::new(20.0, 16.0, 3.0));
        assert_eq!(layout.distribution, Distribution::SpaceBetween);
        assert_eq!(layout.anchor.vertical, VerticalAnchor::Ceiling);
        assert_eq!(layout.anchor.vertical_offset, 12.0);
        assert_eq!(layout.anchor.line, AnchorLine::Edge);
    }

    #[test]
    fn furniture_keys() {
        let r = parse("va=furniture&vv=10&furn=60x30&fa=left&fo=6&fcenter=0");
        assert!(r.warnings.is_empty(), "{:?}", r.warnings);
        let LayoutKind::Regular(layout) = &r.state.layout else {
            panic!("expected a regular layout");
        };
        let f = layout.anchor.furniture.unwrap();
        assert_eq!((f.width, f.height, f.offset), (60.0, 30.0, 6.0));
        assert_eq!(f.anchor, HorizontalAnchor::Left);
        assert!(!f.center_block);
    }

    #[test]
    fn gallery_frames() {
        let r = parse("layout=gallery&snap=0&spacing=1.5&f=Mom+%26+Dad%2C+1990,20,16,3,10,12&f=B,8,10,2,40,12");
        assert!(r.warnings.is_empty(), "{:?}", r.warnings);
        let g = r.state.as_gallery().unwrap();
        assert!(!g.snap);
        assert_eq!(g.spacing, 1.5);
        assert_eq!(g.frames.len(), 2);
        assert_eq!(g.frames[0].name, "Mom & Dad, 1990");
        assert_eq!((g.frames[1].id, g.frames[1].x, g.frames[1].width), (1, 40.0, 8.0));
    }

    // ── warnings ────────────────────────────────────────────────────────

    #[test]
    fn unknown_key_warns() {
        let r = parse("color=red");
        assert_eq!(
            r.warnings,
            [ParseWarning::KeyNotRecognized {
                key: "color".into(),
                value: "red".into()
            }]
        );
    }

    #[test]
    fn invalid_value_keeps_default() {
        let r = parse("count=lots&wall=0x96&dist=wide");
        assert_eq!(r.warnings.len(), 3);
        assert!(matches!(
            r.warnings[0],
            ParseWarning::ValueInvalid { key: "count", .. }
        ));
        assert!(matches!(r.warnings[1], ParseWarning::ValueInvalid { key: "wall", .. }));
        assert_eq!(r.state, CalculatorState::default());
    }

    #[test]
    fn duplicate_key_last_wins() {
        let r = parse("count=2&count=5");
        assert_eq!(
            r.warnings,
            [ParseWarning::DuplicateKey {
                key: "count".into(),
                value: "5".into()
            }]
        );
        assert_eq!(r.state.positions().len(), 5);
    }

    #[test]
    fn malformed_gallery_frame_warns() {
        let r = parse("layout=gallery&f=A,20,16");
        assert!(matches!(r.warnings[0], ParseWarning::ValueInvalid { key: "f", .. }));
        assert!(r.state.as_gallery().unwrap().frames.is_empty());
    }

    #[test]
    fn gallery_frames_ignored_for_rows() {
        let r = parse("f=A,20,16,3,0,0");
        assert_eq!(r.warnings.len(), 1);
        assert_eq!(r.state.positions().len(), 3);
    }

    #[test]
    fn furniture_placement_without_furniture_warns() {
        let r = parse("va=furniture&fa=left&fo=6&fcenter=0");
        assert_eq!(
            r.warnings,
            [
                ParseWarning::ValueInvalid {
                    key: "fa",
                    value: "left".into(),
                    reason: "furniture placement needs furn=WxH",
                },
                ParseWarning::ValueInvalid {
                    key: "fo",
                    value: "6".into(),
                    reason: "furniture placement needs furn=WxH",
                },
                ParseWarning::ValueInvalid {
                    key: "fcenter",
                    value: "0".into(),
                    reason: "furniture placement needs furn=WxH",
                },
            ]
        );
        let LayoutKind::Regular(layout) = &r.state.layout else {
            panic!("expected a regular layout");
        };
        assert_eq!(layout.anchor.furniture, None);
    }

    // ── encoding ────────────────────────────────────────────────────────

    #[test]
    fn default_state_link() {
        assert_eq!(
            to_query(&CalculatorState::default()),
            "wall=120x96&layout=row&count=3&frame=16x20&offset=3&hang=single&inset=0\
             &gap=3&vgap=3&dist=fixed&vdist=fixed&ha=center&hv=0&va=floor&vv=60&line=hooks"
        );
    }

    #[test]
    fn gallery_round_trip() {
        let state = CalculatorState::gallery(
            WallSpec::new(96.0, 72.0),
            Gallery::new()
                .hanging(HangingSpec::dual(1.5))
                .add_frame(FrameSpec::new(20.0, 16.0, 3.0), "Left, top", Point::new(10.5, 8.0))
                .add_frame(FrameSpec::new(12.0, 12.0, 2.0), "B", Point::new(40.0, 8.0)),
        );
        let r = parse(&to_query(&state));
        assert!(r.warnings.is_empty(), "{:?}", r.warnings);
        assert_eq!(r.state, state);
    }
}
