// Copyright 2026 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrawl SVG: deterministic vector serialization of captured strokes.
//!
//! This crate turns a finalized stroke collection plus a [`Surface`]
//! description into a single, self-contained SVG document:
//!
//! - the root element is sized and view-boxed to the surface dimensions;
//! - one `<image>` element references the background and covers the full
//!   surface (always the bottom layer);
//! - each stroke with at least 2 points becomes one `<path>` in collection
//!   order, visiting its points with straight `L` segments (no curve
//!   fitting, no smoothing). Later strokes paint over earlier ones.
//!
//! Strokes with fewer than 2 points (taps) are silently omitted: a single
//! point has no renderable path.
//!
//! Serialization is a pure function of its inputs. Coordinates are written
//! with Rust's shortest round-trip `f64` formatting, so two serializations
//! of the same state are byte-identical and captured precision is never
//! rounded away.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use scrawl_capture::stroke::Stroke;
//! use scrawl_svg::{InkStyle, Surface, to_svg};
//!
//! let surface = Surface::new(800, 600, "field_map.svg");
//! let stroke = Stroke::from_points(vec![
//!     Point::new(10.0, 10.0),
//!     Point::new(20.0, 10.0),
//!     Point::new(20.0, 20.0),
//! ]);
//!
//! let doc = to_svg(&surface, &[stroke], &InkStyle::default());
//! assert!(doc.as_str().contains("M10 10L20 10L20 20"));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt::Write as _;
use peniko::Color;
use scrawl_capture::stroke::Stroke;

/// The logical drawing surface a stroke collection was captured on.
///
/// Width and height are the surface's logical pixel dimensions (positive).
/// The background is an opaque reference to the asset painted under the
/// strokes (a URI or relative path); the serializer never interprets it
/// beyond escaping it for XML attribute use. Immutable for the lifetime of
/// one widget instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    background: String,
}

impl Surface {
    /// Creates a surface descriptor from logical dimensions and a background
    /// reference.
    #[must_use]
    pub fn new(width: u32, height: u32, background: impl Into<String>) -> Self {
        Self {
            width,
            height,
            background: background.into(),
        }
    }

    /// Returns the surface width in logical pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the surface height in logical pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the opaque background reference.
    #[must_use]
    pub fn background(&self) -> &str {
        &self.background
    }
}

/// The fixed appearance shared by every serialized stroke path.
///
/// Strokes are rendered as solid-color open polylines with round caps and
/// joins. There is no per-stroke styling; the whole drawing uses one ink.
#[derive(Clone, Debug, PartialEq)]
pub struct InkStyle {
    /// Solid stroke color.
    pub color: Color,
    /// Stroke width in surface units.
    pub width: f64,
}

impl Default for InkStyle {
    /// Red ink, 2 units wide.
    fn default() -> Self {
        Self {
            color: Color::from_rgba8(255, 0, 0, 255),
            width: 2.0,
        }
    }
}

/// A serialized vector document: an immutable snapshot value.
///
/// Once produced, a document never changes; resetting or continuing the
/// capture affects only future serializations. The content is a complete
/// standalone SVG image consumable by any standard renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgDocument(String);

impl SvgDocument {
    /// Returns the document text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the snapshot, returning the document text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for SvgDocument {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl core::fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serializes `strokes` over `surface`'s background into an SVG document.
///
/// Pure and deterministic: callable at any time (including mid-capture,
/// since an in-progress stroke is never part of the finalized collection)
/// and byte-identical across repeated calls on unchanged state. The
/// document's path count equals the number of non-degenerate strokes; path
/// order equals collection order; paths are never merged.
#[must_use]
pub fn to_svg(surface: &Surface, strokes: &[Stroke], ink: &InkStyle) -> SvgDocument {
    let width = surface.width();
    let height = surface.height();

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    let _ = write!(
        svg,
        "<image href=\"{}\" x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\"/>",
        escape_attr(surface.background())
    );

    let style = ink_style_attrs(ink);
    for stroke in strokes {
        if stroke.is_degenerate() {
            continue;
        }
        let _ = write!(svg, "<path d=\"{}\"{style}/>", stroke_to_svg_d(stroke));
    }

    svg.push_str("</svg>");
    SvgDocument(svg)
}

fn stroke_to_svg_d(stroke: &Stroke) -> String {
    let mut d = String::new();
    let mut points = stroke.points().iter();
    if let Some(first) = points.next() {
        let _ = write!(d, "M{} {}", fmt_coord(first.x), fmt_coord(first.y));
    }
    for p in points {
        let _ = write!(d, "L{} {}", fmt_coord(p.x), fmt_coord(p.y));
    }
    d
}

fn ink_style_attrs(ink: &InkStyle) -> String {
    let mut out = String::new();
    let (rgb, a) = color_to_svg(ink.color);
    let _ = write!(out, " fill=\"none\" stroke=\"{rgb}\"");
    if a < 1.0 {
        let _ = write!(out, " stroke-opacity=\"{}\"", fmt_coord(f64::from(a)));
    }
    let _ = write!(out, " stroke-width=\"{}\"", fmt_coord(ink.width));
    out.push_str(" stroke-linecap=\"round\" stroke-linejoin=\"round\"");
    out
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

/// Formats a coordinate with shortest round-trip `f64` formatting.
///
/// Whole values print bare (`10`, not `10.0`); fractional values keep every
/// captured digit. The same value always produces the same text.
fn fmt_coord(v: f64) -> String {
    if v == v.trunc() && v.is_finite() && v.abs() < 1e15 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by trunc/range check above"
        )]
        return (v as i64).to_string();
    }
    format!("{v}")
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
