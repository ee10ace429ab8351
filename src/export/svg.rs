//! SVG serialization of polygon outlines.
//!
//! Polygon coordinates are mapped onto the canvas by fitting the bounding box
//! into the canvas minus a margin with one uniform scale, centering it, and
//! flipping y so that +y points up. Output is deterministic: coordinates are
//! printed with three fractional digits.

use std::path::Path;

use crate::error::ExportError;
use crate::geometry::Point;
use crate::math::TOLERANCE;
use crate::operations::query::{Aabb, BoundingBox};

/// Presentation attributes for exported outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
    /// Blank border, in canvas pixels, kept around the drawing on every side.
    pub margin: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            stroke: "black".to_owned(),
            stroke_width: 1.0,
            fill: "none".to_owned(),
            margin: 10.0,
        }
    }
}

/// Maps polygon coordinates to canvas coordinates.
#[derive(Debug, Clone, Copy)]
struct CanvasMap {
    scale: f64,
    source_center: Point,
    canvas_center: Point,
}

impl CanvasMap {
    fn fit(bounds: &Aabb, width: u32, height: u32, margin: f64) -> Self {
        let (w, h) = (f64::from(width), f64::from(height));
        let usable_w = (w - 2.0 * margin).max(1.0);
        let usable_h = (h - 2.0 * margin).max(1.0);

        let sx = (bounds.width() > TOLERANCE).then(|| usable_w / bounds.width());
        let sy = (bounds.height() > TOLERANCE).then(|| usable_h / bounds.height());
        let scale = match (sx, sy) {
            (Some(sx), Some(sy)) => sx.min(sy),
            (Some(s), None) | (None, Some(s)) => s,
            (None, None) => 1.0,
        };

        Self {
            scale,
            source_center: bounds.center(),
            canvas_center: Point::new(0.5 * w, 0.5 * h),
        }
    }

    fn apply(&self, p: &Point) -> Point {
        Point::new(
            self.canvas_center.x() + (p.x() - self.source_center.x()) * self.scale,
            self.canvas_center.y() - (p.y() - self.source_center.y()) * self.scale,
        )
    }
}

/// Renders a closed outline through `points` as a complete SVG document.
///
/// Three or more vertices produce a `<polygon>`, two a `<polyline>` and one a
/// `<circle>`; an empty vertex list produces an empty canvas.
///
/// # Errors
///
/// Returns `ExportError::InvalidCanvas` if `width` or `height` is zero.
pub fn render(
    points: &[Point],
    width: u32,
    height: u32,
    style: &SvgStyle,
) -> Result<String, ExportError> {
    if width == 0 || height == 0 {
        return Err(ExportError::InvalidCanvas { width, height });
    }

    let mut doc = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    );

    if let Some(bounds) = BoundingBox::new(points).execute() {
        let map = CanvasMap::fit(&bounds, width, height, style.margin);
        let mapped: Vec<Point> = points.iter().map(|p| map.apply(p)).collect();
        let paint = format!(
            "fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
            escape_attr(&style.fill),
            escape_attr(&style.stroke),
            style.stroke_width
        );

        let shape = match mapped.as_slice() {
            [single] => format!(
                "  <circle cx=\"{:.3}\" cy=\"{:.3}\" r=\"{}\" {paint}/>\n",
                single.x(),
                single.y(),
                style.stroke_width.max(1.0)
            ),
            [_, _] => format!("  <polyline points=\"{}\" {paint}/>\n", coord_list(&mapped)),
            _ => format!("  <polygon points=\"{}\" {paint}/>\n", coord_list(&mapped)),
        };
        doc.push_str(&shape);
    }

    doc.push_str("</svg>\n");
    Ok(doc)
}

/// Renders `points` and writes the document to `path`.
///
/// # Errors
///
/// Returns `ExportError::InvalidCanvas` for a zero-sized canvas, or
/// `ExportError::Io` if the file cannot be written.
pub fn write_svg(
    path: &Path,
    points: &[Point],
    width: u32,
    height: u32,
    style: &SvgStyle,
) -> Result<(), ExportError> {
    let doc = render(points, width, height, style)?;
    std::fs::write(path, doc)?;
    tracing::info!(path = %path.display(), vertices = points.len(), "exported svg");
    Ok(())
}

/// Escapes `&`, `<`, `>` and `"` for use inside a double-quoted attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn coord_list(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.3},{:.3}", p.x(), p.y()))
        .collect::<Vec<_>>()
        .join(" ")
}
