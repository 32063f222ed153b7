//! The drawing-surface capability shapes render into.
//!
//! Rasterization, anti-aliasing, font shaping and encoding belong to the
//! surface. Shapes only decide what to draw, with which pen, and in which
//! order.

use std::fmt;

use glam::DVec2;

use crate::types::Color;

/// Stroke parameters for a polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f64,
    /// Dash pattern as alternating on/off lengths, in multiples of the width
    pub dash: Option<&'static [f64]>,
}

impl Pen {
    pub const fn solid(color: Color, width: f64) -> Self {
        Pen { color, width, dash: None }
    }

    pub const fn dashed(color: Color, width: f64, dash: &'static [f64]) -> Self {
        Pen { color, width, dash: Some(dash) }
    }
}

/// Font descriptor for labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// `None` selects the surface's default family
    pub family: Option<&'static str>,
    pub size: f64,
    pub bold: bool,
}

/// A 2-D canvas that accepts stroke, fill and text primitives.
///
/// Implementations are not expected to be safe for concurrent writes; one
/// tile renders into one surface, sequentially.
pub trait DrawingSurface {
    fn stroke_polyline(&mut self, points: &[DVec2], pen: &Pen);

    fn fill_polygon(&mut self, points: &[DVec2], color: Color);

    fn draw_text(&mut self, text: &str, position: DVec2, font: &Font, color: Color);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Stroke { points: Vec<DVec2>, pen: Pen },
    Fill { points: Vec<DVec2>, color: Color },
    Text { text: String, position: DVec2, font: Font, color: Color },
}

fn write_points(f: &mut fmt::Formatter<'_>, points: &[DVec2]) -> fmt::Result {
    write!(f, "[")?;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "({},{})", p.x, p.y)?;
    }
    write!(f, "]")
}

impl fmt::Display for DrawCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCall::Stroke { points, pen } => {
                write!(f, "stroke {} w={}", pen.color, pen.width)?;
                if let Some(dash) = pen.dash {
                    let dash: Vec<String> = dash.iter().map(|d| d.to_string()).collect();
                    write!(f, " dash=[{}]", dash.join(","))?;
                }
                write!(f, " ")?;
                write_points(f, points)
            }
            DrawCall::Fill { points, color } => {
                write!(f, "fill {} ", color)?;
                write_points(f, points)
            }
            DrawCall::Text { text, position, font, color } => {
                write!(f, "text {:?} at ({},{}) size={}", text, position.x, position.y, font.size)?;
                if font.bold {
                    write!(f, " bold")?;
                }
                write!(f, " {}", color)
            }
        }
    }
}

/// A surface that records every call instead of drawing.
///
/// Used as a test double and for dumping a tile's draw list.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// One line per call, in draw order
    pub fn to_log(&self) -> String {
        let lines: Vec<String> = self.calls.iter().map(|c| c.to_string()).collect();
        lines.join("\n")
    }
}

impl DrawingSurface for RecordingSurface {
    fn stroke_polyline(&mut self, points: &[DVec2], pen: &Pen) {
        self.calls.push(DrawCall::Stroke {
            points: points.to_vec(),
            pen: *pen,
        });
    }

    fn fill_polygon(&mut self, points: &[DVec2], color: Color) {
        self.calls.push(DrawCall::Fill {
            points: points.to_vec(),
            color,
        });
    }

    fn draw_text(&mut self, text: &str, position: DVec2, font: &Font, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            position,
            font: *font,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn records_in_call_order() {
        let mut surface = RecordingSurface::new();
        let pts = [dvec2(0.0, 0.0), dvec2(1.5, 2.0)];
        surface.fill_polygon(&pts, Color::GREEN);
        surface.stroke_polyline(&pts, &Pen::dashed(Color::GRAY, 1.2, &[2.0, 4.0]));
        assert_eq!(surface.len(), 2);
        assert!(matches!(surface.calls[0], DrawCall::Fill { .. }));
        assert!(matches!(surface.calls[1], DrawCall::Stroke { .. }));
    }

    #[test]
    fn log_format() {
        let mut surface = RecordingSurface::new();
        surface.stroke_polyline(
            &[dvec2(0.0, 1.0), dvec2(2.5, 3.0)],
            &Pen::dashed(Color::LIGHT_GRAY, 1.2, &[2.0, 4.0, 2.0]),
        );
        surface.draw_text(
            "Ulm",
            dvec2(4.0, 5.0),
            &Font { family: None, size: 12.0, bold: true },
            Color::BLACK,
        );
        assert_eq!(
            surface.to_log(),
            "stroke rgb(211,211,211) w=1.2 dash=[2,4,2] [(0,1) (2.5,3)]\n\
             text \"Ulm\" at (4,5) size=12 bold rgb(0,0,0)"
        );
    }
}
