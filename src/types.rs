//! Core value types shared by the feature model, the shapes and the surfaces.

use std::fmt;

use glam::DVec2;

/// A geographic position in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Coordinate { longitude, latitude }
    }
}

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const CORAL: Color = Color::rgb(255, 127, 80);
    pub const DARK_GRAY: Color = Color::rgb(169, 169, 169);
    pub const DARK_GREEN: Color = Color::rgb(0, 100, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
    pub const LIGHT_CORAL: Color = Color::rgb(240, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const LIGHT_GREEN: Color = Color::rgb(144, 238, 144);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const SANDY_BROWN: Color = Color::rgb(244, 164, 96);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    /// Format as `rgb(r,g,b)` for SVG style attributes
    pub fn to_rgb_string(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Axis-aligned bounding box in planar space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounds {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        Bounds {
            min: DVec2::splat(f64::MAX),
            max: DVec2::splat(f64::MIN),
        }
    }

    /// Check if the bounds are empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

impl FromIterator<DVec2> for Bounds {
    fn from_iter<I: IntoIterator<Item = DVec2>>(iter: I) -> Self {
        let mut bounds = Bounds::new();
        for p in iter {
            bounds.expand_point(p);
        }
        bounds
    }
}
