//! Shape types for tile rendering
//!
//! Each shape is its own type that knows:
//! - its draw priority (z-index)
//! - whether it came from a polygon
//! - its planar points
//! - how to render itself onto a drawing surface
//!
//! [`Shape`] is the sum over all variants; calls on it are dispatched with a
//! generated `match` over the variant tag.

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use super::style;
use super::surface::{DrawingSurface, Pen};
use crate::classify::{ShapeKind, classify};
use crate::feature::{GeometryKind, MapFeatureData};
use crate::projection::project;
use crate::types::{Color, Coordinate};

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Drawable {
    /// Draw priority; higher values draw later (on top)
    fn z_index(&self) -> i32;

    /// Whether the source geometry was a polygon
    fn is_polygon(&self) -> bool;

    /// Points in planar space, in source order
    fn points(&self) -> &[DVec2];

    fn points_mut(&mut self) -> &mut [DVec2];

    /// Issue this shape's draw calls. Shapes without points draw nothing.
    fn render(&self, surface: &mut dyn DrawingSurface);

    /// Remap every point into canvas space:
    /// `x' = (x - min.x) * scale`, `y' = height - (y - min.y) * scale`.
    ///
    /// Not idempotent. Calling it twice transforms the points twice.
    fn translate_and_scale(&mut self, min: DVec2, scale: f64, height: f64) {
        for p in self.points_mut() {
            *p = DVec2::new((p.x - min.x) * scale, height - (p.y - min.y) * scale);
        }
    }
}

/// Project source coordinates in order
fn project_all(coordinates: &[Coordinate]) -> Vec<DVec2> {
    coordinates.iter().map(|&c| project(c)).collect()
}

fn stroke(surface: &mut dyn DrawingSurface, points: &[DVec2], pen: &Pen) {
    if !points.is_empty() {
        surface.stroke_polyline(points, pen);
    }
}

fn fill(surface: &mut dyn DrawingSurface, points: &[DVec2], color: Color) {
    if !points.is_empty() {
        surface.fill_polygon(points, color);
    }
}

// ============================================================================
// Shape Types
// ============================================================================

/// Terrain and land-use sub-types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoFeatureType {
    Plain,
    Hills,
    Mountains,
    Forest,
    Desert,
    Unknown,
    Water,
    Residential,
}

/// Z-index when a sub-type is missing from [`GEO_FEATURE_Z_INDICES`].
///
/// Every sub-type is listed, so this is never returned today. It stays as
/// the bottom-most layer should a sub-type be added without a table entry.
pub const FALLBACK_Z_INDEX: i32 = 7;

const GEO_FEATURE_Z_INDICES: [(GeoFeatureType, i32); 8] = [
    (GeoFeatureType::Plain, 10),
    (GeoFeatureType::Hills, 12),
    (GeoFeatureType::Mountains, 13),
    (GeoFeatureType::Forest, 11),
    (GeoFeatureType::Desert, 9),
    (GeoFeatureType::Unknown, 8),
    (GeoFeatureType::Water, 40),
    (GeoFeatureType::Residential, 41),
];

impl GeoFeatureType {
    pub const ALL: [GeoFeatureType; 8] = [
        GeoFeatureType::Plain,
        GeoFeatureType::Hills,
        GeoFeatureType::Mountains,
        GeoFeatureType::Forest,
        GeoFeatureType::Desert,
        GeoFeatureType::Unknown,
        GeoFeatureType::Water,
        GeoFeatureType::Residential,
    ];

    pub fn z_index(self) -> i32 {
        GEO_FEATURE_Z_INDICES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map_or(FALLBACK_Z_INDEX, |&(_, z)| z)
    }
}

/// Terrain or land-use area
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    pub kind: GeoFeatureType,
    pub is_polygon: bool,
    pub points: Vec<DVec2>,
}

impl GeoFeature {
    pub fn new(coordinates: &[Coordinate], kind: GeoFeatureType, is_polygon: bool) -> Self {
        Self {
            kind,
            is_polygon,
            points: project_all(coordinates),
        }
    }
}

impl Drawable for GeoFeature {
    fn z_index(&self) -> i32 {
        self.kind.z_index()
    }

    fn is_polygon(&self) -> bool {
        self.is_polygon
    }

    fn points(&self) -> &[DVec2] {
        &self.points
    }

    fn points_mut(&mut self) -> &mut [DVec2] {
        &mut self.points
    }

    fn render(&self, surface: &mut dyn DrawingSurface) {
        let color = style::geo_feature_color(self.kind);
        if self.is_polygon {
            fill(surface, &self.points, color);
        } else {
            stroke(surface, &self.points, &Pen::solid(color, style::THIN_LINE));
        }
    }
}

/// Railway line, drawn as a solid bed with dashed ties on top
#[derive(Debug, Clone, PartialEq)]
pub struct Railway {
    pub is_polygon: bool,
    pub points: Vec<DVec2>,
}

impl Railway {
    pub const Z_INDEX: i32 = 45;

    pub fn new(coordinates: &[Coordinate], is_polygon: bool) -> Self {
        Self {
            is_polygon,
            points: project_all(coordinates),
        }
    }
}

impl Drawable for Railway {
    fn z_index(&self) -> i32 {
        Self::Z_INDEX
    }

    fn is_polygon(&self) -> bool {
        self.is_polygon
    }

    fn points(&self) -> &[DVec2] {
        &self.points
    }

    fn points_mut(&mut self) -> &mut [DVec2] {
        &mut self.points
    }

    fn render(&self, surface: &mut dyn DrawingSurface) {
        stroke(surface, &self.points, &style::RAILWAY_BED);
        stroke(surface, &self.points, &style::RAILWAY_TIES);
    }
}

/// Name shown for a place whose label is empty
pub const UNKNOWN_PLACE_NAME: &str = "Unknown";

/// City, town, locality or hamlet label
#[derive(Debug, Clone, PartialEq)]
pub struct PopulatedPlace {
    pub name: String,
    pub should_render: bool,
    pub is_polygon: bool,
    pub points: Vec<DVec2>,
}

impl PopulatedPlace {
    pub const Z_INDEX: i32 = 60;

    pub fn new(coordinates: &[Coordinate], feature: &MapFeatureData) -> Self {
        let (name, should_render) =
            resolve_place_name(&feature.label, feature.properties.name.as_deref());
        Self {
            name,
            should_render,
            is_polygon: feature.is_polygon(),
            points: project_all(coordinates),
        }
    }
}

/// Pick the display name and visibility for a place.
///
/// An empty label hides the place. Otherwise the structured name wins unless
/// it is blank, in which case the label is shown.
pub fn resolve_place_name(label: &str, name: Option<&str>) -> (String, bool) {
    if label.is_empty() {
        return (UNKNOWN_PLACE_NAME.to_string(), false);
    }
    let name = match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => label,
    };
    (name.to_string(), true)
}

impl Drawable for PopulatedPlace {
    fn z_index(&self) -> i32 {
        Self::Z_INDEX
    }

    fn is_polygon(&self) -> bool {
        self.is_polygon
    }

    fn points(&self) -> &[DVec2] {
        &self.points
    }

    fn points_mut(&mut self) -> &mut [DVec2] {
        &mut self.points
    }

    fn render(&self, surface: &mut dyn DrawingSurface) {
        if !self.should_render {
            return;
        }
        if let Some(&anchor) = self.points.first() {
            surface.draw_text(&self.name, anchor, &style::LABEL_FONT, style::LABEL_COLOR);
        }
    }
}

/// Country border
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub is_polygon: bool,
    pub points: Vec<DVec2>,
}

impl Border {
    pub const Z_INDEX: i32 = 30;

    pub fn new(coordinates: &[Coordinate], is_polygon: bool) -> Self {
        Self {
            is_polygon,
            points: project_all(coordinates),
        }
    }
}

impl Drawable for Border {
    fn z_index(&self) -> i32 {
        Self::Z_INDEX
    }

    fn is_polygon(&self) -> bool {
        self.is_polygon
    }

    fn points(&self) -> &[DVec2] {
        &self.points
    }

    fn points_mut(&mut self) -> &mut [DVec2] {
        &mut self.points
    }

    fn render(&self, surface: &mut dyn DrawingSurface) {
        stroke(surface, &self.points, &style::BORDER);
    }
}

/// River, canal, lake or other water body
#[derive(Debug, Clone, PartialEq)]
pub struct Waterway {
    pub is_polygon: bool,
    pub points: Vec<DVec2>,
}

impl Waterway {
    pub const Z_INDEX: i32 = 40;

    pub fn new(coordinates: &[Coordinate], is_polygon: bool) -> Self {
        Self {
            is_polygon,
            points: project_all(coordinates),
        }
    }
}

impl Drawable for Waterway {
    fn z_index(&self) -> i32 {
        Self::Z_INDEX
    }

    fn is_polygon(&self) -> bool {
        self.is_polygon
    }

    fn points(&self) -> &[DVec2] {
        &self.points
    }

    fn points_mut(&mut self) -> &mut [DVec2] {
        &mut self.points
    }

    fn render(&self, surface: &mut dyn DrawingSurface) {
        if self.is_polygon {
            fill(surface, &self.points, style::WATER_COLOR);
        } else {
            stroke(surface, &self.points, &style::WATERWAY);
        }
    }
}

/// Road, drawn as a yellow casing under a coral center line
#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    pub is_polygon: bool,
    pub points: Vec<DVec2>,
}

impl Road {
    pub const Z_INDEX: i32 = 50;

    pub fn new(coordinates: &[Coordinate], is_polygon: bool) -> Self {
        Self {
            is_polygon,
            points: project_all(coordinates),
        }
    }
}

impl Drawable for Road {
    fn z_index(&self) -> i32 {
        Self::Z_INDEX
    }

    fn is_polygon(&self) -> bool {
        self.is_polygon
    }

    fn points(&self) -> &[DVec2] {
        &self.points
    }

    fn points_mut(&mut self) -> &mut [DVec2] {
        &mut self.points
    }

    // Road areas (squares, rest areas) are not drawn.
    fn render(&self, surface: &mut dyn DrawingSurface) {
        if self.is_polygon {
            return;
        }
        stroke(surface, &self.points, &style::ROAD_CASING);
        stroke(surface, &self.points, &style::ROAD_FILL);
    }
}

/// A shape enum wrapping all shape types
///
/// This provides uniform storage while each variant holds only the state it needs.
#[enum_dispatch(Drawable)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    GeoFeature,
    Railway,
    PopulatedPlace,
    Border,
    Waterway,
    Road,
}

impl Shape {
    /// Classify a feature and build its shape
    pub fn from_feature(feature: &MapFeatureData) -> Self {
        Self::new(classify(feature), feature)
    }

    /// Build the shape of the given kind, projecting the feature's coordinates
    pub fn new(kind: ShapeKind, feature: &MapFeatureData) -> Self {
        let coords = feature.coordinates.as_slice();
        let is_polygon = feature.kind == GeometryKind::Polygon;
        match kind {
            ShapeKind::GeoFeature(sub) => GeoFeature::new(coords, sub, is_polygon).into(),
            ShapeKind::Railway => Railway::new(coords, is_polygon).into(),
            ShapeKind::PopulatedPlace => PopulatedPlace::new(coords, feature).into(),
            ShapeKind::Border => Border::new(coords, is_polygon).into(),
            ShapeKind::Waterway => Waterway::new(coords, is_polygon).into(),
            ShapeKind::Road => Road::new(coords, is_polygon).into(),
        }
    }

    /// The kind this shape was built from
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::GeoFeature(s) => ShapeKind::GeoFeature(s.kind),
            Shape::Railway(_) => ShapeKind::Railway,
            Shape::PopulatedPlace(_) => ShapeKind::PopulatedPlace,
            Shape::Border(_) => ShapeKind::Border,
            Shape::Waterway(_) => ShapeKind::Waterway,
            Shape::Road(_) => ShapeKind::Road,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
