//! Shape construction, placement and ordered rendering for one tile
//!
//! This module is organized into submodules:
//! - `shapes`: the shape variants and their draw contracts
//! - `style`: colors, pens and fonts per variant
//! - `transform`: tile parameters and the translate/scale/flip pass
//! - `surface`: the drawing-surface capability and a recording double
//! - `svg`: an SVG drawing surface (feature `svg`)

pub mod shapes;
pub mod style;
pub mod surface;
#[cfg(feature = "svg")]
pub mod svg;
pub mod transform;

// Re-export commonly used items
pub use shapes::{Drawable, GeoFeatureType, Shape};
pub use surface::{DrawCall, DrawingSurface, Font, Pen, RecordingSurface};
pub use transform::TileParams;

use crate::feature::MapFeatureData;
use crate::types::Bounds;

/// Shapes in draw order: ascending z-index, ties kept in input order.
pub fn draw_order(shapes: &[Shape]) -> Vec<&Shape> {
    let mut ordered: Vec<&Shape> = shapes.iter().collect();
    // `sort_by_key` is stable
    ordered.sort_by_key(|s| s.z_index());
    ordered
}

/// Draw every shape onto `surface`, lowest z-index first.
///
/// Equal z-indices draw in input order, so later features paint over
/// earlier ones.
pub fn render(shapes: &[Shape], surface: &mut dyn DrawingSurface) {
    let ordered = draw_order(shapes);
    crate::log::debug!(shapes = ordered.len(), "rendering shapes");
    for shape in ordered {
        shape.render(surface);
    }
}

/// Shapes of one tile in planar (projected) space
#[derive(Debug, Clone, Default)]
pub struct Tile {
    shapes: Vec<Shape>,
}

impl Tile {
    /// Classify and project every feature, one shape per feature, in input order
    pub fn from_features<'a>(features: impl IntoIterator<Item = &'a MapFeatureData>) -> Self {
        let shapes: Vec<Shape> = features.into_iter().map(Shape::from_feature).collect();
        crate::log::debug!(shapes = shapes.len(), "built tile shapes");
        Tile { shapes }
    }

    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Tile { shapes }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Planar bounds of all shape points
    pub fn bounds(&self) -> Bounds {
        Bounds::of_shapes(&self.shapes)
    }

    /// Move every shape into canvas space.
    ///
    /// Consumes the tile so the transform cannot be applied twice.
    pub fn place(mut self, params: &TileParams) -> PlacedTile {
        transform::translate_and_scale(&mut self.shapes, params);
        PlacedTile {
            shapes: self.shapes,
            params: *params,
        }
    }
}

/// Shapes of one tile in canvas space, ready to draw
#[derive(Debug, Clone)]
pub struct PlacedTile {
    shapes: Vec<Shape>,
    params: TileParams,
}

impl PlacedTile {
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn params(&self) -> &TileParams {
        &self.params
    }

    pub fn render(&self, surface: &mut dyn DrawingSurface) {
        render(&self.shapes, surface);
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }
}

/// Classify, place and draw one tile's features
pub fn render_tile(
    features: &[MapFeatureData],
    params: &TileParams,
    surface: &mut dyn DrawingSurface,
) {
    Tile::from_features(features).place(params).render(surface);
}
