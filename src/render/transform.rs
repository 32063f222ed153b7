//! Per-tile translate, scale and vertical flip into canvas space.

use glam::{DVec2, dvec2};

use super::shapes::{Drawable, Shape};
use crate::errors::{RenderError, Result};
use crate::projection::project;
use crate::types::{Bounds, Coordinate};

/// Smallest span used when fitting, so degenerate tiles still get a finite scale
const MIN_SPAN: f64 = 1e-9;

/// Where a tile's planar points land on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileParams {
    /// Planar point mapped to the canvas's bottom-left corner
    pub min: DVec2,
    pub scale: f64,
    pub width: f64,
    pub height: f64,
}

impl TileParams {
    /// Create params with validation (rejects NaN, infinite, zero or negative sizes)
    pub fn try_new(min_x: f64, min_y: f64, scale: f64, width: f64, height: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(RenderError::InvalidScale { value: scale });
        }
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(RenderError::InvalidCanvas { width, height });
        }
        if !min_x.is_finite() || !min_y.is_finite() {
            return Err(RenderError::InvalidBounds);
        }
        Ok(TileParams {
            min: dvec2(min_x, min_y),
            scale,
            width,
            height,
        })
    }

    /// Fit `bounds` into a `width` x `height` canvas with a uniform scale.
    pub fn fit(bounds: &Bounds, width: f64, height: f64) -> Result<Self> {
        if bounds.is_empty() {
            return Err(RenderError::EmptyTile);
        }
        if !bounds.is_finite() {
            return Err(RenderError::InvalidBounds);
        }
        if bounds.width() < MIN_SPAN || bounds.height() < MIN_SPAN {
            crate::log::warn!(
                span_x = bounds.width(),
                span_y = bounds.height(),
                "degenerate tile bounds"
            );
        }
        let span_x = bounds.width().max(MIN_SPAN);
        let span_y = bounds.height().max(MIN_SPAN);
        let scale = (width / span_x).min(height / span_y);
        crate::log::debug!(
            min_x = bounds.min.x,
            min_y = bounds.min.y,
            scale,
            width,
            height,
            "fitted tile params"
        );
        Self::try_new(bounds.min.x, bounds.min.y, scale, width, height)
    }

    /// Fit the geographic box spanned by two corners
    pub fn for_geo_bounds(
        south_west: Coordinate,
        north_east: Coordinate,
        width: f64,
        height: f64,
    ) -> Result<Self> {
        let bounds: Bounds = [project(south_west), project(north_east)].into_iter().collect();
        Self::fit(&bounds, width, height)
    }

    /// Map one planar point the same way [`Drawable::translate_and_scale`] does
    pub fn apply(&self, p: DVec2) -> DVec2 {
        dvec2(
            (p.x - self.min.x) * self.scale,
            self.height - (p.y - self.min.y) * self.scale,
        )
    }
}

impl Bounds {
    /// Bounds of every point of every shape
    pub fn of_shapes(shapes: &[Shape]) -> Bounds {
        shapes.iter().flat_map(|s| s.points().iter().copied()).collect()
    }
}

/// Remap every point of every shape in place. Apply exactly once per tile.
pub fn translate_and_scale(shapes: &mut [Shape], params: &TileParams) {
    crate::log::debug!(
        shapes = shapes.len(),
        min_x = params.min.x,
        min_y = params.min.y,
        scale = params.scale,
        height = params.height,
        "translate and scale"
    );
    for shape in shapes.iter_mut() {
        shape.translate_and_scale(params.min, params.scale, params.height);
    }
}
