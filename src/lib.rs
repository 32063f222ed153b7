//! Map tile rendering core.
//!
//! Decoded vector features for one tile are classified into typed shapes,
//! projected with spherical Mercator, fitted to the output canvas and drawn
//! onto a [`DrawingSurface`] in ascending draw priority.
//!
//! ```
//! use tilerender::{Coordinate, GeometryKind, MapFeatureData, RecordingSurface, TileParams};
//!
//! let features = vec![
//!     MapFeatureData::new(
//!         GeometryKind::Line,
//!         vec![Coordinate::new(8.0, 47.0), Coordinate::new(9.0, 48.0)],
//!     )
//!     .with_tag("highway", "primary"),
//! ];
//! let params = TileParams::for_geo_bounds(
//!     Coordinate::new(8.0, 47.0),
//!     Coordinate::new(9.0, 48.0),
//!     256.0,
//!     256.0,
//! )?;
//! let mut surface = RecordingSurface::new();
//! tilerender::render_tile(&features, &params, &mut surface);
//! assert_eq!(surface.len(), 2);
//! # Ok::<(), tilerender::RenderError>(())
//! ```

pub mod classify;
pub mod errors;
pub mod feature;
pub mod log;
pub mod projection;
pub mod render;
pub mod types;

pub use classify::{ShapeKind, classify};
pub use errors::RenderError;
pub use feature::{GeometryKind, MapFeatureData, Properties};
pub use projection::project;
pub use render::{
    DrawCall, Drawable, DrawingSurface, Font, GeoFeatureType, Pen, PlacedTile, RecordingSurface,
    Shape, Tile, TileParams, draw_order, render, render_tile,
};
#[cfg(feature = "svg")]
pub use render::svg::{SvgSurface, render_svg};
pub use types::{Bounds, Color, Coordinate};
