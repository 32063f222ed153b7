//! Error types with diagnostic codes using miette
//!
//! Classification, projection, transform and drawing are total. Only tile
//! configuration and SVG serialization can fail.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while configuring or finishing a tile render
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("invalid scale: {value}")]
    #[diagnostic(
        code(tilerender::params::invalid_scale),
        help("the scale factor must be finite and greater than zero")
    )]
    InvalidScale { value: f64 },

    #[error("invalid canvas size: {width}x{height}")]
    #[diagnostic(
        code(tilerender::params::invalid_canvas),
        help("canvas width and height must be finite and greater than zero")
    )]
    InvalidCanvas { width: f64, height: f64 },

    #[error("infinite or NaN in bounds")]
    #[diagnostic(code(tilerender::params::invalid_bounds))]
    InvalidBounds,

    #[error("tile has no points to fit")]
    #[diagnostic(
        code(tilerender::tile::empty),
        help("pass explicit TileParams when the tile may be empty")
    )]
    EmptyTile,

    #[error("SVG serialization error: {message}")]
    #[diagnostic(code(tilerender::svg::serialize))]
    Serialize { message: String },
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;
