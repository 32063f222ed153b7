//! Spherical Mercator forward projection.
//!
//! Planar units are meters on a sphere of radius [`EARTH_RADIUS`]. Both axes
//! grow monotonically: x eastward, y northward. Input is not clamped, so
//! coordinates outside the valid geographic range extrapolate.
//!
//! Transcendentals come from `libm` rather than the platform math library so
//! the same input projects to the same bits on every target.

use std::f64::consts::FRAC_PI_4;

use glam::{DVec2, dvec2};

use crate::types::Coordinate;

/// WGS84 semi-major axis in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

#[inline]
pub fn lon_to_x(longitude: f64) -> f64 {
    EARTH_RADIUS * longitude.to_radians()
}

#[inline]
pub fn lat_to_y(latitude: f64) -> f64 {
    EARTH_RADIUS * libm::log(libm::tan(FRAC_PI_4 + latitude.to_radians() / 2.0))
}

/// Project a geographic coordinate into planar space.
#[inline]
pub fn project(coord: Coordinate) -> DVec2 {
    dvec2(lon_to_x(coord.longitude), lat_to_y(coord.latitude))
}
