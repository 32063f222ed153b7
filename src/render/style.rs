//! Per-variant colors, pens and fonts

use super::shapes::GeoFeatureType;
use super::surface::{Font, Pen};
use crate::types::Color;

/// Stroke width for unfilled area features and waterways
pub const THIN_LINE: f64 = 1.2;

/// Color for anything the classifier could not place, meant to stand out
pub const FALLBACK_COLOR: Color = Color::MAGENTA;

const GEO_FEATURE_COLORS: [(GeoFeatureType, Color); 8] = [
    (GeoFeatureType::Plain, Color::LIGHT_GREEN),
    (GeoFeatureType::Hills, Color::DARK_GREEN),
    (GeoFeatureType::Mountains, Color::LIGHT_GRAY),
    (GeoFeatureType::Forest, Color::GREEN),
    (GeoFeatureType::Desert, Color::SANDY_BROWN),
    (GeoFeatureType::Unknown, Color::MAGENTA),
    (GeoFeatureType::Water, Color::LIGHT_BLUE),
    (GeoFeatureType::Residential, Color::LIGHT_CORAL),
];

pub fn geo_feature_color(kind: GeoFeatureType) -> Color {
    GEO_FEATURE_COLORS
        .iter()
        .find(|(k, _)| *k == kind)
        .map_or(FALLBACK_COLOR, |&(_, color)| color)
}

pub const RAILWAY_DASH_PATTERN: &[f64] = &[2.0, 4.0, 2.0];
pub const RAILWAY_BED: Pen = Pen::solid(Color::DARK_GRAY, 2.0);
pub const RAILWAY_TIES: Pen = Pen::dashed(Color::LIGHT_GRAY, THIN_LINE, RAILWAY_DASH_PATTERN);

pub const BORDER: Pen = Pen::solid(Color::GRAY, 2.0);

pub const WATER_COLOR: Color = Color::LIGHT_BLUE;
pub const WATERWAY: Pen = Pen::solid(WATER_COLOR, THIN_LINE);

/// Drawn first, slightly wider than the fill so it shows as an outline
pub const ROAD_CASING: Pen = Pen::solid(Color::YELLOW, 2.2);
pub const ROAD_FILL: Pen = Pen::solid(Color::CORAL, 2.0);

pub const LABEL_FONT: Font = Font {
    family: None,
    size: 12.0,
    bold: true,
};
pub const LABEL_COLOR: Color = Color::BLACK;
