//! Feature classification.
//!
//! [`RULES`] is evaluated top to bottom and the first rule whose predicate
//! holds decides the shape variant. Tag predicates overlap (a polygon can be
//! both `natural=water` and `landuse=residential`), so the table order is the
//! priority order. Geometry-kind gates are part of each predicate.

use crate::feature::{
    AdminLevel, Boundary, GeometryKind, Highway, Landuse, MapFeatureData, Natural, Place,
};
use crate::render::shapes::GeoFeatureType;

/// The variant (and GeoFeature sub-type) chosen for a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    GeoFeature(GeoFeatureType),
    Railway,
    PopulatedPlace,
    Border,
    Waterway,
    Road,
}

/// One entry of the classification table
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&MapFeatureData) -> bool,
    pub kind: fn(&MapFeatureData) -> ShapeKind,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Outcome when no rule matches
pub const DEFAULT_KIND: ShapeKind = ShapeKind::GeoFeature(GeoFeatureType::Unknown);

macro_rules! fixed {
    ($kind:expr) => {
        |_: &MapFeatureData| $kind
    };
}

/// Ordered classification rules
pub static RULES: &[Rule] = &[
    Rule {
        name: "populated_place",
        matches: is_populated_place,
        kind: fixed!(ShapeKind::PopulatedPlace),
    },
    Rule {
        name: "railway",
        matches: is_railway,
        kind: fixed!(ShapeKind::Railway),
    },
    Rule {
        name: "border",
        matches: is_border,
        kind: fixed!(ShapeKind::Border),
    },
    Rule {
        name: "waterway",
        matches: is_waterway,
        kind: fixed!(ShapeKind::Waterway),
    },
    Rule {
        name: "road",
        matches: is_road,
        kind: fixed!(ShapeKind::Road),
    },
    Rule {
        name: "natural",
        matches: is_natural,
        kind: |f| ShapeKind::GeoFeature(GeoFeatureType::from_natural(f.properties.natural)),
    },
    Rule {
        name: "landuse_forest",
        matches: is_landuse_forest_or_orchard,
        kind: fixed!(ShapeKind::GeoFeature(GeoFeatureType::Forest)),
    },
    Rule {
        name: "boundary_forest",
        matches: is_boundary_forest,
        kind: fixed!(ShapeKind::GeoFeature(GeoFeatureType::Forest)),
    },
    Rule {
        name: "landuse_residential",
        matches: is_landuse_residential,
        kind: fixed!(ShapeKind::GeoFeature(GeoFeatureType::Residential)),
    },
    Rule {
        name: "landuse_plain",
        matches: is_landuse_plain,
        kind: fixed!(ShapeKind::GeoFeature(GeoFeatureType::Plain)),
    },
    Rule {
        name: "landuse_water",
        matches: is_landuse_water,
        kind: fixed!(ShapeKind::GeoFeature(GeoFeatureType::Water)),
    },
    Rule {
        name: "building",
        matches: is_building,
        kind: fixed!(ShapeKind::GeoFeature(GeoFeatureType::Residential)),
    },
    Rule {
        name: "leisure",
        matches: is_leisure,
        kind: fixed!(ShapeKind::GeoFeature(GeoFeatureType::Residential)),
    },
    Rule {
        name: "amenity",
        matches: is_amenity,
        kind: fixed!(ShapeKind::GeoFeature(GeoFeatureType::Residential)),
    },
];

/// The first rule matching `feature`, or `None` when the default applies.
pub fn matching_rule(feature: &MapFeatureData) -> Option<&'static Rule> {
    RULES.iter().find(|rule| (rule.matches)(feature))
}

/// Classify a feature. Total: unmatched features are `GeoFeature(Unknown)`.
pub fn classify(feature: &MapFeatureData) -> ShapeKind {
    match matching_rule(feature) {
        Some(rule) => {
            let kind = (rule.kind)(feature);
            crate::log::trace!(id = feature.id, rule = rule.name, ?kind, "classified");
            kind
        }
        None => {
            crate::log::trace!(id = feature.id, "no rule matched");
            DEFAULT_KIND
        }
    }
}

// ============================================================================
// Predicates
// ============================================================================

// https://wiki.openstreetmap.org/wiki/Key:place
pub fn is_populated_place(feature: &MapFeatureData) -> bool {
    feature.kind == GeometryKind::Point
        && matches!(
            feature.properties.place,
            Place::City | Place::Town | Place::Locality | Place::Hamlet
        )
}

pub fn is_railway(feature: &MapFeatureData) -> bool {
    !feature.properties.railway.is_none()
}

/// Country borders only
pub fn is_border(feature: &MapFeatureData) -> bool {
    feature.properties.boundary == Boundary::Administrative
        && feature.properties.admin_level == AdminLevel::Level2
}

pub fn is_waterway(feature: &MapFeatureData) -> bool {
    !feature.properties.water.is_none() && feature.kind != GeometryKind::Point
}

pub fn is_road(feature: &MapFeatureData) -> bool {
    !matches!(feature.properties.highway, Highway::None | Highway::Other)
}

pub fn is_natural(feature: &MapFeatureData) -> bool {
    feature.kind == GeometryKind::Polygon && !feature.properties.natural.is_none()
}

pub fn is_landuse_forest_or_orchard(feature: &MapFeatureData) -> bool {
    matches!(feature.properties.landuse, Landuse::Forest | Landuse::Orchard)
}

pub fn is_boundary_forest(feature: &MapFeatureData) -> bool {
    feature.properties.boundary == Boundary::Forest
}

pub fn is_landuse_residential(feature: &MapFeatureData) -> bool {
    matches!(
        feature.properties.landuse,
        Landuse::Residential
            | Landuse::Cemetery
            | Landuse::Industrial
            | Landuse::Commercial
            | Landuse::Square
            | Landuse::Construction
            | Landuse::Military
            | Landuse::Quarry
            | Landuse::Brownfield
    )
}

pub fn is_landuse_plain(feature: &MapFeatureData) -> bool {
    matches!(
        feature.properties.landuse,
        Landuse::Farm
            | Landuse::Meadow
            | Landuse::Grass
            | Landuse::Greenfield
            | Landuse::RecreationGround
            | Landuse::WinterSports
            | Landuse::Allotments
    )
}

pub fn is_landuse_water(feature: &MapFeatureData) -> bool {
    matches!(feature.properties.landuse, Landuse::Reservoir | Landuse::Basin)
}

pub fn is_building(feature: &MapFeatureData) -> bool {
    !feature.properties.building.is_none() && feature.kind == GeometryKind::Polygon
}

pub fn is_leisure(feature: &MapFeatureData) -> bool {
    !feature.properties.leisure.is_none() && feature.kind == GeometryKind::Polygon
}

pub fn is_amenity(feature: &MapFeatureData) -> bool {
    !feature.properties.amenity.is_none() && feature.kind == GeometryKind::Polygon
}

impl GeoFeatureType {
    /// Sub-type for a `natural=*` polygon
    pub fn from_natural(natural: Natural) -> Self {
        match natural {
            Natural::Fell
            | Natural::Grassland
            | Natural::Heath
            | Natural::Moor
            | Natural::Scrub
            | Natural::Wetland => GeoFeatureType::Plain,
            Natural::Wood | Natural::TreeRow => GeoFeatureType::Forest,
            Natural::BareRock | Natural::Rock | Natural::Scree => GeoFeatureType::Mountains,
            Natural::Beach | Natural::Sand => GeoFeatureType::Desert,
            Natural::Water => GeoFeatureType::Water,
            _ => GeoFeatureType::Unknown,
        }
    }
}
