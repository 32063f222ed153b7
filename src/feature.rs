//! Decoded map features and their tag property bag.
//!
//! Every tag category is a closed enumeration. `None` means the tag is absent
//! and `Other` holds any value outside the known set, so a feature can always
//! be represented without losing the fact that a tag was present.

use crate::types::Coordinate;

/// Geometry kind of a decoded feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GeometryKind {
    #[default]
    Point,
    Line,
    Polygon,
}

/// Define a tag enumeration with `None`/`Other` sentinels and a parser for
/// OSM tag values.
macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $value:pat),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            None,
            $($variant,)*
            Other,
        }

        impl $name {
            /// Parse an OSM tag value. Empty means absent, unknown values map to `Other`.
            pub fn from_tag(value: &str) -> Self {
                match value.trim() {
                    "" => $name::None,
                    $($value => $name::$variant,)*
                    _ => $name::Other,
                }
            }

            pub fn is_none(self) -> bool {
                self == $name::None
            }
        }
    };
}

tag_enum! {
    /// `natural=*`
    Natural {
        Fell => "fell",
        Grassland => "grassland",
        Heath => "heath",
        Moor => "moor",
        Scrub => "scrub",
        Wetland => "wetland",
        Wood => "wood",
        TreeRow => "tree_row",
        BareRock => "bare_rock",
        Rock => "rock",
        Scree => "scree",
        Beach => "beach",
        Sand => "sand",
        Water => "water",
        Glacier => "glacier",
        Cliff => "cliff",
        Peak => "peak",
    }
}

tag_enum! {
    /// `boundary=*`
    Boundary {
        Administrative => "administrative",
        Forest => "forest",
        NationalPark => "national_park",
        ProtectedArea => "protected_area",
        Political => "political",
    }
}

tag_enum! {
    /// `landuse=*`
    Landuse {
        Residential => "residential",
        Cemetery => "cemetery",
        Industrial => "industrial",
        Commercial => "commercial",
        Retail => "retail",
        Square => "square",
        Construction => "construction",
        Military => "military",
        Quarry => "quarry",
        Brownfield => "brownfield",
        Farm => "farm" | "farmland" | "farmyard",
        Meadow => "meadow",
        Grass => "grass",
        Greenfield => "greenfield",
        RecreationGround => "recreation_ground",
        WinterSports => "winter_sports",
        Allotments => "allotments",
        Forest => "forest",
        Orchard => "orchard",
        Reservoir => "reservoir",
        Basin => "basin",
    }
}

tag_enum! {
    /// `building=*`
    Building {
        Yes => "yes",
        House => "house",
        Apartments => "apartments",
        Residential => "residential",
        Commercial => "commercial",
        Industrial => "industrial",
        Retail => "retail",
        Garage => "garage",
        Church => "church",
        School => "school",
    }
}

tag_enum! {
    /// `leisure=*`
    Leisure {
        Park => "park",
        Garden => "garden",
        Pitch => "pitch",
        Playground => "playground",
        SportsCentre => "sports_centre",
        Stadium => "stadium",
        SwimmingPool => "swimming_pool",
        NatureReserve => "nature_reserve",
    }
}

tag_enum! {
    /// `amenity=*`
    Amenity {
        School => "school",
        University => "university",
        Hospital => "hospital",
        Parking => "parking",
        PlaceOfWorship => "place_of_worship",
        Marketplace => "marketplace",
    }
}

tag_enum! {
    /// `highway=*`
    ///
    /// Only drivable road classes are listed; everything else (paths,
    /// footways, bus stops, street lamps) parses as `Other` and is not drawn
    /// as a road.
    Highway {
        Motorway => "motorway",
        MotorwayLink => "motorway_link",
        Trunk => "trunk",
        TrunkLink => "trunk_link",
        Primary => "primary",
        PrimaryLink => "primary_link",
        Secondary => "secondary",
        SecondaryLink => "secondary_link",
        Tertiary => "tertiary",
        TertiaryLink => "tertiary_link",
        Unclassified => "unclassified",
        Residential => "residential",
        LivingStreet => "living_street",
        Service => "service",
        Road => "road",
    }
}

tag_enum! {
    /// `railway=*`
    Railway {
        Rail => "rail",
        LightRail => "light_rail",
        NarrowGauge => "narrow_gauge",
        Subway => "subway",
        Tram => "tram",
        Monorail => "monorail",
        Funicular => "funicular",
        Disused => "disused",
        Abandoned => "abandoned",
    }
}

tag_enum! {
    /// `water=*`
    Water {
        Lake => "lake",
        Pond => "pond",
        River => "river",
        Stream => "stream",
        Canal => "canal",
        Reservoir => "reservoir",
        Basin => "basin",
        Lagoon => "lagoon",
    }
}

tag_enum! {
    /// `place=*`
    Place {
        City => "city",
        Town => "town",
        Village => "village",
        Hamlet => "hamlet",
        Locality => "locality",
        Suburb => "suburb",
        Neighbourhood => "neighbourhood",
        IsolatedDwelling => "isolated_dwelling",
    }
}

tag_enum! {
    /// `admin_level=*`
    AdminLevel {
        Level1 => "1",
        Level2 => "2",
        Level3 => "3",
        Level4 => "4",
        Level5 => "5",
        Level6 => "6",
        Level7 => "7",
        Level8 => "8",
        Level9 => "9",
        Level10 => "10",
        Level11 => "11",
    }
}

/// Tag property bag of one feature
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties {
    pub natural: Natural,
    pub boundary: Boundary,
    pub landuse: Landuse,
    pub building: Building,
    pub leisure: Leisure,
    pub amenity: Amenity,
    pub highway: Highway,
    pub railway: Railway,
    pub water: Water,
    pub place: Place,
    pub admin_level: AdminLevel,
    pub name: Option<String>,
}

impl Properties {
    /// Build a property bag from `key=value` pairs, ignoring unknown keys.
    pub fn from_tags<K, V>(tags: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut props = Properties::default();
        for (key, value) in tags {
            props.set_tag(key.as_ref(), value.as_ref());
        }
        props
    }

    /// Set a single tag. Returns `false` if the key is not a known category.
    pub fn set_tag(&mut self, key: &str, value: &str) -> bool {
        match key {
            "natural" => self.natural = Natural::from_tag(value),
            "boundary" => self.boundary = Boundary::from_tag(value),
            "landuse" => self.landuse = Landuse::from_tag(value),
            "building" => self.building = Building::from_tag(value),
            "leisure" => self.leisure = Leisure::from_tag(value),
            "amenity" => self.amenity = Amenity::from_tag(value),
            "highway" => self.highway = Highway::from_tag(value),
            "railway" => self.railway = Railway::from_tag(value),
            "water" => self.water = Water::from_tag(value),
            "place" => self.place = Place::from_tag(value),
            "admin_level" => self.admin_level = AdminLevel::from_tag(value),
            "name" => self.name = Some(value.to_string()),
            _ => return false,
        }
        true
    }
}

/// One decoded map feature as delivered by the tile decoder
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapFeatureData {
    pub id: i64,
    pub kind: GeometryKind,
    pub label: String,
    pub coordinates: Vec<Coordinate>,
    pub properties: Properties,
}

impl MapFeatureData {
    pub fn new(kind: GeometryKind, coordinates: Vec<Coordinate>) -> Self {
        Self {
            kind,
            coordinates,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.properties.set_tag(key, value);
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn is_polygon(&self) -> bool {
        self.kind == GeometryKind::Polygon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_none() {
        assert_eq!(Natural::from_tag(""), Natural::None);
        assert_eq!(Highway::from_tag("  "), Highway::None);
    }

    #[test]
    fn unknown_value_is_other() {
        assert_eq!(Natural::from_tag("volcano"), Natural::Other);
        assert_eq!(Highway::from_tag("footway"), Highway::Other);
        assert!(!Natural::Other.is_none());
    }

    #[test]
    fn multi_value_patterns() {
        assert_eq!(Landuse::from_tag("farm"), Landuse::Farm);
        assert_eq!(Landuse::from_tag("farmland"), Landuse::Farm);
    }

    #[test]
    fn admin_levels_parse() {
        assert_eq!(AdminLevel::from_tag("2"), AdminLevel::Level2);
        assert_eq!(AdminLevel::from_tag("11"), AdminLevel::Level11);
        assert_eq!(AdminLevel::from_tag("12"), AdminLevel::Other);
    }

    #[test]
    fn properties_from_tags() {
        let props = Properties::from_tags([
            ("boundary", "administrative"),
            ("admin_level", "2"),
            ("name", "Deutschland"),
            ("source", "survey"),
        ]);
        assert_eq!(props.boundary, Boundary::Administrative);
        assert_eq!(props.admin_level, AdminLevel::Level2);
        assert_eq!(props.name.as_deref(), Some("Deutschland"));
        assert_eq!(props.natural, Natural::None);
    }

    #[test]
    fn unknown_keys_are_reported() {
        let mut props = Properties::default();
        assert!(props.set_tag("railway", "rail"));
        assert!(!props.set_tag("surface", "asphalt"));
        assert_eq!(props.railway, Railway::Rail);
    }

    #[test]
    fn builder_sets_fields() {
        let feature = MapFeatureData::new(GeometryKind::Polygon, vec![Coordinate::new(1.0, 2.0)])
            .with_id(7)
            .with_label("Lake")
            .with_tag("natural", "water");
        assert_eq!(feature.id, 7);
        assert!(feature.is_polygon());
        assert_eq!(feature.label, "Lake");
        assert_eq!(feature.properties.natural, Natural::Water);
    }
}
