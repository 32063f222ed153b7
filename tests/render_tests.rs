//! End-to-end tests: features in, draw calls out.
//!
//! Run with logging: RUST_LOG=debug cargo test --features tracing -- --nocapture

use glam::dvec2;
use tilerender::render::shapes::{Border, GeoFeature, PopulatedPlace, Railway, Road};
use tilerender::{
    Coordinate, DrawCall, Drawable, GeoFeatureType, GeometryKind, MapFeatureData,
    RecordingSurface, Shape, ShapeKind, Tile, TileParams, classify, render_tile,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn line(coords: &[(f64, f64)]) -> MapFeatureData {
    MapFeatureData::new(
        GeometryKind::Line,
        coords.iter().map(|&(lon, lat)| Coordinate::new(lon, lat)).collect(),
    )
}

fn polygon(coords: &[(f64, f64)]) -> MapFeatureData {
    MapFeatureData {
        kind: GeometryKind::Polygon,
        ..line(coords)
    }
}

fn point(lon: f64, lat: f64) -> MapFeatureData {
    MapFeatureData::new(GeometryKind::Point, vec![Coordinate::new(lon, lat)])
}

fn swiss_tile() -> TileParams {
    TileParams::for_geo_bounds(
        Coordinate::new(8.0, 47.0),
        Coordinate::new(9.0, 48.0),
        256.0,
        256.0,
    )
    .unwrap()
}

#[test]
fn draw_log_snapshot() {
    init_tracing();
    let shapes: Vec<Shape> = vec![
        Road { is_polygon: false, points: vec![dvec2(5.0, 0.0), dvec2(15.0, 0.0)] }.into(),
        GeoFeature {
            kind: GeoFeatureType::Water,
            is_polygon: true,
            points: vec![dvec2(5.0, 0.0), dvec2(15.0, 0.0), dvec2(15.0, 10.0)],
        }
        .into(),
        PopulatedPlace {
            name: "Springfield".into(),
            should_render: true,
            is_polygon: false,
            points: vec![dvec2(10.0, 5.0)],
        }
        .into(),
        Railway { is_polygon: false, points: vec![dvec2(5.0, 5.0), dvec2(15.0, 5.0)] }.into(),
        GeoFeature {
            kind: GeoFeatureType::Unknown,
            is_polygon: false,
            points: vec![dvec2(5.0, 10.0), dvec2(6.0, 10.0)],
        }
        .into(),
        Border { is_polygon: false, points: vec![dvec2(5.0, 0.0), dvec2(5.0, 10.0)] }.into(),
    ];
    let params = TileParams::try_new(5.0, 0.0, 2.0, 20.0, 20.0).unwrap();
    let mut surface = RecordingSurface::new();
    Tile::from_shapes(shapes).place(&params).render(&mut surface);

    insta::assert_snapshot!(surface.to_log(), @r#"
    stroke rgb(255,0,255) w=1.2 [(0,0) (2,0)]
    stroke rgb(128,128,128) w=2 [(0,20) (0,0)]
    fill rgb(173,216,230) [(0,20) (20,20) (20,0)]
    stroke rgb(169,169,169) w=2 [(0,10) (20,10)]
    stroke rgb(211,211,211) w=1.2 dash=[2,4,2] [(0,10) (20,10)]
    stroke rgb(255,255,0) w=2.2 [(0,20) (20,20)]
    stroke rgb(255,127,80) w=2 [(0,20) (20,20)]
    text "Springfield" at (10,10) size=12 bold rgb(0,0,0)
    "#);
}

#[test]
fn natural_water_wins_over_residential_landuse() {
    let lake = polygon(&[(8.1, 47.1), (8.2, 47.1), (8.2, 47.2)])
        .with_tag("natural", "water")
        .with_tag("landuse", "residential");
    assert_eq!(classify(&lake), ShapeKind::GeoFeature(GeoFeatureType::Water));
    let shape = Shape::from_feature(&lake);
    assert_eq!(shape.z_index(), 40);
}

#[test]
fn every_feature_yields_exactly_one_shape() {
    let features = vec![
        point(8.5, 47.5),
        line(&[(8.1, 47.1), (8.2, 47.2)]).with_tag("railway", "rail"),
        polygon(&[(8.1, 47.1), (8.2, 47.2), (8.3, 47.1)]).with_tag("building", "yes"),
        line(&[]).with_tag("highway", "footway"),
        polygon(&[(8.1, 47.1)]).with_tag("natural", "glacier"),
    ];
    let tile = Tile::from_features(&features);
    assert_eq!(tile.len(), features.len());
    let kinds: Vec<ShapeKind> = tile.shapes().iter().map(Shape::kind).collect();
    assert_eq!(
        kinds,
        vec![
            ShapeKind::GeoFeature(GeoFeatureType::Unknown),
            ShapeKind::Railway,
            ShapeKind::GeoFeature(GeoFeatureType::Residential),
            ShapeKind::GeoFeature(GeoFeatureType::Unknown),
            ShapeKind::GeoFeature(GeoFeatureType::Unknown),
        ]
    );
    for (shape, feature) in tile.shapes().iter().zip(&features) {
        assert_eq!(shape.points().len(), feature.coordinates.len());
    }
}

#[test]
fn populated_place_uses_label_when_name_is_blank() {
    init_tracing();
    let town = point(8.5, 47.5).with_tag("place", "town").with_tag("name", "").with_label("Springfield");
    let mut surface = RecordingSurface::new();
    render_tile(&[town], &swiss_tile(), &mut surface);
    assert_eq!(surface.len(), 1);
    match &surface.calls[0] {
        DrawCall::Text { text, font, .. } => {
            assert_eq!(text, "Springfield");
            assert_eq!(font.size, 12.0);
            assert!(font.bold);
        }
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn populated_place_without_label_is_hidden() {
    let hamlet = point(8.5, 47.5).with_tag("place", "hamlet");
    match Shape::from_feature(&hamlet) {
        Shape::PopulatedPlace(place) => {
            assert_eq!(place.name, "Unknown");
            assert!(!place.should_render);
        }
        other => panic!("expected a populated place, got {other:?}"),
    }
    let mut surface = RecordingSurface::new();
    render_tile(&[hamlet], &swiss_tile(), &mut surface);
    assert!(surface.is_empty());
}

#[test]
fn degenerate_geometry_draws_nothing() {
    let features = vec![
        line(&[]).with_tag("railway", "rail"),
        line(&[]).with_tag("highway", "primary"),
        polygon(&[]).with_tag("natural", "wood"),
        polygon(&[]).with_tag("water", "lake"),
        line(&[]).with_tag("boundary", "administrative").with_tag("admin_level", "2"),
        MapFeatureData::new(GeometryKind::Point, vec![])
            .with_tag("place", "city")
            .with_label("Nowhere"),
        line(&[]),
    ];
    let mut surface = RecordingSurface::new();
    render_tile(&features, &swiss_tile(), &mut surface);
    assert_eq!(surface.len(), 0, "{}", surface.to_log());
}

#[test]
fn equal_priorities_render_in_feature_order() {
    let features = vec![
        line(&[(8.1, 47.1), (8.2, 47.1)]).with_tag("highway", "primary"),
        line(&[(8.3, 47.3), (8.4, 47.3)]).with_tag("highway", "residential"),
        polygon(&[(8.0, 47.0), (9.0, 47.0), (9.0, 48.0)]).with_tag("landuse", "meadow"),
    ];
    let mut surface = RecordingSurface::new();
    render_tile(&features, &swiss_tile(), &mut surface);

    // meadow fill, then each road's casing and center line in input order
    assert_eq!(surface.len(), 5);
    assert!(matches!(surface.calls[0], DrawCall::Fill { .. }));
    let first_x: Vec<f64> = surface.calls[1..]
        .iter()
        .map(|c| match c {
            DrawCall::Stroke { points, .. } => points[0].x,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(first_x[0], first_x[1]);
    assert_eq!(first_x[2], first_x[3]);
    assert!(first_x[0] < first_x[2]);
}

#[test]
fn placed_points_stay_on_the_canvas() {
    let features = vec![
        polygon(&[(8.0, 47.0), (9.0, 47.0), (9.0, 48.0), (8.0, 48.0)]).with_tag("landuse", "forest"),
        line(&[(8.25, 47.75), (8.75, 47.25)]).with_tag("water", "river"),
    ];
    let placed = Tile::from_features(&features).place(&swiss_tile());
    for shape in placed.shapes() {
        for p in shape.points() {
            assert!((-1e-6..=256.0 + 1e-6).contains(&p.x), "{p:?}");
            assert!((-1e-6..=256.0 + 1e-6).contains(&p.y), "{p:?}");
        }
    }
    // north-west corner of the forest lands at the top-left
    let nw = placed.shapes()[0].points()[3];
    assert!(nw.x.abs() < 1e-6);
    assert!(nw.y.abs() < 1e-6);
}

#[test]
fn tile_bounds_fit_the_canvas() {
    let features = vec![
        line(&[(8.0, 47.0), (9.0, 48.0)]).with_tag("highway", "primary"),
    ];
    let tile = Tile::from_features(&features);
    let params = TileParams::fit(&tile.bounds(), 512.0, 256.0).unwrap();
    let placed = tile.place(&params);
    let end = placed.shapes()[0].points()[1];
    // the tighter axis fills the canvas exactly
    assert!((end.y - 0.0).abs() < 1e-6 || (end.x - 512.0).abs() < 1e-6);
}

#[test]
fn tiles_render_in_parallel() {
    let features: Vec<MapFeatureData> = (0..8)
        .map(|i| {
            let lon = 8.0 + i as f64 * 0.1;
            line(&[(lon, 47.0), (lon, 48.0)]).with_tag("railway", "rail")
        })
        .collect();
    let params = swiss_tile();

    let logs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let mut surface = RecordingSurface::new();
                    render_tile(&features, &params, &mut surface);
                    surface.to_log()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(logs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(logs[0].lines().count(), 16);
}
