use bluecone::compute::spatial::{
    ConeFootprint, cell_has_point_in_cone, cell_intersects_cone, destination_point,
    find_cell_containing, geodesic_distance_km, initial_bearing, is_point_in_cone,
    subset_intersecting_cone,
};
use bluecone::prelude::*;

const METRIC: DistanceMetric = DistanceMetric::Haversine;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn square_grid(lat0: f64, lon0: f64, step: f64, n: usize) -> GridIndex {
    let mut cells = Vec::with_capacity(n * n);
    for r in 0..n {
        for c in 0..n {
            let sw = GeoPoint::new(lat0 + r as f64 * step, lon0 + c as f64 * step);
            let ne = GeoPoint::new(sw.lat() + step, sw.lon() + step);
            cells.push(GridCell::new((r * n + c) as i64, sw, ne));
        }
    }
    GridIndex::new(cells)
}

/// Test 1: a 360° cone ignores its direction
#[test]
fn test_full_circle_depends_only_on_radius_box() {
    let origin = GeoPoint::new(0.0, 0.0);
    let inside = [
        GeoPoint::new(0.008, 0.0),
        GeoPoint::new(0.0, -0.008),
        GeoPoint::new(-0.006, 0.006),
        GeoPoint::new(0.0089, 0.0089),
    ];
    let outside = [GeoPoint::new(0.0091, 0.0), GeoPoint::new(0.0, 0.0091)];

    for direction in [0.0, 45.0, 180.0, 359.0, -90.0, 3600.0, 243.1, 350.17, -133.4, 12.345] {
        let cone = Cone::new(origin, 1000.0, 360.0, direction).unwrap();
        for p in &inside {
            assert!(is_point_in_cone(p, &cone, METRIC), "{} dir {}", p, direction);
        }
        for p in &outside {
            assert!(!is_point_in_cone(p, &cone, METRIC), "{} dir {}", p, direction);
        }
    }
}

#[test]
fn test_full_circle_subset_ignores_direction() {
    let strip = GridIndex::new(
        (0..4)
            .map(|i| {
                let lat = i as f64 * 0.002;
                GridCell::new(i, GeoPoint::new(lat, -0.001), GeoPoint::new(lat + 0.002, 0.001))
            })
            .collect(),
    );
    let origin = GeoPoint::new(0.0, 0.0);

    let reference = subset_intersecting_cone(&strip, &Cone::new(origin, 1000.0, 360.0, 0.0).unwrap(), METRIC);
    assert_eq!(reference, vec![0, 1, 2, 3]);
    for direction in [243.1, 350.17, -133.4, 77.77, 199.9] {
        let cone = Cone::new(origin, 1000.0, 360.0, direction).unwrap();
        assert_eq!(subset_intersecting_cone(&strip, &cone, METRIC), reference, "dir {}", direction);
    }
}

/// Test 2: a sector spanning north
#[test]
fn test_sector_wraparound() {
    let origin = GeoPoint::new(0.0, 0.0);
    let cone = Cone::new(origin, 1000.0, 30.0, 350.0).unwrap();

    let north = destination_point(&origin, 500.0, 0.0, METRIC);
    assert!(initial_bearing(&origin, &north) < 1e-6 || initial_bearing(&origin, &north) > 360.0 - 1e-6);
    assert!(is_point_in_cone(&north, &cone, METRIC));

    let south_ish = destination_point(&origin, 500.0, 170.0, METRIC);
    assert!(!is_point_in_cone(&south_ish, &cone, METRIC));

    let edge = destination_point(&origin, 500.0, 336.0, METRIC);
    assert!(is_point_in_cone(&edge, &cone, METRIC));
    let past_edge = destination_point(&origin, 500.0, 6.0, METRIC);
    assert!(!is_point_in_cone(&past_edge, &cone, METRIC));
}

/// Test 3: destination point and bearing/distance agree
#[test]
fn test_destination_round_trip() {
    let origin = GeoPoint::new(47.0, 9.0);
    let dest = destination_point(&origin, 500.0, 45.0, METRIC);

    let distance_m = geodesic_distance_km(&origin, &dest, METRIC) * 1000.0;
    assert!((distance_m - 500.0).abs() / 500.0 < 1e-3);

    let forward = initial_bearing(&origin, &dest);
    assert!((forward - 45.0).abs() / 45.0 < 1e-3);

    // the reverse bearing points back along the same great circle
    let reverse = initial_bearing(&dest, &origin);
    assert!((reverse - 225.0).abs() / 225.0 < 1e-3);
    let back = destination_point(&dest, 500.0, reverse, METRIC);
    assert!((back.lat() - origin.lat()).abs() < 1e-9);
    assert!((back.lon() - origin.lon()).abs() < 1e-9);
}

/// Test 4: a longer radius never drops a cell
#[test]
fn test_subset_monotonic_in_radius() {
    init_logging();
    let grid = square_grid(47.63, 9.14, 0.005, 12);
    let origin = GeoPoint::new(47.66, 9.17);

    for (angle, direction) in [(30.0, 0.0), (60.0, 45.0), (90.0, 200.0), (120.0, 300.0)] {
        let mut previous: Vec<usize> = Vec::new();
        for radius in [200.0, 400.0, 800.0, 1200.0, 1600.0] {
            let cone = Cone::new(origin, radius, angle, direction).unwrap();
            let subset = subset_intersecting_cone(&grid, &cone, METRIC);
            for idx in &previous {
                assert!(
                    subset.contains(idx),
                    "cell {} dropped at radius {} (angle {}, dir {})",
                    idx,
                    radius,
                    angle,
                    direction
                );
            }
            assert!(subset.len() >= previous.len());
            previous = subset;
        }
    }
}

/// Test 5: home cell lookup over three adjacent cells
#[test]
fn test_find_cell_containing_adjacent_cells() {
    let grid = GridIndex::new(vec![
        GridCell::new(100, GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)),
        GridCell::new(101, GeoPoint::new(1.0, 0.0), GeoPoint::new(2.0, 1.0)),
        GridCell::new(102, GeoPoint::new(2.0, 0.0), GeoPoint::new(3.0, 1.0)),
    ]);

    assert_eq!(find_cell_containing(&grid, &GeoPoint::new(1.5, 0.5)), Some(1));
    assert_eq!(find_cell_containing(&grid, &GeoPoint::new(5.0, 5.0)), None);
    // a shared edge goes to the earlier cell
    assert_eq!(find_cell_containing(&grid, &GeoPoint::new(2.0, 0.5)), Some(1));
}

/// Test 6: every corner and the center outside the angular sector, the cell
/// still intersects because both rays start inside it
#[test]
fn test_ray_only_intersection_outside_sector() {
    // sector [75°, 105°]; corners sit on 45°, 135°, 225°, 315° and the center
    // is the origin itself, bearing 0°
    let cone = Cone::new(GeoPoint::new(0.0, 0.0), 1000.0, 30.0, 90.0).unwrap();
    let around_origin = GridCell::new(1, GeoPoint::new(-0.001, -0.001), GeoPoint::new(0.001, 0.001));

    let footprint = ConeFootprint::new(&cone, METRIC);
    for corner in around_origin.corners() {
        assert!(footprint.in_radius_box(&corner));
        assert!(!cone.covers_bearing(initial_bearing(&cone.origin(), &corner)));
    }
    assert!(!cone.covers_bearing(initial_bearing(&cone.origin(), &around_origin.center())));
    assert!(!cell_has_point_in_cone(&around_origin, &footprint));

    assert!(cell_intersects_cone(&around_origin, &cone, METRIC));
}

/// A cell past the radius box, reached only by the lengthened 75° ray. Some
/// corners fall inside the angular sector and are rejected by the box.
#[test]
fn test_ray_only_intersection_beyond_radius_box() {
    // rays on 15° and 75°; the 75° ray leaves the longitude box near 0.0090° E
    let cone = Cone::new(GeoPoint::new(0.0, 0.0), 1000.0, 60.0, 45.0).unwrap();
    let crossed = GridCell::new(1, GeoPoint::new(0.0024, 0.0095), GeoPoint::new(0.0028, 0.0098));

    let footprint = ConeFootprint::new(&cone, METRIC);
    assert!(!cell_has_point_in_cone(&crossed, &footprint));
    for corner in crossed.corners() {
        assert!(!is_point_in_cone(&corner, &cone, METRIC));
    }
    assert!(!is_point_in_cone(&crossed.center(), &cone, METRIC));

    assert!(cell_intersects_cone(&crossed, &cone, METRIC));
}

#[test]
fn test_query_record_end_to_end() {
    init_logging();
    let grid = square_grid(47.65, 9.16, 0.0025, 8);
    let json = r#"{"cone_origin":[47.6601,9.1701],"cone_radius":700,"cone_angle":50,"cone_direction":20}"#;
    let query: ConeQuery = serde_json::from_str(json).unwrap();

    let engine = ConeEngine::builder().point_decimals(3).build().unwrap();
    let response = engine.evaluate_query(&grid, query).unwrap();

    let home = response.home_cell.expect("origin lies inside the grid");
    assert!(response.grid_indices.contains(&home));
    assert_eq!(response.grids.len(), response.grid_indices.len());
    for (record, &idx) in response.grids.iter().zip(&response.grid_indices) {
        assert_eq!(record.grid_number, grid.get(idx).unwrap().grid_num);
    }
    assert_eq!(response.bluecone_points[0], GeoPoint::new(47.66, 9.17));
}

#[test]
fn test_malformed_query_is_invalid_argument() {
    let query = ConeQuery::new(GeoPoint::new(47.0, 9.0), 500.0, 45.0, 0.0);
    let engine = ConeEngine::default();

    for bad in [
        ConeQuery { cone_radius: 0.0, ..query },
        ConeQuery { cone_radius: -3.0, ..query },
        ConeQuery { cone_angle: 0.0, ..query },
        ConeQuery { cone_angle: 361.0, ..query },
        ConeQuery { cone_origin: GeoPoint::new(120.0, 9.0), ..query },
    ] {
        let err = engine.evaluate_query(&GridIndex::default(), bad).unwrap_err();
        assert!(err.is_invalid_argument(), "{:?}", bad);
    }

    let err: BlueconeError = GeoPoint::try_from(&[47.0][..]).unwrap_err().into();
    assert!(err.is_invalid_argument());
}
