use bluecone::{ConeEngine, ConeQuery, DistanceMetric, GeoPoint, GridCell, GridIndex};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug to see scan statistics
    env_logger::init();

    println!("=== bluecone - Cone Scan ===\n");

    // A 20 x 20 grid of 0.001° cells around the harbour
    let side = 20;
    let grid: GridIndex = (0..side * side)
        .map(|i| {
            let sw = GeoPoint::new(47.655 + (i / side) as f64 * 0.001, 9.165 + (i % side) as f64 * 0.001);
            GridCell::new(1000 + i as i64, sw, GeoPoint::new(sw.lat() + 0.001, sw.lon() + 0.001))
        })
        .collect();
    println!("Grid: {} cells\n", grid.len());

    let query: ConeQuery = serde_json::from_str(
        r#"{"cone_origin":[47.6632,9.1741],"cone_radius":800,"cone_angle":60,"cone_direction":90}"#,
    )?;

    for metric in [DistanceMetric::Haversine, DistanceMetric::Geodesic, DistanceMetric::Rhumb] {
        let engine = ConeEngine::builder()
            .distance_metric(metric)
            .point_decimals(5)
            .build()?;
        let response = engine.evaluate_query(&grid, query)?;

        println!("{} metric", metric);
        println!("   Home cell:     {:?}", response.home_cell.map(|i| grid.cells()[i].grid_num));
        println!("   Cells touched: {}", response.grid_indices.len());
        println!(
            "   Cone points:   {}, {}, {}\n",
            response.bluecone_points[0], response.bluecone_points[1], response.bluecone_points[2]
        );
    }

    // Malformed queries are rejected before any scan
    let bad = ConeQuery { cone_angle: 0.0, ..query };
    match ConeEngine::default().evaluate_query(&grid, bad) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
