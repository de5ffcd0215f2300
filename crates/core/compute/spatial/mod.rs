pub mod cone;
pub mod coords;
pub mod intersection;
pub mod scan;

pub use cone::{Cone, ConeFootprint, bearing_in_sector, is_point_in_cone};
pub use coords::{
    Axis, DegreeScale, destination_point, distance_m, geodesic_distance_km, initial_bearing,
    km_per_degree, normalize_degrees,
};
pub use intersection::{
    ConeSegments, adjusted_radius, cell_has_point_in_cone, cell_intersects, cell_intersects_cone,
    cone_segments,
};
#[cfg(feature = "parallel")]
pub use scan::subset_intersecting_cone_par;
pub use scan::{GridIndex, find_cell_containing, serialize_subset, subset_intersecting_cone};
