//! Cell/cone intersection.
//!
//! A cell intersects a cone when any of its four corners or its center lies
//! in the cone, or when either boundary ray of the cone, drawn as a straight
//! segment in lat/lon space, crosses the cell rectangle.

use super::cone::{Cone, ConeFootprint};
use super::coords::destination_point;
use bluecone_types::{DistanceMetric, GeoPoint, GridCell};
use geo::{Intersects, Line};
use serde::{Deserialize, Serialize};

/// Length of the boundary rays: `radius / cos((angle / 180) * (π / 2))`.
///
/// The secant inflation lets straight rays reach cells clipped by the sector
/// edges near the rim. For angles at or beyond 180° the divisor is zero or
/// negative and the result is huge or negative; the value is still used as
/// is, which projects the ray far away or backwards.
///
/// ```
/// use bluecone::compute::spatial::adjusted_radius;
///
/// assert!((adjusted_radius(1000.0, 0.0) - 1000.0).abs() < 1e-9);
/// assert!((adjusted_radius(1000.0, 120.0) - 2000.0).abs() < 1e-9);
/// ```
#[inline]
pub fn adjusted_radius(radius_m: f64, angle_deg: f64) -> f64 {
    radius_m / ((angle_deg / 180.0) * std::f64::consts::FRAC_PI_2).cos()
}

/// The two boundary rays of a cone as segments from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeSegments {
    pub origin: GeoPoint,
    /// Endpoint on bearing `direction + angle / 2`.
    pub positive: GeoPoint,
    /// Endpoint on bearing `direction - angle / 2`.
    pub negative: GeoPoint,
}

impl ConeSegments {
    pub fn new(cone: &Cone, metric: DistanceMetric) -> Self {
        let origin = cone.origin();
        let length = adjusted_radius(cone.radius_m(), cone.angle_deg());
        let half = cone.half_angle_deg();
        Self {
            origin,
            positive: destination_point(&origin, length, cone.direction_deg() + half, metric),
            negative: destination_point(&origin, length, cone.direction_deg() - half, metric),
        }
    }

    /// Planar segments (`x = lon`, `y = lat`), positive ray first.
    pub fn lines(&self) -> [Line<f64>; 2] {
        [
            Line::new(self.origin.coord(), self.positive.coord()),
            Line::new(self.origin.coord(), self.negative.coord()),
        ]
    }

    /// `[origin, positive, negative]`, the order used when rendering the cone.
    pub fn points(&self) -> [GeoPoint; 3] {
        [self.origin, self.positive, self.negative]
    }

    /// Whether either ray crosses or touches the cell rectangle.
    pub fn cross_cell(&self, cell: &GridCell) -> bool {
        let polygon = cell.to_polygon();
        self.lines().iter().any(|line| line.intersects(&polygon))
    }
}

/// Boundary ray endpoints for `cone`.
pub fn cone_segments(cone: &Cone, metric: DistanceMetric) -> ConeSegments {
    ConeSegments::new(cone, metric)
}

/// Whether any of the cell's corners or its center lies inside the cone.
pub fn cell_has_point_in_cone(cell: &GridCell, footprint: &ConeFootprint) -> bool {
    cell.corners()
        .iter()
        .chain(std::iter::once(&cell.center()))
        .any(|point| footprint.contains(point))
}

/// Intersection test against precomputed per-query geometry.
pub fn cell_intersects(cell: &GridCell, footprint: &ConeFootprint, segments: &ConeSegments) -> bool {
    cell_has_point_in_cone(cell, footprint) || segments.cross_cell(cell)
}

/// Whether `cell` intersects `cone`.
///
/// Degenerate cells (zero width or height) go through the same tests and
/// always produce a plain boolean.
///
/// # Examples
///
/// ```
/// use bluecone::compute::spatial::cell_intersects_cone;
/// use bluecone::{Cone, DistanceMetric, GeoPoint, GridCell};
///
/// let cone = Cone::new(GeoPoint::new(0.0, 0.0), 1000.0, 60.0, 0.0)?;
/// let ahead = GridCell::new(1, GeoPoint::new(0.002, -0.001), GeoPoint::new(0.004, 0.001));
/// let behind = GridCell::new(2, GeoPoint::new(-0.004, -0.001), GeoPoint::new(-0.002, 0.001));
///
/// assert!(cell_intersects_cone(&ahead, &cone, DistanceMetric::Haversine));
/// assert!(!cell_intersects_cone(&behind, &cone, DistanceMetric::Haversine));
/// # Ok::<(), bluecone::BlueconeError>(())
/// ```
pub fn cell_intersects_cone(cell: &GridCell, cone: &Cone, metric: DistanceMetric) -> bool {
    let footprint = ConeFootprint::new(cone, metric);
    if cell_has_point_in_cone(cell, &footprint) {
        return true;
    }
    ConeSegments::new(cone, metric).cross_cell(cell)
}
