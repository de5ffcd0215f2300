//! Coordinate math: distance, local degree scale, destination point, bearing.
//!
//! Distance and destination projection are dispatched over the `geo` metric
//! spaces selected by [`DistanceMetric`]. Whatever metric is chosen, the same
//! one must feed both [`DegreeScale`] and [`destination_point`] so that the
//! cheap degree-box check and the projected ray endpoints agree.

use bluecone_types::{DistanceMetric, GeoPoint};
use geo::{Destination, Distance, Geodesic, Haversine, Rhumb};

/// Coordinate axis for one-degree measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// Wrap an angle in degrees into `[0, 360)`.
///
/// ```
/// use bluecone::compute::spatial::normalize_degrees;
///
/// assert_eq!(normalize_degrees(-10.0), 350.0);
/// assert_eq!(normalize_degrees(725.0), 5.0);
/// assert_eq!(normalize_degrees(360.0), 0.0);
/// ```
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Surface distance between two points in meters.
pub fn distance_m(a: &GeoPoint, b: &GeoPoint, metric: DistanceMetric) -> f64 {
    let (a, b) = (a.into_inner(), b.into_inner());
    match metric {
        DistanceMetric::Haversine => Haversine.distance(a, b),
        DistanceMetric::Geodesic => Geodesic.distance(a, b),
        DistanceMetric::Rhumb => Rhumb.distance(a, b),
    }
}

/// Surface distance between two points in kilometers.
///
/// ```
/// use bluecone::compute::spatial::geodesic_distance_km;
/// use bluecone::{DistanceMetric, GeoPoint};
///
/// let d = geodesic_distance_km(
///     &GeoPoint::new(0.0, 0.0),
///     &GeoPoint::new(1.0, 0.0),
///     DistanceMetric::Haversine,
/// );
/// assert!((d - 111.195).abs() < 0.01);
/// ```
pub fn geodesic_distance_km(a: &GeoPoint, b: &GeoPoint, metric: DistanceMetric) -> f64 {
    distance_m(a, b, metric) / 1000.0
}

/// Kilometers covered by one degree along `axis`, measured at `origin`.
///
/// This is a local linearization: the value is exact at the origin only and
/// drifts with distance from it, most visibly for longitude away from the
/// equator.
pub fn km_per_degree(origin: &GeoPoint, axis: Axis, metric: DistanceMetric) -> f64 {
    let one_degree_on = match axis {
        Axis::Latitude => GeoPoint::new(origin.lat() + 1.0, origin.lon()),
        Axis::Longitude => GeoPoint::new(origin.lat(), origin.lon() + 1.0),
    };
    geodesic_distance_km(origin, &one_degree_on, metric)
}

/// Per-axis kilometers-per-degree scale at one origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeScale {
    pub km_per_lat_degree: f64,
    pub km_per_lon_degree: f64,
}

impl DegreeScale {
    pub fn at(origin: &GeoPoint, metric: DistanceMetric) -> Self {
        Self {
            km_per_lat_degree: km_per_degree(origin, Axis::Latitude, metric),
            km_per_lon_degree: km_per_degree(origin, Axis::Longitude, metric),
        }
    }

    /// A radius in meters expressed as `(lat_degrees, lon_degrees)`, each
    /// axis converted with its own scale.
    pub fn radius_in_degrees(&self, radius_m: f64) -> (f64, f64) {
        let radius_km = radius_m / 1000.0;
        (
            radius_km / self.km_per_lat_degree,
            radius_km / self.km_per_lon_degree,
        )
    }
}

/// Point reached by travelling `distance_m` from `origin` on the initial
/// compass bearing `bearing_deg` (the direct geodesic problem).
///
/// A negative distance travels the opposite way.
pub fn destination_point(
    origin: &GeoPoint,
    distance_m: f64,
    bearing_deg: f64,
    metric: DistanceMetric,
) -> GeoPoint {
    let start = origin.into_inner();
    let end = match metric {
        DistanceMetric::Haversine => Haversine.destination(start, bearing_deg, distance_m),
        DistanceMetric::Geodesic => Geodesic.destination(start, bearing_deg, distance_m),
        DistanceMetric::Rhumb => Rhumb.destination(start, bearing_deg, distance_m),
    };
    GeoPoint::from(end)
}

/// Initial compass bearing from `from` to `to` in `[0, 360)`, 0 = north,
/// clockwise, by the spherical formula
///
/// `θ = atan2(sin(Δlon)·cos(lat2), cos(lat1)·sin(lat2) − sin(lat1)·cos(lat2)·cos(Δlon))`.
///
/// Malformed coordinate input is rejected where it is parsed into a
/// [`GeoPoint`]; see `GeoPoint::try_from`.
pub fn initial_bearing(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();
    let delta_lon = (to.lon() - from.lon()).to_radians();

    let x = delta_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    normalize_degrees(x.atan2(y).to_degrees())
}
