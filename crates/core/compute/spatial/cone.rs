//! Cones and the point-in-cone predicate.

use super::coords::{DegreeScale, initial_bearing, normalize_degrees};
use crate::compute::validation::{
    validate_cone_angle, validate_direction, validate_geographic_point, validate_radius,
};
use crate::error::{BlueconeError, Result};
use bluecone_types::{ConeQuery, DistanceMetric, GeoPoint};
use serde::{Deserialize, Serialize};

/// A directional sector emanating from an origin.
///
/// Construction validates every parameter, so a `Cone` value always has a
/// positive finite radius, an angle in (0, 360], a finite direction and an
/// origin within geographic range. Serializes as a [`ConeQuery`] record.
///
/// # Examples
///
/// ```
/// use bluecone::{Cone, GeoPoint};
///
/// let cone = Cone::new(GeoPoint::new(47.66, 9.17), 800.0, 60.0, 90.0)?;
/// assert_eq!(cone.angular_range(), (60.0, 120.0));
///
/// assert!(Cone::new(GeoPoint::new(47.66, 9.17), 0.0, 60.0, 90.0).is_err());
/// assert!(Cone::new(GeoPoint::new(47.66, 9.17), 800.0, 400.0, 90.0).is_err());
/// # Ok::<(), bluecone::BlueconeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConeQuery", into = "ConeQuery")]
pub struct Cone {
    origin: GeoPoint,
    radius_m: f64,
    angle_deg: f64,
    direction_deg: f64,
}

impl Cone {
    pub fn new(origin: GeoPoint, radius_m: f64, angle_deg: f64, direction_deg: f64) -> Result<Self> {
        validate_geographic_point(&origin)
            .map_err(|e| BlueconeError::InvalidArgument(format!("Cone origin: {}", e)))?;
        validate_radius(radius_m)?;
        validate_cone_angle(angle_deg)?;
        validate_direction(direction_deg)?;

        Ok(Self {
            origin,
            radius_m,
            angle_deg,
            direction_deg,
        })
    }

    #[inline]
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    /// Meters.
    #[inline]
    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    /// Full angular width in degrees.
    #[inline]
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    /// Facing bearing as given, not normalized.
    #[inline]
    pub fn direction_deg(&self) -> f64 {
        self.direction_deg
    }

    #[inline]
    pub fn half_angle_deg(&self) -> f64 {
        self.angle_deg / 2.0
    }

    /// Same cone with another radius.
    pub fn with_radius(&self, radius_m: f64) -> Result<Self> {
        Self::new(self.origin, radius_m, self.angle_deg, self.direction_deg)
    }

    /// The sector spans every bearing.
    #[inline]
    pub fn is_full_circle(&self) -> bool {
        self.angle_deg >= 360.0
    }

    /// Sector bounds `(start, end)`, both normalized to `[0, 360)`.
    ///
    /// `start > end` means the sector wraps through north. A full circle
    /// yields `start == end` exactly, whatever the direction.
    pub fn angular_range(&self) -> (f64, f64) {
        let direction = normalize_degrees(self.direction_deg);
        // direction - 180 and direction + 180 can wrap to values one ulp apart
        if self.is_full_circle() {
            return (direction, direction);
        }
        (
            normalize_degrees(direction - self.half_angle_deg()),
            normalize_degrees(direction + self.half_angle_deg()),
        )
    }

    /// Whether a bearing in `[0, 360)` falls inside the angular sector,
    /// bounds inclusive.
    pub fn covers_bearing(&self, bearing_deg: f64) -> bool {
        let (start, end) = self.angular_range();
        bearing_in_sector(normalize_degrees(bearing_deg), start, end)
    }
}

/// Sector test on normalized angles.
///
/// Equal bounds go to the wrapping branch, which admits every bearing; this
/// is what makes a 360° cone a full circle.
#[inline]
pub fn bearing_in_sector(bearing: f64, start: f64, end: f64) -> bool {
    if start < end {
        start <= bearing && bearing <= end
    } else {
        bearing >= start || bearing <= end
    }
}

impl TryFrom<ConeQuery> for Cone {
    type Error = BlueconeError;

    fn try_from(query: ConeQuery) -> Result<Self> {
        Self::new(
            query.cone_origin,
            query.cone_radius,
            query.cone_angle,
            query.cone_direction,
        )
    }
}

impl From<Cone> for ConeQuery {
    fn from(cone: Cone) -> Self {
        ConeQuery::new(cone.origin, cone.radius_m, cone.angle_deg, cone.direction_deg)
    }
}

/// Per-query quantities of a cone, derived once and reused for every point
/// tested against it.
#[derive(Debug, Clone, Copy)]
pub struct ConeFootprint {
    origin: GeoPoint,
    radius_lat_deg: f64,
    radius_lon_deg: f64,
    start_deg: f64,
    end_deg: f64,
}

impl ConeFootprint {
    pub fn new(cone: &Cone, metric: DistanceMetric) -> Self {
        let scale = DegreeScale::at(&cone.origin, metric);
        let (radius_lat_deg, radius_lon_deg) = scale.radius_in_degrees(cone.radius_m);
        let (start_deg, end_deg) = cone.angular_range();
        Self {
            origin: cone.origin,
            radius_lat_deg,
            radius_lon_deg,
            start_deg,
            end_deg,
        }
    }

    /// Radius as `(lat_degrees, lon_degrees)`.
    pub fn radius_in_degrees(&self) -> (f64, f64) {
        (self.radius_lat_deg, self.radius_lon_deg)
    }

    /// Axis-aligned degree box around the origin. Stands in for the radius
    /// circle and admits the box corners a true circle would reject.
    #[inline]
    pub fn in_radius_box(&self, point: &GeoPoint) -> bool {
        (point.lat() - self.origin.lat()).abs() <= self.radius_lat_deg
            && (point.lon() - self.origin.lon()).abs() <= self.radius_lon_deg
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        if !self.in_radius_box(point) {
            return false;
        }
        let bearing = initial_bearing(&self.origin, point);
        bearing_in_sector(bearing, self.start_deg, self.end_deg)
    }
}

/// Whether `point` lies inside `cone`: within the radius degree box and
/// within the angular sector.
///
/// # Examples
///
/// ```
/// use bluecone::compute::spatial::is_point_in_cone;
/// use bluecone::{Cone, DistanceMetric, GeoPoint};
///
/// // facing north-west-ish through 0°
/// let cone = Cone::new(GeoPoint::new(0.0, 0.0), 1000.0, 30.0, 350.0)?;
/// assert!(is_point_in_cone(&GeoPoint::new(0.005, 0.0), &cone, DistanceMetric::Haversine));
/// assert!(!is_point_in_cone(&GeoPoint::new(-0.005, 0.0009), &cone, DistanceMetric::Haversine));
/// # Ok::<(), bluecone::BlueconeError>(())
/// ```
pub fn is_point_in_cone(point: &GeoPoint, cone: &Cone, metric: DistanceMetric) -> bool {
    ConeFootprint::new(cone, metric).contains(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRIC: DistanceMetric = DistanceMetric::Haversine;

    fn equator_cone(angle: f64, direction: f64) -> Cone {
        Cone::new(GeoPoint::new(0.0, 0.0), 1000.0, angle, direction).unwrap()
    }

    #[test]
    fn test_cone_validation() {
        let origin = GeoPoint::new(10.0, 10.0);
        assert!(Cone::new(origin, 100.0, 360.0, -45.0).is_ok());

        assert!(Cone::new(origin, -1.0, 45.0, 0.0).is_err());
        assert!(Cone::new(origin, 100.0, 0.0, 0.0).is_err());
        assert!(Cone::new(origin, 100.0, 360.5, 0.0).is_err());
        assert!(Cone::new(origin, 100.0, 45.0, f64::NAN).is_err());
        assert!(Cone::new(GeoPoint::new(91.0, 0.0), 100.0, 45.0, 0.0).is_err());
    }

    #[test]
    fn test_angular_range() {
        assert_eq!(equator_cone(90.0, 90.0).angular_range(), (45.0, 135.0));
        assert_eq!(equator_cone(30.0, 350.0).angular_range(), (335.0, 5.0));
        assert_eq!(equator_cone(30.0, -10.0).angular_range(), (335.0, 5.0));
        assert_eq!(equator_cone(60.0, 720.0).angular_range(), (330.0, 30.0));

        let (start, end) = equator_cone(360.0, 123.0).angular_range();
        assert_eq!(start, end);
    }

    #[test]
    fn test_bearing_in_sector_bounds() {
        assert!(bearing_in_sector(45.0, 45.0, 135.0));
        assert!(bearing_in_sector(135.0, 45.0, 135.0));
        assert!(!bearing_in_sector(44.9, 45.0, 135.0));

        assert!(bearing_in_sector(0.0, 335.0, 5.0));
        assert!(bearing_in_sector(335.0, 335.0, 5.0));
        assert!(bearing_in_sector(5.0, 335.0, 5.0));
        assert!(!bearing_in_sector(170.0, 335.0, 5.0));

        // equal bounds: full circle
        for bearing in [0.0, 90.0, 180.0, 303.0, 359.99] {
            assert!(bearing_in_sector(bearing, 303.0, 303.0));
        }
    }

    #[test]
    fn test_full_circle_ignores_direction() {
        let point = GeoPoint::new(-0.005, -0.005);
        for direction in [0.0, 90.0, 275.3, -45.0, 1234.0] {
            let cone = equator_cone(360.0, direction);
            assert!(is_point_in_cone(&point, &cone, METRIC), "direction {}", direction);
        }
    }

    #[test]
    fn test_full_circle_fractional_directions() {
        let due_north = GeoPoint::new(0.005, 0.0);
        let south_west = GeoPoint::new(-0.004, -0.003);
        for direction in [243.1, 350.17, -133.4, 0.1, 17.3, 99.99, 181.7, 271.05, 1e-9, 719.3] {
            let cone = equator_cone(360.0, direction);
            let (start, end) = cone.angular_range();
            assert_eq!(start, end, "direction {}", direction);
            assert!(cone.covers_bearing(123.456), "direction {}", direction);
            assert!(is_point_in_cone(&due_north, &cone, METRIC), "direction {}", direction);
            assert!(is_point_in_cone(&south_west, &cone, METRIC), "direction {}", direction);
        }
    }

    #[test]
    fn test_wraparound_sector() {
        let cone = equator_cone(30.0, 350.0);
        // due north
        assert!(is_point_in_cone(&GeoPoint::new(0.005, 0.0), &cone, METRIC));
        // about 170°
        assert!(!is_point_in_cone(&GeoPoint::new(-0.005, 0.00088), &cone, METRIC));
        // about 340°
        assert!(is_point_in_cone(&GeoPoint::new(0.005, -0.0018), &cone, METRIC));
    }

    #[test]
    fn test_radius_box_rejects_far_points() {
        let cone = equator_cone(360.0, 0.0);
        assert!(!is_point_in_cone(&GeoPoint::new(0.0095, 0.0), &cone, METRIC));
        assert!(!is_point_in_cone(&GeoPoint::new(0.0, -0.0095), &cone, METRIC));
    }

    #[test]
    fn test_radius_box_admits_box_corners() {
        // ~1.27 km from the origin, outside a 1 km circle but inside the box
        let corner = GeoPoint::new(0.0089, 0.0089);
        let cone = equator_cone(90.0, 45.0);
        assert!(is_point_in_cone(&corner, &cone, METRIC));
    }

    #[test]
    fn test_origin_is_inside() {
        // bearing to itself is 0°
        let cone = equator_cone(30.0, 0.0);
        assert!(is_point_in_cone(&GeoPoint::new(0.0, 0.0), &cone, METRIC));
    }

    #[test]
    fn test_cone_serde_through_query() {
        let json = r#"{"cone_origin":[47.66,9.17],"cone_radius":500,"cone_angle":60,"cone_direction":-90}"#;
        let cone: Cone = serde_json::from_str(json).unwrap();
        assert_eq!(cone.origin(), GeoPoint::new(47.66, 9.17));
        assert_eq!(cone.direction_deg(), -90.0);

        let bad = r#"{"cone_origin":[47.66,9.17],"cone_radius":-5,"cone_angle":60,"cone_direction":0}"#;
        assert!(serde_json::from_str::<Cone>(bad).is_err());

        let back = serde_json::to_value(cone).unwrap();
        assert_eq!(back["cone_radius"], 500.0);
        assert_eq!(back["cone_origin"], serde_json::json!([47.66, 9.17]));
    }
}
