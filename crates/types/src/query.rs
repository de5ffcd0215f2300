//! Wire shape of a cone query as it arrives from an upstream handler.

use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// Raw, unvalidated cone parameters.
///
/// Field names match the request record exactly. `cone_origin` must be a
/// `[lat, lon]` pair; anything else fails to deserialize.
///
/// ```
/// use bluecone_types::query::ConeQuery;
///
/// let json = r#"{"cone_origin":[47.66,9.17],"cone_radius":800,"cone_angle":60,"cone_direction":90}"#;
/// let query: ConeQuery = serde_json::from_str(json).unwrap();
/// assert_eq!(query.cone_radius, 800.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeQuery {
    pub cone_origin: GeoPoint,
    /// Meters.
    pub cone_radius: f64,
    /// Full angular width in degrees.
    pub cone_angle: f64,
    /// Facing bearing in degrees, 0 = north, clockwise.
    pub cone_direction: f64,
}

impl ConeQuery {
    pub fn new(origin: GeoPoint, radius_m: f64, angle_deg: f64, direction_deg: f64) -> Self {
        Self {
            cone_origin: origin,
            cone_radius: radius_m,
            cone_angle: angle_deg,
            cone_direction: direction_deg,
        }
    }
}
