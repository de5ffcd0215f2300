//! Geographic point wrapper around the `geo` crate.
//!
//! Coordinates are handled in (latitude, longitude) order throughout this
//! workspace, which is also the wire order: a point serializes to and
//! deserializes from a two-element `[lat, lon]` array. Internally the point is
//! a `geo::Point` with `x = lon` and `y = lat`, so it can be handed to `geo`
//! algorithms without conversion.

use crate::error::GeometryError;
use serde::{Deserialize, Serialize};

/// Distance model backing the engine's geodesic computations.
///
/// The same metric is used to derive local degree scales and to project
/// destination points, so the two always agree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Great-circle on a sphere of mean Earth radius.
    #[default]
    Haversine,
    /// Karney's algorithm on the WGS-84 ellipsoid.
    Geodesic,
    /// Loxodrome on a sphere of mean Earth radius.
    Rhumb,
}

impl std::fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Haversine => write!(f, "haversine"),
            Self::Geodesic => write!(f, "geodesic"),
            Self::Rhumb => write!(f, "rhumb"),
        }
    }
}

/// A geographic point in degrees.
///
/// No range check happens on construction; range validation lives in the
/// engine crate so callers decide where to fail.
///
/// # Examples
///
/// ```
/// use bluecone_types::geo::GeoPoint;
///
/// let konstanz = GeoPoint::new(47.663495, 9.173372);
/// assert_eq!(konstanz.lat(), 47.663495);
/// assert_eq!(konstanz.lon(), 9.173372);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct GeoPoint {
    inner: geo::Point<f64>,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            inner: geo::Point::new(lon, lat),
        }
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.inner.y()
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.inner.x()
    }

    /// Access the inner `geo::Point` (`x = lon`, `y = lat`).
    #[inline]
    pub fn inner(&self) -> &geo::Point<f64> {
        &self.inner
    }

    #[inline]
    pub fn into_inner(self) -> geo::Point<f64> {
        self.inner
    }

    /// Planar coordinate (`x = lon`, `y = lat`) for `geo` primitives.
    #[inline]
    pub fn coord(&self) -> geo::Coord<f64> {
        self.inner.0
    }

    /// Both components are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat().is_finite() && self.lon().is_finite()
    }

    /// Midpoint of two points in coordinate space.
    pub fn midpoint(&self, other: &GeoPoint) -> GeoPoint {
        GeoPoint::new(
            (self.lat() + other.lat()) / 2.0,
            (self.lon() + other.lon()) / 2.0,
        )
    }

    /// Round both components to `decimals` fractional digits.
    pub fn rounded(&self, decimals: u32) -> GeoPoint {
        let factor = 10f64.powi(decimals as i32);
        GeoPoint::new(
            (self.lat() * factor).round() / factor,
            (self.lon() * factor).round() / factor,
        )
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(point: geo::Point<f64>) -> Self {
        Self { inner: point }
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        point.inner
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self::new(lat, lon)
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lat(), point.lon()]
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.lat(), point.lon())
    }
}

impl TryFrom<&[f64]> for GeoPoint {
    type Error = GeometryError;

    /// Accepts exactly two components, `[lat, lon]`.
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            [lat, lon] => Ok(Self::new(*lat, *lon)),
            _ => Err(GeometryError::InvalidCoordinates(format!(
                "expected a [lat, lon] pair, got {} component(s)",
                values.len()
            ))),
        }
    }
}

impl TryFrom<Vec<f64>> for GeoPoint {
    type Error = GeometryError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat(), self.lon())
    }
}
