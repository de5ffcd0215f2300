//! Grid cells stored as two diagonal corners.

use crate::geo::GeoPoint;
use geo::{LineString, Polygon};
use serde::{Deserialize, Serialize};

/// An axis-aligned lat/lon rectangle with an identifier.
///
/// Only the southwest and northeast corners are stored; the other two
/// corners and the center are derived on every call. The orientation
/// `northeast >= southwest` is assumed, not enforced: a cell whose corners
/// are swapped yields derived corners that follow the same formulas and are
/// therefore not geographically meaningful.
///
/// Deserialization ignores unknown fields so records carrying extra columns
/// (keywords, addresses, ...) load unchanged.
///
/// # Examples
///
/// ```
/// use bluecone_types::cell::GridCell;
/// use bluecone_types::geo::GeoPoint;
///
/// let cell = GridCell::new(7, GeoPoint::new(1.0, 0.0), GeoPoint::new(2.0, 1.0));
/// assert_eq!(cell.northwest(), GeoPoint::new(2.0, 0.0));
/// assert_eq!(cell.southeast(), GeoPoint::new(1.0, 1.0));
/// assert_eq!(cell.center(), GeoPoint::new(1.5, 0.5));
/// assert!(cell.contains_point(&GeoPoint::new(1.5, 0.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub grid_num: i64,
    pub southwest: GeoPoint,
    pub northeast: GeoPoint,
}

impl GridCell {
    pub fn new(grid_num: i64, southwest: GeoPoint, northeast: GeoPoint) -> Self {
        Self {
            grid_num,
            southwest,
            northeast,
        }
    }

    /// `(northeast.lat, southwest.lon)`
    #[inline]
    pub fn northwest(&self) -> GeoPoint {
        GeoPoint::new(self.northeast.lat(), self.southwest.lon())
    }

    /// `(southwest.lat, northeast.lon)`
    #[inline]
    pub fn southeast(&self) -> GeoPoint {
        GeoPoint::new(self.southwest.lat(), self.northeast.lon())
    }

    /// Midpoint of the two stored corners.
    #[inline]
    pub fn center(&self) -> GeoPoint {
        self.southwest.midpoint(&self.northeast)
    }

    /// Corners in the order northeast, northwest, southwest, southeast.
    pub fn corners(&self) -> [GeoPoint; 4] {
        [
            self.northeast,
            self.northwest(),
            self.southwest,
            self.southeast(),
        ]
    }

    /// Extent in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.northeast.lat() - self.southwest.lat()
    }

    /// Extent in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.northeast.lon() - self.southwest.lon()
    }

    /// Zero width or height.
    pub fn is_degenerate(&self) -> bool {
        self.height() == 0.0 || self.width() == 0.0
    }

    /// Northeast really lies north and east of southwest (or on it).
    pub fn is_well_oriented(&self) -> bool {
        self.height() >= 0.0 && self.width() >= 0.0
    }

    /// Closed-box containment, inclusive on every edge.
    pub fn contains_point(&self, point: &GeoPoint) -> bool {
        self.southwest.lat() <= point.lat()
            && point.lat() <= self.northeast.lat()
            && self.southwest.lon() <= point.lon()
            && point.lon() <= self.northeast.lon()
    }

    /// Planar polygon over northwest, northeast, southeast, southwest
    /// (`x = lon`, `y = lat`). The ring is closed by `geo`.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let ring = LineString::from(vec![
            self.northwest().coord(),
            self.northeast.coord(),
            self.southeast().coord(),
            self.southwest.coord(),
        ]);
        Polygon::new(ring, vec![])
    }

    /// Serialized form with all four corners spelled out.
    pub fn to_record(&self) -> CellRecord {
        CellRecord {
            grid_number: self.grid_num,
            northeast: self.northeast,
            southeast: self.southeast(),
            southwest: self.southwest,
            northwest: self.northwest(),
        }
    }
}

/// A grid cell as emitted to downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellRecord {
    pub grid_number: i64,
    pub northeast: GeoPoint,
    pub southeast: GeoPoint,
    pub southwest: GeoPoint,
    pub northwest: GeoPoint,
}

impl From<&GridCell> for CellRecord {
    fn from(cell: &GridCell) -> Self {
        cell.to_record()
    }
}
