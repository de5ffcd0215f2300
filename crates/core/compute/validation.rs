//! Validation for geographic coordinates and cone parameters.

use crate::error::{BlueconeError, Result};
use bluecone_types::{GeoPoint, GridCell};

/// Validates a point has finite latitude in [-90, 90] and longitude in
/// [-180, 180].
///
/// # Examples
///
/// ```
/// use bluecone::compute::validation::validate_geographic_point;
/// use bluecone::GeoPoint;
///
/// assert!(validate_geographic_point(&GeoPoint::new(47.66, 9.17)).is_ok());
/// assert!(validate_geographic_point(&GeoPoint::new(95.0, 9.17)).is_err());
/// assert!(validate_geographic_point(&GeoPoint::new(47.66, 200.0)).is_err());
/// ```
pub fn validate_geographic_point(point: &GeoPoint) -> Result<()> {
    let (lat, lon) = (point.lat(), point.lon());

    if !lat.is_finite() {
        return Err(BlueconeError::InvalidArgument(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lon.is_finite() {
        return Err(BlueconeError::InvalidArgument(format!(
            "Longitude must be finite, got: {}",
            lon
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(BlueconeError::InvalidArgument(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lon) {
        return Err(BlueconeError::InvalidArgument(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lon
        )));
    }

    Ok(())
}

/// Validates a cone radius in meters.
///
/// Ensures radius is positive, finite, and not exceeding Earth's circumference.
///
/// ```
/// use bluecone::compute::validation::validate_radius;
///
/// assert!(validate_radius(1000.0).is_ok());
/// assert!(validate_radius(0.0).is_err());
/// assert!(validate_radius(-100.0).is_err());
/// assert!(validate_radius(f64::NAN).is_err());
/// ```
pub fn validate_radius(radius_m: f64) -> Result<()> {
    if !radius_m.is_finite() {
        return Err(BlueconeError::InvalidArgument(format!(
            "Radius must be finite, got: {}",
            radius_m
        )));
    }
    if radius_m <= 0.0 {
        return Err(BlueconeError::InvalidArgument(format!(
            "Radius must be positive, got: {}",
            radius_m
        )));
    }
    const EARTH_CIRCUMFERENCE: f64 = 40_075_000.0; // meters
    if radius_m > EARTH_CIRCUMFERENCE {
        return Err(BlueconeError::InvalidArgument(format!(
            "Radius {} exceeds Earth's circumference ({} meters)",
            radius_m, EARTH_CIRCUMFERENCE
        )));
    }
    Ok(())
}

/// Validates the full angular width of a cone: finite and in (0, 360].
pub fn validate_cone_angle(angle_deg: f64) -> Result<()> {
    if !angle_deg.is_finite() {
        return Err(BlueconeError::InvalidArgument(format!(
            "Cone angle must be finite, got: {}",
            angle_deg
        )));
    }
    if angle_deg <= 0.0 || angle_deg > 360.0 {
        return Err(BlueconeError::InvalidArgument(format!(
            "Cone angle out of range (0.0, 360.0]: {}",
            angle_deg
        )));
    }
    Ok(())
}

/// Any finite direction is accepted; it is normalized modulo 360 later.
pub fn validate_direction(direction_deg: f64) -> Result<()> {
    if !direction_deg.is_finite() {
        return Err(BlueconeError::InvalidArgument(format!(
            "Cone direction must be finite, got: {}",
            direction_deg
        )));
    }
    Ok(())
}

/// Validates both stored corners of a cell.
///
/// A cell whose northeast corner lies south or west of its southwest corner
/// is accepted and reported, never reoriented.
pub fn validate_cell(cell: &GridCell) -> Result<()> {
    validate_geographic_point(&cell.southwest).map_err(|e| {
        BlueconeError::InvalidArgument(format!("Cell {} southwest corner: {}", cell.grid_num, e))
    })?;
    validate_geographic_point(&cell.northeast).map_err(|e| {
        BlueconeError::InvalidArgument(format!("Cell {} northeast corner: {}", cell.grid_num, e))
    })?;

    if !cell.is_well_oriented() {
        log::warn!(
            "Cell {} has northeast {} not north-east of southwest {}; derived corners are undefined",
            cell.grid_num,
            cell.northeast,
            cell.southwest
        );
    }

    Ok(())
}

/// Validates every cell of a grid, reporting the offending position.
pub fn validate_cells(cells: &[GridCell]) -> Result<()> {
    for (idx, cell) in cells.iter().enumerate() {
        validate_cell(cell)
            .map_err(|e| BlueconeError::InvalidArgument(format!("Cell at index {}: {}", idx, e)))?;
    }
    Ok(())
}
