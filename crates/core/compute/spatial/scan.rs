//! Linear scans over an ordered grid.

use super::cone::{Cone, ConeFootprint};
use super::intersection::{ConeSegments, cell_intersects};
use crate::compute::validation::validate_cells;
use crate::error::Result;
use bluecone_types::{CellRecord, DistanceMetric, GeoPoint, GridCell};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Ordered sequence of grid cells.
///
/// Indices returned by the scans are positions in this sequence. The index
/// never reorders or mutates its cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridIndex {
    cells: Vec<GridCell>,
}

impl GridIndex {
    pub fn new(cells: Vec<GridCell>) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&GridCell> {
        self.cells.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridCell> {
        self.cells.iter()
    }

    /// Cells at `indices`, in the order given. Out-of-range indices are
    /// skipped.
    pub fn select<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = &'a GridCell> + 'a {
        indices.iter().filter_map(move |&idx| self.cells.get(idx))
    }

    /// Parse a JSON array of cell records and validate every cell.
    pub fn from_json(json: &str) -> Result<Self> {
        let grid: GridIndex = serde_json::from_str(json)?;
        validate_cells(grid.cells())?;
        Ok(grid)
    }
}

impl From<Vec<GridCell>> for GridIndex {
    fn from(cells: Vec<GridCell>) -> Self {
        Self::new(cells)
    }
}

impl FromIterator<GridCell> for GridIndex {
    fn from_iter<I: IntoIterator<Item = GridCell>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a GridIndex {
    type Item = &'a GridCell;
    type IntoIter = std::slice::Iter<'a, GridCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Index of the first cell whose closed box contains `point`.
///
/// Overlapping cells resolve to the earliest one in scan order. `None` is an
/// ordinary outcome, not an error.
///
/// # Examples
///
/// ```
/// use bluecone::compute::spatial::{GridIndex, find_cell_containing};
/// use bluecone::{GeoPoint, GridCell};
///
/// let grid: GridIndex = (0..3)
///     .map(|i| {
///         let lat = i as f64;
///         GridCell::new(i, GeoPoint::new(lat, 0.0), GeoPoint::new(lat + 1.0, 1.0))
///     })
///     .collect();
///
/// assert_eq!(find_cell_containing(&grid, &GeoPoint::new(1.5, 0.5)), Some(1));
/// assert_eq!(find_cell_containing(&grid, &GeoPoint::new(5.0, 5.0)), None);
/// ```
pub fn find_cell_containing(grid: &GridIndex, point: &GeoPoint) -> Option<usize> {
    grid.iter().position(|cell| cell.contains_point(point))
}

/// Indices of every cell intersecting `cone`, in grid order.
pub fn subset_intersecting_cone(grid: &GridIndex, cone: &Cone, metric: DistanceMetric) -> Vec<usize> {
    let footprint = ConeFootprint::new(cone, metric);
    let segments = ConeSegments::new(cone, metric);
    scan_sequential(grid, &footprint, &segments)
}

/// Same result as [`subset_intersecting_cone`], with cells evaluated on the
/// rayon pool. Indices are collected in grid order, not completion order.
#[cfg(feature = "parallel")]
pub fn subset_intersecting_cone_par(
    grid: &GridIndex,
    cone: &Cone,
    metric: DistanceMetric,
) -> Vec<usize> {
    let footprint = ConeFootprint::new(cone, metric);
    let segments = ConeSegments::new(cone, metric);
    grid.cells()
        .par_iter()
        .enumerate()
        .filter(|(_, cell)| cell_intersects(cell, &footprint, &segments))
        .map(|(idx, _)| idx)
        .collect()
}

fn scan_sequential(grid: &GridIndex, footprint: &ConeFootprint, segments: &ConeSegments) -> Vec<usize> {
    grid.iter()
        .enumerate()
        .filter(|(_, cell)| cell_intersects(cell, footprint, segments))
        .map(|(idx, _)| idx)
        .collect()
}

/// Records with all four corners, one per cell, in the order given.
pub fn serialize_subset<'a, I>(cells: I) -> Vec<CellRecord>
where
    I: IntoIterator<Item = &'a GridCell>,
{
    cells.into_iter().map(GridCell::to_record).collect()
}
