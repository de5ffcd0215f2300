//! Engine facade binding a configuration to the cone operations.

use crate::builder::EngineBuilder;
use crate::compute::spatial::{
    self, Cone, ConeFootprint, ConeSegments, GridIndex, cell_intersects,
};
use crate::config::EngineConfig;
use crate::error::{BlueconeError, Result};
use crate::query::ConeResponse;
use bluecone_types::{CellRecord, ConeQuery, GeoPoint, GridCell};

/// Cone/grid engine.
///
/// Holds no per-query state: every call receives its grid and cone
/// explicitly, so one engine can serve concurrent queries.
///
/// # Examples
///
/// ```
/// use bluecone::{Cone, ConeEngine, GeoPoint, GridCell, GridIndex};
///
/// let engine = ConeEngine::default();
/// let grid = GridIndex::new(vec![
///     GridCell::new(1, GeoPoint::new(47.660, 9.170), GeoPoint::new(47.665, 9.175)),
///     GridCell::new(2, GeoPoint::new(47.665, 9.170), GeoPoint::new(47.670, 9.175)),
///     GridCell::new(3, GeoPoint::new(47.650, 9.170), GeoPoint::new(47.655, 9.175)),
/// ]);
/// let cone = Cone::new(GeoPoint::new(47.662, 9.172), 600.0, 60.0, 0.0)?;
///
/// let response = engine.evaluate(&grid, &cone);
/// assert_eq!(response.home_cell, Some(0));
/// assert_eq!(response.grid_indices, vec![0, 1]);
/// # Ok::<(), bluecone::BlueconeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConeEngine {
    config: EngineConfig,
}

impl ConeEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate().map_err(BlueconeError::Config)?;
        Ok(Self { config })
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_point_in_cone(&self, point: &GeoPoint, cone: &Cone) -> bool {
        spatial::is_point_in_cone(point, cone, self.config.distance_metric)
    }

    pub fn cell_intersects_cone(&self, cell: &GridCell, cone: &Cone) -> bool {
        spatial::cell_intersects_cone(cell, cone, self.config.distance_metric)
    }

    pub fn cone_segments(&self, cone: &Cone) -> ConeSegments {
        spatial::cone_segments(cone, self.config.distance_metric)
    }

    pub fn find_cell_containing(&self, grid: &GridIndex, point: &GeoPoint) -> Option<usize> {
        spatial::find_cell_containing(grid, point)
    }

    /// Indices of intersecting cells in grid order. Large grids go to the
    /// rayon pool when the `parallel` feature is on; the result is the same.
    pub fn subset_intersecting_cone(&self, grid: &GridIndex, cone: &Cone) -> Vec<usize> {
        let metric = self.config.distance_metric;

        #[cfg(feature = "parallel")]
        {
            if grid.len() >= self.config.parallel_threshold {
                log::debug!("Scanning {} cells in parallel", grid.len());
                return spatial::subset_intersecting_cone_par(grid, cone, metric);
            }
        }

        spatial::subset_intersecting_cone(grid, cone, metric)
    }

    pub fn serialize_subset(&self, grid: &GridIndex, indices: &[usize]) -> Vec<CellRecord> {
        spatial::serialize_subset(grid.select(indices))
    }

    /// Full query: home cell, intersecting cells, cone geometry and records.
    pub fn evaluate(&self, grid: &GridIndex, cone: &Cone) -> ConeResponse {
        let metric = self.config.distance_metric;
        let origin = cone.origin();

        let home_cell = self.find_cell_containing(grid, &origin);
        if home_cell.is_none() {
            log::debug!("Cone origin {} is outside every grid cell", origin);
        }

        let grid_indices = self.subset_intersecting_cone(grid, cone);
        let grids = self.serialize_subset(grid, &grid_indices);

        let segments = ConeSegments::new(cone, metric);
        let bluecone_points = segments.points().map(|p| match self.config.point_decimals {
            Some(decimals) => p.rounded(decimals),
            None => p,
        });

        log::debug!(
            "Cone at {} (r={} m, angle={}, dir={}) touches {} of {} cells",
            origin,
            cone.radius_m(),
            cone.angle_deg(),
            cone.direction_deg(),
            grid_indices.len(),
            grid.len()
        );

        ConeResponse {
            home_cell,
            grid_indices,
            bluecone_points,
            grids,
        }
    }

    /// Validate a raw query record, then evaluate it.
    pub fn evaluate_query(&self, grid: &GridIndex, query: ConeQuery) -> Result<ConeResponse> {
        let cone = Cone::try_from(query)?;
        Ok(self.evaluate(grid, &cone))
    }

    /// Derive the per-query geometry once, for callers streaming cells that
    /// are not held in a [`GridIndex`].
    pub fn prepare(&self, cone: &Cone) -> PreparedCone {
        let metric = self.config.distance_metric;
        PreparedCone {
            footprint: ConeFootprint::new(cone, metric),
            segments: ConeSegments::new(cone, metric),
        }
    }
}

/// Per-query geometry of a cone, computed once.
#[derive(Debug, Clone, Copy)]
pub struct PreparedCone {
    footprint: ConeFootprint,
    segments: ConeSegments,
}

impl PreparedCone {
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.footprint.contains(point)
    }

    pub fn intersects(&self, cell: &GridCell) -> bool {
        cell_intersects(cell, &self.footprint, &self.segments)
    }

    pub fn segments(&self) -> &ConeSegments {
        &self.segments
    }
}
