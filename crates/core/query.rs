//! Result record of a cone query.

use crate::error::Result;
use bluecone_types::{CellRecord, GeoPoint};
use serde::{Deserialize, Serialize};

/// Everything a downstream ranking or rendering layer needs from one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConeResponse {
    /// Index of the cell containing the cone origin, if any.
    pub home_cell: Option<usize>,
    /// Indices of the intersecting cells, in grid order.
    pub grid_indices: Vec<usize>,
    /// `[origin, positive ray endpoint, negative ray endpoint]`.
    pub bluecone_points: [GeoPoint; 3],
    /// Records of the intersecting cells, aligned with `grid_indices`.
    pub grids: Vec<CellRecord>,
}

impl ConeResponse {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
