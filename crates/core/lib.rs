//! Cone/grid intersection engine.
//!
//! Given an indexed grid of lat/lon rectangles and a directional sector
//! ("cone") from an origin, find the cells the sector touches.
//!
//! ## Features
//! - **Coordinate math**: geodesic distance, local degree scale, destination
//!   point and initial bearing over a selectable `geo` metric
//! - **Cone membership**: degree-box radius check plus angular sector test,
//!   including sectors that wrap through north and full circles
//! - **Cell intersection**: five-point test followed by boundary-ray/rectangle
//!   intersection for cells clipped by the sector edges
//! - **Grid scans**: home-cell lookup and order-preserving subset scan, on
//!   the rayon pool for large grids (`parallel` feature)
//!
//! ## Approximations
//! The radius check is an axis-aligned box in degrees derived at the origin,
//! not a circle, and the boundary rays are lengthened by the secant of half
//! the cone angle before being drawn as straight lat/lon segments. Both are
//! deliberate and results depend on them.
//!
//! ```rust
//! use bluecone::{Cone, ConeEngine, GeoPoint, GridCell, GridIndex};
//!
//! let grid: GridIndex = (0..10)
//!     .map(|i| {
//!         let lon = 9.170 + i as f64 * 0.002;
//!         GridCell::new(i, GeoPoint::new(47.660, lon), GeoPoint::new(47.662, lon + 0.002))
//!     })
//!     .collect();
//!
//! let cone = Cone::new(GeoPoint::new(47.661, 9.171), 500.0, 45.0, 90.0)?;
//! let engine = ConeEngine::default();
//!
//! assert_eq!(engine.find_cell_containing(&grid, &cone.origin()), Some(0));
//! let hits = engine.subset_intersecting_cone(&grid, &cone);
//! assert!(hits.starts_with(&[0, 1]));
//! # Ok::<(), bluecone::BlueconeError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod engine;
pub mod error;
pub mod query;

pub use builder::EngineBuilder;
pub use config::EngineConfig;
pub use engine::{ConeEngine, PreparedCone};
pub use error::{BlueconeError, Result};
pub use query::ConeResponse;

pub use compute::spatial::{Cone, ConeSegments, GridIndex};
pub use compute::validation;

pub use bluecone_types::{CellRecord, ConeQuery, DistanceMetric, GeoPoint, GridCell};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{BlueconeError, ConeEngine, EngineBuilder, EngineConfig, Result};

    pub use crate::{Cone, ConeQuery, ConeResponse, ConeSegments};

    pub use crate::{CellRecord, GeoPoint, GridCell, GridIndex};

    pub use crate::DistanceMetric;
}
