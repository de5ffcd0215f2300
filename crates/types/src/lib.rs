//! # bluecone-types
//!
//! Plain data types shared by the bluecone engine and its front ends.
//!
//! - **Points**: `GeoPoint`, serialized as a `[lat, lon]` pair
//! - **Grid cells**: `GridCell` (stored diagonal corners) and `CellRecord`
//!   (all four corners spelled out)
//! - **Queries**: `ConeQuery`, the raw request record
//!
//! All types are serializable with Serde and built on the `geo` crate's
//! primitives.
//!
//! ## Examples
//!
//! ```rust
//! use bluecone_types::cell::GridCell;
//! use bluecone_types::geo::GeoPoint;
//!
//! let cell = GridCell::new(1, GeoPoint::new(47.66, 9.17), GeoPoint::new(47.67, 9.18));
//! assert!(cell.contains_point(&GeoPoint::new(47.665, 9.175)));
//! ```

pub mod cell;
pub mod error;
pub mod geo;
pub mod query;

pub use cell::{CellRecord, GridCell};
pub use error::GeometryError;
pub use crate::geo::{DistanceMetric, GeoPoint};
pub use query::ConeQuery;
