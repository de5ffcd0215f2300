//! Cone geometry, grid scans and input validation.

pub mod spatial;
pub mod validation;
