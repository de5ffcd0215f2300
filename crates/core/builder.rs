//! Engine builder.
//!
//! Assembles an [`EngineConfig`] from individual settings or a config file
//! and validates it once on [`EngineBuilder::build`].

use crate::config::EngineConfig;
use crate::engine::ConeEngine;
use crate::error::{BlueconeError, Result};
use bluecone_types::DistanceMetric;
use std::path::Path;

/// Builder for [`ConeEngine`].
#[derive(Debug, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a `.json` file, or a `.toml` file when the
    /// `toml` feature is enabled.
    pub fn config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        self.config = match path.extension().and_then(|ext| ext.to_str()) {
            #[cfg(feature = "toml")]
            Some("toml") => EngineConfig::from_toml(&contents)
                .map_err(|e| BlueconeError::Config(format!("{}: {}", path.display(), e)))?,
            Some("json") => EngineConfig::from_json(&contents)
                .map_err(|e| BlueconeError::Config(format!("{}: {}", path.display(), e)))?,
            _ => {
                return Err(BlueconeError::Config(format!(
                    "Unsupported config file format: {}",
                    path.display()
                )));
            }
        };
        Ok(self)
    }

    pub fn distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.config = self.config.with_distance_metric(metric);
        self
    }

    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config = self.config.with_parallel_threshold(threshold);
        self
    }

    pub fn point_decimals(mut self, decimals: u32) -> Self {
        self.config = self.config.with_point_decimals(Some(decimals));
        self
    }

    /// Build the engine.
    pub fn build(self) -> Result<ConeEngine> {
        ConeEngine::new(self.config)
    }
}
