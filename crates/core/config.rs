//! Engine configuration.
//!
//! Loaded from JSON (or TOML with the `toml` feature); every field has a
//! default so an empty document is a valid configuration.
use bluecone_types::DistanceMetric;
use serde::de::Error;

/// Largest rounding precision accepted for response points.
pub const MAX_POINT_DECIMALS: u32 = 15;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Metric for degree scales and ray projection
    #[serde(default)]
    pub distance_metric: DistanceMetric,

    /// Grids with at least this many cells are scanned in parallel
    /// (requires the `parallel` feature)
    #[serde(default = "EngineConfig::default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// Rounding applied to cone points in a response; `None` keeps raw floats
    #[serde(default)]
    pub point_decimals: Option<u32>,
}

impl EngineConfig {
    const fn default_parallel_threshold() -> usize {
        1024
    }

    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.distance_metric = metric;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn with_point_decimals(mut self, decimals: Option<u32>) -> Self {
        self.point_decimals = decimals;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.parallel_threshold == 0 {
            return Err("Parallel threshold must be greater than zero".to_string());
        }

        if let Some(decimals) = self.point_decimals
            && decimals > MAX_POINT_DECIMALS
        {
            return Err(format!(
                "Point decimals must be at most {}, got {}",
                MAX_POINT_DECIMALS, decimals
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: EngineConfig = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: EngineConfig = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            distance_metric: DistanceMetric::default(),
            parallel_threshold: Self::default_parallel_threshold(),
            point_decimals: None,
        }
    }
}
