//! Command-line front end: load a grid and a cone query, print the response.

use anyhow::{Context, bail};
use bluecone::{ConeEngine, ConeResponse, EngineBuilder, GridIndex};
use bluecone_types::{ConeQuery, GeoPoint};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about = "Find the grid cells a directional cone touches", long_about = None)]
pub struct Args {
    /// JSON array of `{grid_num, southwest, northeast}` cells
    #[arg(short, long)]
    pub grid: PathBuf,

    /// JSON cone query record; replaces the inline cone arguments
    #[arg(short, long, conflicts_with_all = ["lat", "lon", "radius", "angle", "direction"])]
    pub query: Option<PathBuf>,

    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Cone radius in meters
    #[arg(long)]
    pub radius: Option<f64>,

    /// Full cone angle in degrees
    #[arg(long)]
    pub angle: Option<f64>,

    /// Facing bearing in degrees, clockwise from north
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub direction: f64,

    /// Engine configuration file (.json, or .toml with the `toml` feature)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Round the cone points to this many decimals
    #[arg(long)]
    pub decimals: Option<u32>,

    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    /// The query to evaluate, from `--query` or the inline arguments.
    pub fn cone_query(&self) -> anyhow::Result<ConeQuery> {
        if let Some(path) = &self.query {
            return load_query(path);
        }

        match (self.lat, self.lon, self.radius, self.angle) {
            (Some(lat), Some(lon), Some(radius), Some(angle)) => Ok(ConeQuery::new(
                GeoPoint::new(lat, lon),
                radius,
                angle,
                self.direction,
            )),
            _ => bail!("either --query or all of --lat, --lon, --radius and --angle are required"),
        }
    }

    pub fn engine(&self) -> anyhow::Result<ConeEngine> {
        let mut builder = EngineBuilder::new();
        if let Some(path) = &self.config {
            info!("Loading engine config from {}", path.display());
            builder = builder
                .config_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
        }
        if let Some(decimals) = self.decimals {
            builder = builder.point_decimals(decimals);
        }
        Ok(builder.build()?)
    }
}

pub fn load_grid(path: &Path) -> anyhow::Result<GridIndex> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read grid {}", path.display()))?;
    GridIndex::from_json(&contents).with_context(|| format!("invalid grid {}", path.display()))
}

pub fn load_query(path: &Path) -> anyhow::Result<ConeQuery> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read query {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse query {}", path.display()))
}

/// Evaluate the query described by `args`.
pub fn run(args: &Args) -> anyhow::Result<ConeResponse> {
    let engine = args.engine()?;
    let grid = load_grid(&args.grid)?;
    info!("Loaded {} cells from {}", grid.len(), args.grid.display());

    let query = args.cone_query()?;
    let response = engine
        .evaluate_query(&grid, query)
        .context("invalid cone query")?;

    match response.home_cell {
        Some(home) => info!("Cone origin lies in cell {}", home),
        None => info!("Cone origin lies outside the grid"),
    }
    info!("Cone touches {} of {} cells", response.grid_indices.len(), grid.len());

    Ok(response)
}

/// Render a response the way the binary prints it.
pub fn render(response: &ConeResponse, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        response.to_json_pretty()?
    } else {
        response.to_json()?
    };
    Ok(json)
}
