//! Search-area tiler.
//!
//! Merges neighborhood polygons by city, buffers them, and covers each
//! with overlapping fixed-radius circles for a radius-based venue search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use geo_common::{angular_radius, DistanceUnit};
use polygon_ops::{buffer_shape, merge_polygon_groups};
use tiler::{
    layers_to_geojson, plan, read_collection, read_shape, tile_shape, write_json, OutputFormat,
    TilerConfig, TilesReport,
};

#[derive(Parser, Debug)]
#[command(name = "tiler")]
#[command(about = "Cover neighborhood polygons with radius search circles")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tile a single Polygon or MultiPolygon
    Tiles {
        /// GeoJSON Geometry or Feature
        #[arg(short, long)]
        input: PathBuf,

        /// Override tile radius in kilometers
        #[arg(short, long)]
        radius_km: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Union polygons that share a property value
    Merge {
        /// GeoJSON FeatureCollection
        #[arg(short, long)]
        input: PathBuf,

        /// Grouping property (default from config)
        #[arg(short, long)]
        group_by: Option<String>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Grow a shape outward
    Buffer {
        #[arg(short, long)]
        input: PathBuf,

        /// Buffer distance
        #[arg(short, long)]
        distance: f64,

        /// Unit of the distance: mi, km or m
        #[arg(short, long, default_value = "mi")]
        unit: DistanceUnit,

        /// Print only the bounding box of the result
        #[arg(long = "box")]
        bbox_only: bool,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge, buffer and tile every group of a collection
    Plan {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        group_by: Option<String>,

        /// Override buffer distance in miles
        #[arg(short, long)]
        buffer_miles: Option<f64>,

        /// Override tile radius in kilometers
        #[arg(short, long)]
        radius_km: Option<f64>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.log_json)?;

    let mut config = TilerConfig::load(cli.config.as_deref())?;
    info!(
        radius_km = config.tiling.radius_km,
        buffer_miles = config.buffer_miles,
        group_property = %config.group_property,
        "Loaded configuration"
    );

    match cli.command {
        Commands::Tiles {
            input,
            radius_km,
            format,
            output,
        } => {
            if let Some(r) = radius_km {
                config.tiling.radius_km = r;
            }
            let shape = read_shape(&input)?;
            let layers = tile_shape(&shape, &config.tiling)?;

            match format {
                OutputFormat::Json => {
                    let report = TilesReport::new(&layers, &shape.bounding_box());
                    write_json(&report, output.as_deref())
                }
                OutputFormat::Geojson => write_json(&layers_to_geojson(&layers), output.as_deref()),
            }
        }
        Commands::Merge {
            input,
            group_by,
            output,
        } => {
            let group_by = group_by.unwrap_or(config.group_property);
            let collection = read_collection(&input)?;
            let merged = merge_polygon_groups(&collection, &group_by)
                .with_context(|| format!("Failed to merge by '{}'", group_by))?;
            info!(groups = merged.features.len(), "Merged polygons");
            write_json(&merged, output.as_deref())
        }
        Commands::Buffer {
            input,
            distance,
            unit,
            bbox_only,
            output,
        } => {
            let shape = read_shape(&input)?;
            let degrees = angular_radius(unit.to_kilometers(distance));
            let buffered = buffer_shape(&shape, degrees)
                .with_context(|| format!("Failed to buffer by {} {}", distance, unit.as_str()))?;
            if bbox_only {
                write_json(&buffered.bounding_box(), output.as_deref())
            } else {
                write_json(&buffered.to_feature(), output.as_deref())
            }
        }
        Commands::Plan {
            input,
            group_by,
            buffer_miles,
            radius_km,
            output,
        } => {
            if let Some(g) = group_by {
                config.group_property = g;
            }
            if let Some(m) = buffer_miles {
                config.buffer_miles = m;
            }
            if let Some(r) = radius_km {
                config.tiling.radius_km = r;
            }
            config.validate()?;

            let collection = read_collection(&input)?;
            let report = plan(&collection, &config)?;
            info!(
                groups = report.groups.len(),
                tiles = report.total_tiles(),
                "Planned search circles"
            );
            write_json(&report, output.as_deref())
        }
    }
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}
