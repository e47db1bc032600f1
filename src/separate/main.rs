//! Border separation CLI.
//!
//! Reads a country outline, splits its boundary into international land
//! borders and coastline, and writes each as a MultiLineString GeoJSON file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bordersplit::borders::{separate_files, SegmentClassifier};
use bordersplit::regions::{RegionClassifier, RegionIndex, RegionsConfig};

#[derive(Parser, Debug)]
#[command(name = "separate")]
#[command(about = "Separate land borders from coastline in a country outline")]
struct Args {
    /// Source GeoJSON with Polygon/MultiPolygon features
    #[arg(long, default_value = "india-map.geojson")]
    input: PathBuf,

    /// Output file for international land borders
    #[arg(long, default_value = "india-land-borders.geojson")]
    land_output: PathBuf,

    /// Output file for coastline
    #[arg(long, default_value = "india-coastal-borders.geojson")]
    coastal_output: PathBuf,

    /// TOML file replacing the built-in land border regions
    #[arg(long)]
    regions: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let regions = match &args.regions {
        Some(path) => {
            info!("Loading land border regions from {}", path.display());
            let config = RegionsConfig::load_from_file(path)?;
            RegionClassifier::new(RegionIndex::build(config.regions))
        }
        None => RegionClassifier::builtin(),
    };
    info!(
        "Using {} land border regions",
        regions.land_regions().len()
    );

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} features")?
            .progress_chars("#>-"),
    );

    let report = separate_files(
        &args.input,
        &args.land_output,
        &args.coastal_output,
        SegmentClassifier::new(regions),
        |done, total| {
            pb.set_length(total as u64);
            pb.set_position(done as u64);
        },
    )?;
    pb.finish_and_clear();

    info!("Found {} land border segments", report.land_segments);
    info!("Found {} coastal border segments", report.coastal_segments);
    if report.features_skipped > 0 {
        info!(
            "Skipped {} features without polygon geometry",
            report.features_skipped
        );
    }
    info!("Merged into {} land border lines", report.land_lines);
    info!("Merged into {} coastal border lines", report.coastal_lines);

    info!("Done!");
    info!("Output files created:");
    info!("  - {}", args.land_output.display());
    info!("  - {}", args.coastal_output.display());

    Ok(())
}
