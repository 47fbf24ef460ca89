// Garden report binary
//
// Purpose: Evaluate a bed layout and tracked plants against the bundled catalogs
// Usage: cargo run --bin garden_report -- <layout.json> [tracked.json] [temperature_f]
//
// Environment:
//   DATA_DIR       catalog directory (default: data)
//   ENGINE_CONFIG  optional JSON file overriding rule thresholds
//   RUST_LOG       log filter

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use garden_intelligence_rust::catalog::CatalogIssue;
use garden_intelligence_rust::{
    GardenEngine, LayoutAlert, LayoutSummary, PlantingGrid, TrackedPlantState, TrackerCard,
    WeatherReading,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Serialize)]
struct Report {
    generated_at: DateTime<Utc>,
    weather: WeatherReading,
    catalog_issues: Vec<CatalogIssue>,
    layout: LayoutReport,
    tracker: Vec<TrackerCard>,
}

#[derive(Serialize)]
struct LayoutReport {
    rows: usize,
    cols: usize,
    planted_cells: usize,
    summary: LayoutSummary,
    alerts: Vec<LayoutAlert>,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}: {:?}", what, path))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}: {:?}", what, path))
}

fn main() -> Result<()> {
    // Default log level: info for our crate, warn for others
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "garden_intelligence_rust=info,garden_report=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(layout_path) = args.first().map(PathBuf::from) else {
        bail!("usage: garden_report <layout.json> [tracked.json] [temperature_f]");
    };
    let tracked_path = args.get(1).map(PathBuf::from);
    let temperature_f = match args.get(2) {
        Some(raw) => Some(
            raw.parse::<f64>()
                .with_context(|| format!("Invalid temperature: {:?}", raw))?,
        ),
        None => None,
    };

    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let config_path = std::env::var("ENGINE_CONFIG").ok().map(PathBuf::from);

    tracing::info!("Configuration:");
    tracing::info!("  DATA_DIR: {}", data_dir);
    tracing::info!("  ENGINE_CONFIG: {:?}", config_path);

    let engine = GardenEngine::load(Path::new(&data_dir), config_path.as_deref())?;

    let grid: PlantingGrid = read_json(&layout_path, "layout")?;
    let tracked: Vec<TrackedPlantState> = match &tracked_path {
        Some(path) => read_json(path, "tracked plants")?,
        None => Vec::new(),
    };

    let now = Utc::now();
    let weather = WeatherReading { current_temperature_f: temperature_f };

    let (alerts, summary) = engine.layout_summary(&grid);
    tracing::info!(
        alerts = summary.total,
        errors = summary.errors,
        "Layout analyzed: {:?}",
        layout_path
    );

    let tracker = engine.evaluate_tracker(&tracked, &weather, now);
    tracing::info!("Tracker cards: {}", tracker.len());

    let report = Report {
        generated_at: now,
        weather,
        catalog_issues: engine.catalogs().validate(),
        layout: LayoutReport {
            rows: grid.rows(),
            cols: grid.cols(),
            planted_cells: grid.occupied_count(),
            summary,
            alerts,
        },
        tracker,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
