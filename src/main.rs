//! Prediction shell - drives one pipeline run from the command line.
//!
//! The dashboard UI is a separate process; this binary exercises the
//! same command surface it uses, against the same artifacts.

use anyhow::{bail, Context, Result};

use crime_analytics_core::api::commands;
use crime_analytics_core::constants::{self, APP_NAME, APP_VERSION, DEFAULT_TARGET_YEAR};
use crime_analytics_core::logic::artifacts;
use crime_analytics_core::{ArtifactPaths, PredictionRequest};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!(
            "usage: crime-analytics-core <state> <category> [year]\n\
             artifacts are read from {:?} (override with CRIME_ARTIFACT_DIR)",
            constants::get_artifact_dir()
        );
    }
    let year = match args.get(2) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid target year {raw:?}"))?,
        None => DEFAULT_TARGET_YEAR,
    };
    let request = PredictionRequest {
        state: args[0].clone(),
        category: args[1].clone(),
        year,
    };

    let paths = ArtifactPaths::from_env();
    let bundle = artifacts::shared(&paths)?;

    let status = commands::engine_status(&bundle).map_err(anyhow::Error::msg)?;
    log::info!(
        "engine ready: model {} v{} ({} features, {} trees)",
        status.model_name,
        status.model_version,
        status.feature_count,
        status.tree_count
    );

    let report = commands::run_prediction(&bundle, &request).map_err(anyhow::Error::msg)?;

    println!(
        "Top {} Predicted Crime Types - {} / {} / {}",
        report.top.len(),
        report.state,
        report.category,
        report.year
    );
    for entry in &report.top {
        println!(
            "{}. {} - {} (score {:.1})",
            entry.rank,
            entry.display_name,
            entry.risk.label(),
            entry.score
        );
    }
    println!();
    println!("{}", report.alert.message());
    println!();
    println!("Recommended actions:");
    for action in commands::recommended_actions() {
        println!("- {action}");
    }

    Ok(())
}
