//! `info` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::InfoArgs;

/// Configuration info for JSON output
#[derive(Serialize)]
struct ConfigInfo {
    version: String,
    input: InputInfo,
    classifier: ClassifierInfo,
    channel_capacity: usize,
    metrics: MetricsInfo,
    shutdown_wait_timeout_secs: u64,
}

#[derive(Serialize)]
struct InputInfo {
    path: String,
    text_field: String,
}

#[derive(Serialize)]
struct ClassifierInfo {
    positive_threshold: f64,
    negative_threshold: f64,
}

#[derive(Serialize)]
struct MetricsInfo {
    port: u16,
    series: Vec<&'static str>,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    info!(config = %args.config.display(), "Reading configuration");

    let blueprint = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    let info = ConfigInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        input: InputInfo {
            path: blueprint.input.path.display().to_string(),
            text_field: blueprint.input.text_field.clone(),
        },
        classifier: ClassifierInfo {
            positive_threshold: blueprint.classifier.positive_threshold,
            negative_threshold: blueprint.classifier.negative_threshold,
        },
        channel_capacity: blueprint.channel.capacity,
        metrics: MetricsInfo {
            port: blueprint.metrics.port,
            series: vec![
                "sentiment_positive_total",
                "sentiment_neutral_total",
                "sentiment_negative_total",
                "sentiment_rows_processed",
                "sentiment_processing_seconds",
            ],
        },
        shutdown_wait_timeout_secs: blueprint.shutdown.wait_timeout_secs,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print_info(&info);
    }

    Ok(())
}

fn print_info(info: &ConfigInfo) {
    println!("Sentistream v{}", info.version);
    println!("\nInput:");
    println!("  Path: {}", info.input.path);
    println!("  Text field: {}", info.input.text_field);

    println!("\nClassifier:");
    println!("  Positive threshold: {}", info.classifier.positive_threshold);
    println!("  Negative threshold: {}", info.classifier.negative_threshold);

    println!("\nPipeline:");
    println!("  Channel capacity: {}", info.channel_capacity);
    println!("  Aggregator wait timeout: {}s", info.shutdown_wait_timeout_secs);

    println!("\nMetrics endpoint (port {}):", info.metrics.port);
    for series in &info.metrics.series {
        println!("  - {series}");
    }
}
