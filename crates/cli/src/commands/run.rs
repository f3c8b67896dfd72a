//! `run` command implementation.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::RunArgs;
use crate::pipeline::{Pipeline, PipelineConfig};

/// Execute the `run` command
pub async fn run_pipeline(args: &RunArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration");

    // Validate config path
    if !args.config.exists() {
        anyhow::bail!("Configuration file not found: {}", args.config.display());
    }

    // Load and parse configuration
    let mut blueprint = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Apply CLI overrides
    if let Some(ref input) = args.input {
        info!(input = %input.display(), "Overriding input path from CLI");
        blueprint.input.path = input.clone();
    }

    // Port 0 on the CLI disables the endpoint entirely.
    let metrics_port = match args.metrics_port {
        Some(0) => None,
        Some(port) => Some(port),
        None => Some(blueprint.metrics.port),
    };

    info!(
        input = %blueprint.input.path.display(),
        text_field = %blueprint.input.text_field,
        metrics_port = ?metrics_port,
        channel_capacity = blueprint.channel.capacity,
        "Configuration loaded"
    );

    // Dry run - just validate and exit
    if args.dry_run {
        info!("Dry run mode - configuration is valid, exiting");
        print_config_summary(&blueprint, metrics_port);
        return Ok(());
    }

    // Build pipeline configuration
    let pipeline_config = PipelineConfig {
        blueprint,
        metrics_port,
        max_records: if args.max_records == 0 {
            None
        } else {
            Some(args.max_records)
        },
    };

    // Create and run pipeline
    let pipeline = Pipeline::new(pipeline_config);

    // Setup graceful shutdown handler
    let shutdown_signal = setup_shutdown_signal();

    info!("Starting pipeline...");

    // Run pipeline with shutdown signal
    tokio::select! {
        result = pipeline.run() => {
            match result {
                Ok(stats) => {
                    info!(
                        rows_processed = stats.rows_processed,
                        positive = stats.positive,
                        neutral = stats.neutral,
                        negative = stats.negative,
                        processing_seconds = format!("{:.3}", stats.processing_seconds),
                        "Pipeline completed successfully"
                    );

                    // Print detailed statistics
                    stats.print_summary();

                    if args.serve && metrics_port.is_some() {
                        info!("Serving metrics endpoint until Ctrl+C");
                        setup_shutdown_signal().await;
                        info!("Shutdown signal received");
                    }
                }
                Err(e) => {
                    return Err(e).context("Pipeline execution failed");
                }
            }
        }
        _ = shutdown_signal => {
            warn!("Received shutdown signal, stopping pipeline...");
        }
    }

    info!("Sentistream finished");
    Ok(())
}

/// Setup Ctrl+C and SIGTERM signal handlers
async fn setup_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Print configuration summary for dry-run mode
fn print_config_summary(blueprint: &contracts::PipelineBlueprint, metrics_port: Option<u16>) {
    println!("\n=== Configuration Summary ===\n");
    println!("Input:");
    println!("  Path: {}", blueprint.input.path.display());
    println!("  Text field: {}", blueprint.input.text_field);

    println!("\nClassifier:");
    println!(
        "  Thresholds: positive >= {}, negative <= {}",
        blueprint.classifier.positive_threshold, blueprint.classifier.negative_threshold
    );

    println!("\nPipeline:");
    println!("  Channel capacity: {}", blueprint.channel.capacity);
    match metrics_port {
        Some(port) => println!("  Metrics endpoint: http://localhost:{port}"),
        None => println!("  Metrics endpoint: disabled"),
    }
    println!(
        "  Aggregator wait timeout: {}s",
        blueprint.shutdown.wait_timeout_secs
    );

    println!();
}
