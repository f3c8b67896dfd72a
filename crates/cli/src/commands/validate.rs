//! `validate` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ConfigSummary>,
}

#[derive(Serialize)]
struct ConfigSummary {
    input_path: String,
    text_field: String,
    positive_threshold: f64,
    negative_threshold: f64,
    channel_capacity: usize,
    metrics_port: u16,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(config = %args.config.display(), "Validating configuration");

    let result = validate_config(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Configuration validation failed")
    }
}

fn validate_config(args: &ValidateArgs) -> ValidationResult {
    let config_path = args.config.display().to_string();

    // Check file exists
    if !args.config.exists() {
        return ValidationResult {
            valid: false,
            config_path,
            error: Some(format!("File not found: {}", args.config.display())),
            summary: None,
        };
    }

    match config_loader::ConfigLoader::load_from_path(&args.config) {
        Ok(blueprint) => ValidationResult {
            valid: true,
            config_path,
            error: None,
            summary: Some(ConfigSummary {
                input_path: blueprint.input.path.display().to_string(),
                text_field: blueprint.input.text_field.clone(),
                positive_threshold: blueprint.classifier.positive_threshold,
                negative_threshold: blueprint.classifier.negative_threshold,
                channel_capacity: blueprint.channel.capacity,
                metrics_port: blueprint.metrics.port,
            }),
        },
        Err(e) => ValidationResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            summary: None,
        },
    }
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Configuration is valid: {}", result.config_path);
        if let Some(ref summary) = result.summary {
            println!("  Input: {} (field '{}')", summary.input_path, summary.text_field);
            println!(
                "  Thresholds: positive >= {}, negative <= {}",
                summary.positive_threshold, summary.negative_threshold
            );
            println!("  Channel capacity: {}", summary.channel_capacity);
            println!("  Metrics port: {}", summary.metrics_port);
        }
    } else {
        println!("✗ Configuration is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("  Error: {error}");
        }
    }
}
