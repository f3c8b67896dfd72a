//! Configuration validation module
//!
//! Validation rules:
//! - input path non-empty
//! - text_field non-empty
//! - negative_threshold < positive_threshold
//! - thresholds within the compound score range [-1, 1]
//! - channel capacity > 0
//! - metrics port != 0

use contracts::{ContractError, PipelineBlueprint};

/// Validate a PipelineBlueprint
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(blueprint: &PipelineBlueprint) -> Result<(), ContractError> {
    validate_input(blueprint)?;
    validate_classifier(blueprint)?;
    validate_channel(blueprint)?;
    validate_metrics(blueprint)?;
    Ok(())
}

/// Validate input settings
fn validate_input(blueprint: &PipelineBlueprint) -> Result<(), ContractError> {
    if blueprint.input.path.as_os_str().is_empty() {
        return Err(ContractError::config_validation(
            "input.path",
            "input path must not be empty",
        ));
    }
    if blueprint.input.text_field.trim().is_empty() {
        return Err(ContractError::config_validation(
            "input.text_field",
            "text field name must not be empty",
        ));
    }
    Ok(())
}

/// Validate classifier thresholds
fn validate_classifier(blueprint: &PipelineBlueprint) -> Result<(), ContractError> {
    let c = &blueprint.classifier;

    if c.negative_threshold >= c.positive_threshold {
        return Err(ContractError::config_validation(
            "classifier",
            format!(
                "negative_threshold ({}) must be below positive_threshold ({})",
                c.negative_threshold, c.positive_threshold
            ),
        ));
    }

    for (name, value) in [
        ("classifier.positive_threshold", c.positive_threshold),
        ("classifier.negative_threshold", c.negative_threshold),
    ] {
        if !(-1.0..=1.0).contains(&value) {
            return Err(ContractError::config_validation(
                name,
                format!("threshold must be within [-1, 1], got {value}"),
            ));
        }
    }
    Ok(())
}

/// Validate channel sizing
fn validate_channel(blueprint: &PipelineBlueprint) -> Result<(), ContractError> {
    if blueprint.channel.capacity == 0 {
        return Err(ContractError::config_validation(
            "channel.capacity",
            "channel capacity must be > 0",
        ));
    }
    Ok(())
}

/// Validate metrics settings
fn validate_metrics(blueprint: &PipelineBlueprint) -> Result<(), ContractError> {
    if blueprint.metrics.port == 0 {
        return Err(ContractError::config_validation(
            "metrics.port",
            "metrics port must not be 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_toml, ConfigFormat};
    use crate::ConfigLoader;

    fn base_blueprint() -> PipelineBlueprint {
        parse_toml(
            r#"
[input]
path = "data.jsonl"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_defaults() {
        assert!(validate(&base_blueprint()).is_ok());
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let mut bp = base_blueprint();
        bp.classifier.positive_threshold = -0.2;
        bp.classifier.negative_threshold = 0.2;
        let err = validate(&bp).unwrap_err();
        assert!(matches!(err, ContractError::ConfigValidation { .. }));
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let mut bp = base_blueprint();
        bp.classifier.positive_threshold = 1.5;
        assert!(validate(&bp).is_err());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut bp = base_blueprint();
        bp.channel.capacity = 0;
        assert!(validate(&bp).is_err());
    }

    #[test]
    fn test_zero_port_rejected_via_loader() {
        let content = r#"
[input]
path = "data.jsonl"

[metrics]
port = 0
"#;
        let result = ConfigLoader::load_from_str(content, ConfigFormat::Toml);
        assert!(result.is_err());
    }
}
