//! The prediction handler: load the artifact, classify the fixed sample,
//! wrap the labels in a response envelope.
use anyhow::{Context, Result};
use lambda_runtime::LambdaEvent;
use log::{debug, info};
use serde_json::Value;

use crate::config::{HandlerConfig, SAMPLE_FEATURES};
use crate::error::PredictError;
use crate::math::{Array2, ShapeError};
use crate::models::ModelArtifact;
use crate::response::ApiResponse;

/// Feature matrix holding the single fixed sample.
pub fn sample_batch() -> std::result::Result<Array2<f32>, ShapeError> {
    Array2::from_rows(&[SAMPLE_FEATURES])
}

/// Run one invocation against the artifact named by `config`.
///
/// The artifact is read from disk on every call; any failure is returned
/// to the caller instead of being turned into an error response.
pub fn handle_invocation(config: &HandlerConfig) -> Result<ApiResponse> {
    let path = &config.model_path;
    debug!("Loading model artifact from {}", path.display());
    let artifact = ModelArtifact::load(path)
        .with_context(|| format!("Failed to load model from {}", path.display()))?;
    let classifier = artifact.into_classifier();

    let predictions = classifier
        .predict(&sample_batch()?)
        .with_context(|| format!("{} model failed to predict", classifier.name()))?;
    info!(
        "{} model produced {} prediction(s)",
        classifier.name(),
        predictions.len()
    );

    let response = ApiResponse::json(&predictions).map_err(PredictError::Encode)?;
    Ok(response)
}

/// Lambda entry point. The event payload is ignored.
pub async fn function_handler(
    event: LambdaEvent<Value>,
) -> Result<ApiResponse, lambda_runtime::Error> {
    let (_payload, context) = event.into_parts();
    debug!("Handling request {}", context.request_id);
    let config = HandlerConfig::from_env();
    Ok(handle_invocation(&config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_batch_is_one_row_of_four() {
        let x = sample_batch().unwrap();
        assert_eq!(x.shape(), (1, 4));
        assert_eq!(x.row_slice(0), &[5.0, 3.2, 1.6, 0.4]);
    }
}
