use std::fmt;

use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;
use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};
use crate::math::Array2;
use crate::models::classifier_trait::{check_shape, ClassifierModel};
use crate::models::label::Label;

fn default_threshold() -> f32 {
    0.5
}

/// The parts of a persisted `GBDT` that prediction relies on. `gbdt` keeps
/// them private, so they are read back through the serde representation.
#[derive(Deserialize)]
struct EnsembleShape {
    conf: EnsembleConf,
    trees: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct EnsembleConf {
    feature_size: usize,
    iterations: usize,
}

/// Largest feature index used by a split node anywhere under `value`.
fn max_split_feature(value: &serde_json::Value) -> Option<usize> {
    match value {
        serde_json::Value::Object(map) => {
            let own = match (map.get("feature_index"), map.get("is_leaf")) {
                (Some(index), Some(serde_json::Value::Bool(false))) => {
                    index.as_u64().map(|i| i as usize)
                }
                _ => None,
            };
            map.values().filter_map(max_split_feature).chain(own).max()
        }
        serde_json::Value::Array(items) => items.iter().filter_map(max_split_feature).max(),
        _ => None,
    }
}

/// Gradient Boosting Decision Tree (GBDT) ensemble persisted by the `gbdt` crate.
///
/// With `classes` set the ensemble output is thresholded into one of the two
/// labels; without it the raw output is returned as a numeric label.
#[derive(Deserialize, Serialize)]
pub struct GbdtClassifier {
    pub n_features: usize,
    pub model: GBDT,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<(Label, Label)>,
    #[serde(default = "default_threshold")]
    pub threshold: f32,
}

impl GbdtClassifier {
    pub fn new(model: GBDT, n_features: usize) -> Self {
        GbdtClassifier {
            n_features,
            model,
            classes: None,
            threshold: default_threshold(),
        }
    }

    pub fn with_classes(mut self, negative: Label, positive: Label, threshold: f32) -> Self {
        self.classes = Some((negative, positive));
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_features == 0 {
            return Err(PredictError::InvalidArtifact(
                "GBDT model declares zero features".to_string(),
            ));
        }
        if !self.threshold.is_finite() {
            return Err(PredictError::InvalidArtifact(format!(
                "GBDT threshold must be finite, got {}",
                self.threshold
            )));
        }

        let shape: EnsembleShape = serde_json::to_value(&self.model)
            .and_then(serde_json::from_value)
            .map_err(|e| {
                PredictError::InvalidArtifact(format!("unreadable GBDT ensemble: {}", e))
            })?;
        if shape.conf.feature_size != self.n_features {
            return Err(PredictError::InvalidArtifact(format!(
                "GBDT ensemble was trained on {} features but the artifact declares {}",
                shape.conf.feature_size, self.n_features
            )));
        }
        // `GBDT::predict` asserts one tree per boosting iteration
        if shape.trees.len() != shape.conf.iterations {
            return Err(PredictError::InvalidArtifact(format!(
                "GBDT ensemble has {} trees for {} iterations",
                shape.trees.len(),
                shape.conf.iterations
            )));
        }
        if let Some(index) = shape.trees.iter().filter_map(max_split_feature).max() {
            if index >= self.n_features {
                return Err(PredictError::InvalidArtifact(format!(
                    "GBDT tree splits on feature {} of {}",
                    index, self.n_features
                )));
            }
        }
        Ok(())
    }

    /// Raw ensemble output, one value per row.
    pub fn decision_function(&self, x: &Array2<f32>) -> Result<Vec<f32>> {
        check_shape(self, x)?;
        if x.nrows() == 0 {
            return Ok(Vec::new());
        }
        let mut test_x = DataVec::new();
        for row in x.rows() {
            test_x.push(Data::new_training_data(row.to_vec(), 1.0, 0.0, None));
        }
        Ok(self.model.predict(&test_x))
    }
}

impl ClassifierModel for GbdtClassifier {
    fn predict(&self, x: &Array2<f32>) -> Result<Vec<Label>> {
        let scores = self.decision_function(x)?;
        let labels = match &self.classes {
            Some((negative, positive)) => scores
                .iter()
                .map(|&s| {
                    if s >= self.threshold {
                        positive.clone()
                    } else {
                        negative.clone()
                    }
                })
                .collect(),
            None => scores.into_iter().map(Label::from).collect(),
        };
        Ok(labels)
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn name(&self) -> &str {
        "gbdt"
    }
}

impl fmt::Debug for GbdtClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GbdtClassifier")
            .field("n_features", &self.n_features)
            .field("classes", &self.classes)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
